//! # chartbook-extract
//!
//! Extraction logic: locates charts in a workbook, resolves their series
//! references against evaluated cell values, and normalizes the result into
//! the renderer-agnostic model of `chartbook-model`.
//!
//! The pipeline, leaves first:
//! - [`resolve`] - parse a spreadsheet-syntax range reference into a sheet
//!   name and a normalized range string
//! - [`dereference`] - read the addressed cells into a flat value sequence
//! - [`extract_series`] - resolve one chart's series into [`SeriesRecord`]s
//! - [`normalize`] - assemble a full [`ChartDescription`], enforcing the
//!   allowed-type policy
//! - [`ChartCatalog`] - title-keyed chart discovery across a whole workbook
//!
//! [`SeriesRecord`]: chartbook_model::SeriesRecord
//! [`ChartDescription`]: chartbook_model::ChartDescription

mod catalog;
mod deref;
mod error;
mod normalize;
mod range;
mod series;
pub mod tables;

pub use catalog::{ChartCatalog, FigureTitle};
pub use deref::dereference;
pub use error::{Error, Result};
pub use normalize::normalize;
pub use range::{resolve, ResolvedRange};
pub use series::extract_series;
pub use tables::{input_rows, output_rows, InputRow, OutputRow, INPUT_SHEET, OUTPUT_SHEET};
