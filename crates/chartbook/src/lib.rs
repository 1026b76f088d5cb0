//! # chartbook
//!
//! Extracts chart definitions embedded in a spreadsheet workbook (line,
//! scatter, bar and pie charts) and converts them into a renderer-agnostic
//! chart model, driven by a parameter-substitution workflow over two
//! convention-named input/output sheets.
//!
//! Workbook file decoding and formula recalculation are external: a loader
//! builds the [`Workbook`] snapshot, and a [`SpreadsheetEvaluator`]
//! implementation produces a freshly evaluated snapshot for each parameter
//! run.
//!
//! ## Example
//!
//! ```rust,ignore
//! use chartbook::prelude::*;
//!
//! let workbook = my_loader::load("model.xlsx")?;
//! let session = ChartbookSession::new(workbook, my_evaluator);
//!
//! session.validate_sheet_names()?;
//! for figure in session.figures(&params)? {
//!     let json = PlotlyRenderer.render(&figure);
//!     println!("{json}");
//! }
//! ```

pub mod error;
pub mod evaluate;
pub mod prelude;
pub mod render;
pub mod session;

pub use error::{Error, Result};
pub use evaluate::{CalculationInput, Evaluated, SpreadsheetEvaluator};
pub use render::{ChartRenderer, PlotlyRenderer};
pub use session::{ChartbookSession, ParamValues};

// Re-export core types
pub use chartbook_core::{
    CellAddress, CellRange, CellValue, ChartHandle, ChartTitle, DataSource, RawSeries, Workbook,
    Worksheet,
};

// Re-export the chart model
pub use chartbook_model::{ChartDescription, ChartType, SeriesRecord};

// Re-export extraction entry points
pub use chartbook_extract::{
    dereference, extract_series, normalize, resolve, ChartCatalog, FigureTitle, InputRow,
    OutputRow, ResolvedRange, INPUT_SHEET, OUTPUT_SHEET,
};
