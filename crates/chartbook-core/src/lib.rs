//! # chartbook-core
//!
//! Core data structures for the chartbook chart-extraction library.
//!
//! This crate provides the in-memory representation of an already-evaluated
//! workbook, as produced by an external loader:
//! - [`CellValue`] - Evaluated cell scalars (numbers, text, booleans, dates)
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and ranges
//! - [`ChartHandle`] - Raw chart objects embedded in a sheet
//! - [`Workbook`], [`Worksheet`] - The main document structures
//!
//! ## Example
//!
//! ```rust
//! use chartbook_core::{Workbook, CellValue};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.add_worksheet("Data").unwrap();
//!
//! // Using string addresses
//! sheet.set_value("A1", "Hello").unwrap();
//! sheet.set_value("B1", 42.0).unwrap();
//!
//! // Or using row/column indices (0-based)
//! sheet.set_value_at(1, 0, CellValue::Text("World".into()));
//! ```

pub mod cell;
pub mod chart;
pub mod error;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellAddress, CellRange, CellValue};
pub use chart::{ChartHandle, ChartTitle, DataSource, RawSeries};
pub use error::{Error, Result};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
