//! Prelude module - common imports for chartbook users
//!
//! ```rust
//! use chartbook::prelude::*;
//! ```

pub use crate::{
    // Evaluator seam
    CalculationInput,
    CellAddress,
    CellRange,
    // Cell types
    CellValue,
    // Chart model
    ChartCatalog,
    ChartDescription,
    ChartHandle,
    // Renderer seam
    ChartRenderer,
    ChartTitle,
    ChartType,
    // Session
    ChartbookSession,
    DataSource,
    // Error types
    Error,
    Evaluated,
    FigureTitle,
    InputRow,
    OutputRow,
    ParamValues,
    PlotlyRenderer,
    RawSeries,
    Result,
    SeriesRecord,
    SpreadsheetEvaluator,
    // Main types
    Workbook,
    Worksheet,
    // Convention sheet names
    INPUT_SHEET,
    OUTPUT_SHEET,
};
