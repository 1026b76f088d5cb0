//! Error types for chartbook-extract

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during extraction
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the workbook model (bad range syntax, missing sheet, ...)
    #[error(transparent)]
    Core(#[from] chartbook_core::Error),

    /// A range reference was expected but the raw string is empty
    ///
    /// Distinct from a reference whose sheet or range cannot be resolved:
    /// an absent reference can be a valid state (implicit category axis),
    /// an unresolvable one never is.
    #[error("Empty range reference")]
    EmptyReference,

    /// A series has no value reference; the chart cannot be rendered
    #[error("Series {0} has no value reference")]
    MissingValueReference(usize),

    /// An output row names a value the evaluator did not produce
    #[error("No evaluated value for output: {0}")]
    MissingOutputValue(String),
}
