//! Error types for the chartbook facade

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the chartbook workflow
#[derive(Debug, Error)]
pub enum Error {
    /// Extraction failure (unresolvable reference, missing value reference)
    #[error(transparent)]
    Extract(#[from] chartbook_extract::Error),

    /// Workbook model failure
    #[error(transparent)]
    Core(#[from] chartbook_core::Error),

    /// The workbook does not satisfy the configuration contract; fatal,
    /// attributed to the field the user must fix
    #[error("Configuration error on '{field}': {message}")]
    Configuration {
        /// Offending field
        field: String,
        /// User-facing message
        message: String,
    },

    /// Lookup by title missed the catalog
    #[error("no figure found with title: {0}")]
    FigureNotFound(String),

    /// The external spreadsheet evaluator failed
    #[error("Spreadsheet evaluation failed: {0}")]
    Evaluator(String),
}

impl Error {
    /// Create a configuration error attributed to a field
    pub fn configuration<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Error::Configuration {
            field: field.into(),
            message: message.into(),
        }
    }
}
