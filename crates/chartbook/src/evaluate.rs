//! Spreadsheet evaluator collaborator
//!
//! Recalculation is external and potentially expensive: the evaluator takes
//! the workbook resource it was built around plus a set of input
//! substitutions, recalculates, and returns a fresh workbook snapshot with
//! final cell values plus the named output values. This crate treats it as
//! an opaque synchronous call; retry and timeout policy belong to the
//! caller.

use ahash::AHashMap;
use chartbook_core::{CellValue, Workbook};

use crate::error::Result;

/// One input substitution for an evaluation round
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationInput {
    /// Declared input name from the input sheet
    pub field_name: String,
    /// Value to substitute
    pub value: CellValue,
}

impl CalculationInput {
    /// Create a new substitution
    pub fn new<S: Into<String>, V: Into<CellValue>>(field_name: S, value: V) -> Self {
        Self {
            field_name: field_name.into(),
            value: value.into(),
        }
    }
}

/// The result of one evaluation round
#[derive(Debug, Clone)]
pub struct Evaluated {
    /// Recalculated workbook with final cell values
    pub workbook: Workbook,
    /// Named output values, keyed by output name
    pub values: AHashMap<String, CellValue>,
}

/// External spreadsheet recalculation service
///
/// Implementations wrap whatever actually evaluates the workbook (a
/// calculation engine, a remote service). The returned snapshot must be
/// complete before extraction begins; there is no partial evaluation.
pub trait SpreadsheetEvaluator {
    /// Recalculate with the given substitutions applied
    fn evaluate(&self, inputs: &[CalculationInput]) -> Result<Evaluated>;
}
