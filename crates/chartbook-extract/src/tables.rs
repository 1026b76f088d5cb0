//! Input/output table extraction
//!
//! Two convention-named sheets drive the parameter-substitution workflow.
//! Both hold a header row followed by data rows with a fixed column layout:
//! name, unit, description, default (input sheet only).

use ahash::AHashMap;
use chartbook_core::{CellValue, Error as CoreError, Workbook, Worksheet};

use crate::error::{Error, Result};

/// Sheet declaring the workbook's input parameters
pub const INPUT_SHEET: &str = "viktor-input-sheet";

/// Sheet declaring the workbook's named outputs
pub const OUTPUT_SHEET: &str = "viktor-output-sheet";

/// One declared input parameter
#[derive(Debug, Clone, PartialEq)]
pub struct InputRow {
    /// Parameter name, as used by the evaluator for substitution
    pub name: String,
    /// Unit label; empty string when not given
    pub unit: String,
    /// Human-readable description, if any
    pub description: Option<String>,
    /// Default value from the sheet
    pub default: CellValue,
    /// Generated key, `input_{i}` with `i` the 0-based position among
    /// included rows
    ///
    /// Keys are positional: reordering, adding or removing rows invalidates
    /// previously generated keys.
    pub key: String,
}

/// One declared output with its evaluated value
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    /// Output name, matching a key in the evaluator's value mapping
    pub name: String,
    /// Unit label; empty string when not given
    pub unit: String,
    /// Human-readable description, if any
    pub description: Option<String>,
    /// Generated positional key, `output_{i}`
    pub key: String,
    /// Final scalar value from the evaluation round
    pub value: CellValue,
}

/// Read the declared input parameters from the input sheet
pub fn input_rows(workbook: &Workbook) -> Result<Vec<InputRow>> {
    let sheet = required_sheet(workbook, INPUT_SHEET)?;
    let mut rows = Vec::new();

    for row in data_rows(sheet) {
        let name = sheet.value_at(row, 0);
        if name.is_empty() {
            continue;
        }
        rows.push(InputRow {
            name: name.to_string(),
            unit: unit_cell(sheet, row),
            description: text_cell(sheet, row, 2),
            default: sheet.value_at(row, 3),
            key: format!("input_{}", rows.len()),
        });
    }

    Ok(rows)
}

/// Read the declared outputs from the output sheet, joined with the
/// evaluator's value mapping
///
/// Returns an empty list when the evaluator produced no values; fails if a
/// declared output names a value the evaluator did not produce.
pub fn output_rows(
    workbook: &Workbook,
    values: &AHashMap<String, CellValue>,
) -> Result<Vec<OutputRow>> {
    let sheet = required_sheet(workbook, OUTPUT_SHEET)?;
    let mut rows = Vec::new();

    if values.is_empty() {
        return Ok(rows);
    }

    for row in data_rows(sheet) {
        let name = sheet.value_at(row, 0);
        if name.is_empty() {
            continue;
        }
        let name = name.to_string();
        let value = values
            .get(&name)
            .cloned()
            .ok_or_else(|| Error::MissingOutputValue(name.clone()))?;
        rows.push(OutputRow {
            unit: unit_cell(sheet, row),
            description: text_cell(sheet, row, 2),
            key: format!("output_{}", rows.len()),
            value,
            name,
        });
    }

    Ok(rows)
}

fn required_sheet<'a>(workbook: &'a Workbook, name: &str) -> Result<&'a Worksheet> {
    workbook
        .worksheet_by_name(name)
        .ok_or_else(|| CoreError::SheetNotFound(name.to_string()).into())
}

/// Data rows start below the header row and stop at the sheet's natural end
fn data_rows(sheet: &Worksheet) -> std::ops::RangeInclusive<u32> {
    match sheet.max_row() {
        Some(max_row) => 1..=max_row,
        // Empty inclusive range
        None => 1..=0,
    }
}

fn unit_cell(sheet: &Worksheet, row: u32) -> String {
    text_cell(sheet, row, 1).unwrap_or_default()
}

fn text_cell(sheet: &Worksheet, row: u32, col: u16) -> Option<String> {
    let value = sheet.value_at(row, col);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input_workbook() -> Workbook {
        let mut wb = Workbook::new();
        let ws = wb.add_worksheet(INPUT_SHEET).unwrap();
        // Header row is ignored
        ws.set_value("A1", "name").unwrap();
        ws.set_value("B1", "unit").unwrap();

        ws.set_value("A2", "span").unwrap();
        ws.set_value("B2", "m").unwrap();
        ws.set_value("C2", "Beam span").unwrap();
        ws.set_value("D2", 12.5).unwrap();

        // Row with empty name is excluded
        ws.set_value("C3", "orphaned description").unwrap();

        ws.set_value("A4", "load").unwrap();
        ws.set_value("D4", 4.0).unwrap();
        wb
    }

    #[test]
    fn test_input_rows_skip_unnamed() {
        let wb = input_workbook();
        let rows = input_rows(&wb).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "span");
        assert_eq!(rows[0].unit, "m");
        assert_eq!(rows[0].description.as_deref(), Some("Beam span"));
        assert_eq!(rows[0].default, CellValue::Number(12.5));
        assert_eq!(rows[0].key, "input_0");

        // Key indexes included rows, not sheet rows
        assert_eq!(rows[1].name, "load");
        assert_eq!(rows[1].unit, "");
        assert_eq!(rows[1].key, "input_1");
    }

    #[test]
    fn test_missing_input_sheet() {
        let wb = Workbook::new();
        assert!(input_rows(&wb).is_err());
    }

    #[test]
    fn test_output_rows_join_values() {
        let mut wb = Workbook::new();
        let ws = wb.add_worksheet(OUTPUT_SHEET).unwrap();
        ws.set_value("A2", "moment").unwrap();
        ws.set_value("B2", "kNm").unwrap();

        let mut values = AHashMap::new();
        values.insert("moment".to_string(), CellValue::Number(88.0));

        let rows = output_rows(&wb, &values).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key, "output_0");
        assert_eq!(rows[0].value, CellValue::Number(88.0));
    }

    #[test]
    fn test_output_rows_empty_values_yield_nothing() {
        let mut wb = Workbook::new();
        let ws = wb.add_worksheet(OUTPUT_SHEET).unwrap();
        ws.set_value("A2", "moment").unwrap();

        let rows = output_rows(&wb, &AHashMap::new()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_output_missing_value_fails() {
        let mut wb = Workbook::new();
        let ws = wb.add_worksheet(OUTPUT_SHEET).unwrap();
        ws.set_value("A2", "moment").unwrap();

        let mut values = AHashMap::new();
        values.insert("other".to_string(), CellValue::Number(1.0));

        assert!(matches!(
            output_rows(&wb, &values),
            Err(Error::MissingOutputValue(ref name)) if name == "moment"
        ));
    }
}
