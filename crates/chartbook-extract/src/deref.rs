//! Cell range dereferencer

use chartbook_core::{CellRange, CellValue, Error as CoreError, Workbook};

use crate::error::Result;

/// Read the rectangular block addressed by `range` on `sheet_name`,
/// flattened in row-major order
///
/// Merged-cell continuations are skipped; they are placeholders, not actual
/// cells. Empty cells within the block are included as [`CellValue::Empty`].
///
/// Fails with a lookup error if the sheet is not present in the workbook,
/// or with a range-syntax error if `range` does not parse as a rectangular
/// block.
pub fn dereference(workbook: &Workbook, sheet_name: &str, range: &str) -> Result<Vec<CellValue>> {
    let sheet = workbook
        .worksheet_by_name(sheet_name)
        .ok_or_else(|| CoreError::SheetNotFound(sheet_name.to_string()))?;

    let range = CellRange::parse(range)?;

    let capacity = range.row_count() as usize * range.col_count() as usize;
    let mut values = Vec::with_capacity(capacity);
    for addr in range.cells() {
        if sheet.is_merged_continuation(&addr) {
            continue;
        }
        values.push(sheet.value_at(addr.row, addr.col));
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn sample_workbook() -> Workbook {
        let mut wb = Workbook::new();
        let ws = wb.add_worksheet("Data").unwrap();
        ws.set_value("A1", "x").unwrap();
        ws.set_value("B1", "y").unwrap();
        ws.set_value("A2", 1.0).unwrap();
        ws.set_value("B2", 2.0).unwrap();
        wb
    }

    #[test]
    fn test_row_major_flatten() {
        let wb = sample_workbook();
        let values = dereference(&wb, "Data", "A1:B2").unwrap();
        assert_eq!(
            values,
            vec![
                CellValue::Text("x".into()),
                CellValue::Text("y".into()),
                CellValue::Number(1.0),
                CellValue::Number(2.0),
            ]
        );
    }

    #[test]
    fn test_empty_cells_included() {
        let wb = sample_workbook();
        let values = dereference(&wb, "Data", "A1:A3").unwrap();
        assert_eq!(values[2], CellValue::Empty);
    }

    #[test]
    fn test_merged_continuations_skipped() {
        let mut wb = Workbook::new();
        let ws = wb.add_worksheet("Data").unwrap();
        ws.set_value("A1", "merged").unwrap();
        ws.set_value("A2", 5.0).unwrap();
        ws.merge_cells("A1:B1").unwrap();

        let values = dereference(&wb, "Data", "A1:B2").unwrap();
        assert_eq!(
            values,
            vec![
                CellValue::Text("merged".into()),
                CellValue::Number(5.0),
                CellValue::Empty,
            ]
        );
    }

    #[test]
    fn test_missing_sheet_is_lookup_error() {
        let wb = sample_workbook();
        let err = dereference(&wb, "Nope", "A1:A2").unwrap_err();
        assert!(matches!(
            err,
            Error::Core(CoreError::SheetNotFound(ref name)) if name == "Nope"
        ));
    }

    #[test]
    fn test_bad_range_is_syntax_error() {
        let wb = sample_workbook();
        assert!(dereference(&wb, "Data", "not-a-range").is_err());
    }
}
