//! Worksheet type

use ahash::AHashMap;

use crate::cell::{CellAddress, CellRange, CellValue};
use crate::chart::ChartHandle;
use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
///
/// Cells are stored sparsely; an address with no entry reads as
/// [`CellValue::Empty`]. Merged regions keep their value in the top-left
/// anchor cell only; the remaining addresses are placeholders, and range
/// dereferencing skips them.
#[derive(Debug, Clone)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Sparse cell storage keyed by (row, col)
    cells: AHashMap<(u32, u16), CellValue>,
    /// Merged regions
    merged_regions: Vec<CellRange>,
    /// Embedded charts in stored order
    charts: Vec<ChartHandle>,
    /// Highest row index with a stored cell, if any
    max_row: Option<u32>,
}

impl Worksheet {
    /// Create a new empty worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: AHashMap::new(),
            merged_regions: Vec::new(),
            charts: Vec::new(),
            max_row: None,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Cell access ===

    /// Get a cell value by address string (e.g., "A1")
    pub fn value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.value_at(addr.row, addr.col))
    }

    /// Get a cell value by row and column indices
    pub fn value_at(&self, row: u32, col: u16) -> CellValue {
        self.cells
            .get(&(row, col))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }

    /// Set a cell value by address string
    pub fn set_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_value_at(addr.row, addr.col, value);
        Ok(())
    }

    /// Set a cell value by row and column indices
    ///
    /// Out-of-bounds indices are unrepresentable: [`CellAddress::parse`]
    /// rejects them and loaders work in parsed addresses.
    pub fn set_value_at<V: Into<CellValue>>(&mut self, row: u32, col: u16, value: V) {
        debug_assert!(row < MAX_ROWS && col < MAX_COLS);
        self.max_row = Some(self.max_row.map_or(row, |m| m.max(row)));
        self.cells.insert((row, col), value.into());
    }

    /// Highest row index holding a stored cell, or `None` for an empty sheet
    pub fn max_row(&self) -> Option<u32> {
        self.max_row
    }

    // === Merged regions ===

    /// Mark a range as merged
    ///
    /// The top-left cell keeps its value; the other addresses become
    /// placeholder continuations.
    pub fn merge_cells(&mut self, range: &str) -> Result<()> {
        let range = CellRange::parse(range).map_err(|_| Error::InvalidRange(range.into()))?;
        self.merged_regions.push(range);
        Ok(())
    }

    /// Check whether an address is a merged-cell continuation (inside a
    /// merged region but not its anchor)
    pub fn is_merged_continuation(&self, addr: &CellAddress) -> bool {
        self.merged_regions
            .iter()
            .any(|r| r.contains(addr) && r.start != *addr)
    }

    // === Charts ===

    /// Attach an embedded chart to this sheet
    pub fn add_chart(&mut self, chart: ChartHandle) {
        self.charts.push(chart);
    }

    /// Embedded charts in stored order
    pub fn charts(&self) -> &[ChartHandle] {
        &self.charts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sparse_cells_read_empty() {
        let mut ws = Worksheet::new("Data");
        ws.set_value("B2", 1.5).unwrap();

        assert_eq!(ws.value("B2").unwrap(), CellValue::Number(1.5));
        assert_eq!(ws.value("A1").unwrap(), CellValue::Empty);
        assert_eq!(ws.max_row(), Some(1));
    }

    #[test]
    fn test_merged_continuation() {
        let mut ws = Worksheet::new("Data");
        ws.set_value("A1", "header").unwrap();
        ws.merge_cells("A1:B1").unwrap();

        assert!(!ws.is_merged_continuation(&CellAddress::new(0, 0)));
        assert!(ws.is_merged_continuation(&CellAddress::new(0, 1)));
        assert!(!ws.is_merged_continuation(&CellAddress::new(1, 0)));
    }
}
