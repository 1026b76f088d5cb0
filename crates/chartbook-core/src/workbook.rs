//! Workbook type - the main document structure

use crate::error::{Error, Result};
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook (spreadsheet document)
///
/// A workbook is an ordered collection of worksheets. Extraction treats it
/// as an immutable snapshot: it is built once by a loader or evaluator and
/// only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    /// Worksheets in file order
    worksheets: Vec<Worksheet>,
}

impl Workbook {
    /// Create a new empty workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a worksheet by name
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Check whether a sheet with the given name exists
    pub fn has_sheet(&self, name: &str) -> bool {
        self.worksheet_by_name(name).is_some()
    }

    /// Iterate over all worksheets in file order
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Add a new worksheet with the given name, returning a mutable
    /// reference for population
    pub fn add_worksheet(&mut self, name: &str) -> Result<&mut Worksheet> {
        self.validate_sheet_name(name)?;
        self.worksheets.push(Worksheet::new(name));
        Ok(self.worksheets.last_mut().unwrap())
    }

    /// Validate a sheet name
    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.len() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        // Duplicate check is case-insensitive, as in Excel
        let name_lower = name.to_lowercase();
        if self
            .worksheets
            .iter()
            .any(|ws| ws.name().to_lowercase() == name_lower)
        {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_order_and_lookup() {
        let mut wb = Workbook::new();
        wb.add_worksheet("Data").unwrap();
        wb.add_worksheet("Charts").unwrap();

        assert_eq!(wb.sheet_count(), 2);
        assert_eq!(wb.worksheet(0).unwrap().name(), "Data");
        assert!(wb.worksheet_by_name("Charts").is_some());
        assert!(wb.worksheet_by_name("Missing").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut wb = Workbook::new();
        wb.add_worksheet("Data").unwrap();

        assert!(wb.add_worksheet("DATA").is_err());
        assert!(wb.add_worksheet("").is_err());

        let long_name = "A".repeat(MAX_SHEET_NAME_LEN + 1);
        assert!(wb.add_worksheet(&long_name).is_err());
    }
}
