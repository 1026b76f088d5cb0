//! Normalized series data

use chartbook_core::CellValue;

/// One fully dereferenced data series
///
/// Category and value sequences should be the same length for a sensible
/// plot, but this is not enforced; the renderer sees whatever the workbook
/// ranges produced.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesRecord {
    /// Category axis data in range order
    pub category_values: Vec<CellValue>,
    /// Value axis data in range order
    pub value_values: Vec<CellValue>,
    /// Number format for the category axis, if not the default
    pub category_format: Option<String>,
    /// Number format for the value axis, if not the default
    pub value_format: Option<String>,
    /// Series name, if the chart provided one
    pub series_name: Option<String>,
}
