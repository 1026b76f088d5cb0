//! Normalized chart description

use crate::series::SeriesRecord;
use crate::types::ChartType;

/// A fully extracted, renderer-agnostic chart
///
/// Built once per extraction call against a freshly evaluated workbook;
/// never cached across evaluations, since cell values change between
/// parameter runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartDescription {
    /// Chart title; unique key within a workbook
    pub title: String,
    /// Chart type
    pub chart_type: ChartType,
    /// X axis title (absent for pie charts)
    pub x_axis_title: Option<String>,
    /// Y axis title (absent for pie charts)
    pub y_axis_title: Option<String>,
    /// Series in chart order
    pub series: Vec<SeriesRecord>,
}
