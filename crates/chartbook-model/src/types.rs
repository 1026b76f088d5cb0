//! Supported chart types

use std::fmt;

/// The closed set of chart types chartbook can extract
///
/// Charts with any other raw type tag are skipped with a warning during
/// normalization rather than failing the whole workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChartType {
    Line,
    Scatter,
    Bar,
    Pie,
}

impl ChartType {
    /// Classify a raw chart type tag; `None` for unsupported tags
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "lineChart" => Some(ChartType::Line),
            "scatterChart" => Some(ChartType::Scatter),
            "barChart" => Some(ChartType::Bar),
            "pieChart" => Some(ChartType::Pie),
            _ => None,
        }
    }

    /// The raw type tag for this chart type
    pub fn tag(&self) -> &'static str {
        match self {
            ChartType::Line => "lineChart",
            ChartType::Scatter => "scatterChart",
            ChartType::Bar => "barChart",
            ChartType::Pie => "pieChart",
        }
    }

    /// Pie charts have no axes, so no axis titles are extracted for them
    pub fn has_axes(&self) -> bool {
        !matches!(self, ChartType::Pie)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for ty in [
            ChartType::Line,
            ChartType::Scatter,
            ChartType::Bar,
            ChartType::Pie,
        ] {
            assert_eq!(ChartType::from_tag(ty.tag()), Some(ty));
        }
    }

    #[test]
    fn test_unsupported_tags() {
        assert_eq!(ChartType::from_tag("radarChart"), None);
        assert_eq!(ChartType::from_tag("doughnutChart"), None);
        assert_eq!(ChartType::from_tag(""), None);
        // Tags are case-sensitive in the file format
        assert_eq!(ChartType::from_tag("LineChart"), None);
    }
}
