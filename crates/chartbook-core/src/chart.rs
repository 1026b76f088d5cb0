//! Raw chart objects embedded in a worksheet
//!
//! These types mirror the loosely-typed chart graph found inside a workbook
//! file: every field the file format makes optional is optional here too.
//! Normalizing them into something a renderer can use is the job of the
//! extraction layer.

/// An embedded chart, as discovered on a sheet
///
/// The type tag is kept as the raw string from the file (e.g. `"lineChart"`,
/// `"pieChart"`); classification against the supported set happens during
/// extraction, not at load time.
#[derive(Debug, Clone)]
pub struct ChartHandle {
    /// Raw chart type tag
    pub type_tag: String,
    /// Explicit chart title, if any
    pub title: Option<ChartTitle>,
    /// X axis title, if any
    pub x_axis_title: Option<String>,
    /// Y axis title, if any
    pub y_axis_title: Option<String>,
    /// Series descriptors in stored order
    pub series: Vec<RawSeries>,
}

impl ChartHandle {
    /// Create a new chart handle with the given raw type tag
    pub fn new<S: Into<String>>(type_tag: S) -> Self {
        Self {
            type_tag: type_tag.into(),
            title: None,
            x_axis_title: None,
            y_axis_title: None,
            series: Vec::new(),
        }
    }

    /// Set the chart title
    pub fn with_title(mut self, title: ChartTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the axis titles
    pub fn with_axis_titles<X: Into<String>, Y: Into<String>>(mut self, x: X, y: Y) -> Self {
        self.x_axis_title = Some(x.into());
        self.y_axis_title = Some(y.into());
        self
    }

    /// Append a series descriptor
    pub fn add_series(&mut self, series: RawSeries) {
        self.series.push(series);
    }
}

/// A chart title stored as rich-text runs
///
/// File formats split a title into formatting runs; the plain-text title is
/// the concatenation of all runs.
#[derive(Debug, Clone, Default)]
pub struct ChartTitle {
    /// Text runs in document order
    pub runs: Vec<String>,
}

impl ChartTitle {
    /// Create a title from a single run
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            runs: vec![text.into()],
        }
    }

    /// Create a title from rich-text runs
    pub fn from_runs<I, S>(runs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            runs: runs.into_iter().map(Into::into).collect(),
        }
    }

    /// Concatenate all runs into the plain-text title
    pub fn text(&self) -> String {
        self.runs.concat()
    }
}

/// One raw series descriptor inside a chart
///
/// Which fields are populated depends on the chart kind: scatter charts carry
/// `x_values`/`y_values`, everything else carries `categories`/`values`. Any
/// of them may be absent in the file.
#[derive(Debug, Clone, Default)]
pub struct RawSeries {
    /// Series name from the series text reference, if any
    pub name: Option<String>,
    /// Category reference (line/bar/pie)
    pub categories: Option<DataSource>,
    /// Value reference (line/bar/pie)
    pub values: Option<DataSource>,
    /// X-value reference (scatter)
    pub x_values: Option<DataSource>,
    /// Y-value reference (scatter)
    pub y_values: Option<DataSource>,
}

impl RawSeries {
    /// Create an empty series descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the series name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the category reference
    pub fn with_categories(mut self, source: DataSource) -> Self {
        self.categories = Some(source);
        self
    }

    /// Set the value reference
    pub fn with_values(mut self, source: DataSource) -> Self {
        self.values = Some(source);
        self
    }

    /// Set the X-value reference (scatter)
    pub fn with_x_values(mut self, source: DataSource) -> Self {
        self.x_values = Some(source);
        self
    }

    /// Set the Y-value reference (scatter)
    pub fn with_y_values(mut self, source: DataSource) -> Self {
        self.y_values = Some(source);
        self
    }
}

/// A reference to chart data, with the cached display format the file stored
/// alongside it
#[derive(Debug, Clone)]
pub struct DataSource {
    /// Spreadsheet-syntax range reference (e.g. `'Sheet 1'!$A$2:$A$10`)
    pub reference: String,
    /// Cached number format code, if any (`"General"` means default)
    pub format_code: Option<String>,
}

impl DataSource {
    /// Create a data source without a cached format
    pub fn new<S: Into<String>>(reference: S) -> Self {
        Self {
            reference: reference.into(),
            format_code: None,
        }
    }

    /// Set the cached format code
    pub fn with_format<S: Into<String>>(mut self, format_code: S) -> Self {
        self.format_code = Some(format_code.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_runs_concatenate() {
        let title = ChartTitle::from_runs(["Annual ", "Report"]);
        assert_eq!(title.text(), "Annual Report");

        assert_eq!(ChartTitle::plain("Share").text(), "Share");
        assert_eq!(ChartTitle::default().text(), "");
    }

    #[test]
    fn test_series_builder() {
        let series = RawSeries::new()
            .with_name("Totals")
            .with_categories(DataSource::new("Data!$A$2:$A$5"))
            .with_values(DataSource::new("Data!$B$2:$B$5").with_format("0.00%"));

        assert_eq!(series.name.as_deref(), Some("Totals"));
        assert!(series.x_values.is_none());
        assert_eq!(
            series.values.unwrap().format_code.as_deref(),
            Some("0.00%")
        );
    }
}
