//! Chart rendering seam
//!
//! Extraction produces [`ChartDescription`]s; turning one into pixels is the
//! renderer's job. Any plotting backend consuming `{type, axis titles,
//! series list}` can implement [`ChartRenderer`]. The built-in
//! [`PlotlyRenderer`] emits a Plotly-compatible figure as JSON.

use chartbook_core::CellValue;
use chartbook_model::{ChartDescription, ChartType};
use serde_json::{json, Map, Value};

/// A pluggable plotting backend
pub trait ChartRenderer {
    /// Rendered figure type
    type Output;

    /// Render one chart description
    fn render(&self, chart: &ChartDescription) -> Self::Output;
}

/// Reference renderer producing a Plotly figure as a JSON value
/// (`{"data": [...], "layout": {...}}`)
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotlyRenderer;

impl ChartRenderer for PlotlyRenderer {
    type Output = Value;

    fn render(&self, chart: &ChartDescription) -> Value {
        let data: Vec<Value> = chart.series.iter().map(|s| trace(chart, s)).collect();
        json!({
            "data": data,
            "layout": layout(chart),
        })
    }
}

fn trace(chart: &ChartDescription, series: &chartbook_model::SeriesRecord) -> Value {
    let categories = cells_to_json(&series.category_values);
    let values = cells_to_json(&series.value_values);

    let mut trace = Map::new();
    match chart.chart_type {
        ChartType::Line => {
            trace.insert("type".into(), "scatter".into());
            trace.insert("mode".into(), "lines".into());
            trace.insert("x".into(), categories);
            trace.insert("y".into(), values);
        }
        ChartType::Scatter => {
            trace.insert("type".into(), "scatter".into());
            trace.insert("x".into(), categories);
            trace.insert("y".into(), values);
        }
        ChartType::Bar => {
            trace.insert("type".into(), "bar".into());
            trace.insert("x".into(), categories);
            trace.insert("y".into(), values);
        }
        ChartType::Pie => {
            trace.insert("type".into(), "pie".into());
            trace.insert("labels".into(), categories);
            trace.insert("values".into(), values);
        }
    }
    if let Some(name) = &series.series_name {
        trace.insert("name".into(), name.as_str().into());
    }
    Value::Object(trace)
}

fn layout(chart: &ChartDescription) -> Value {
    let mut layout = Map::new();
    layout.insert("title".into(), json!({ "text": chart.title }));

    if chart.chart_type != ChartType::Pie {
        // Tick formats come from the first series, as the file stores one
        // cached format per reference rather than per axis
        let first = chart.series.first();
        layout.insert(
            "xaxis".into(),
            axis(
                chart.x_axis_title.as_deref(),
                first.and_then(|s| s.category_format.as_deref()),
            ),
        );
        layout.insert(
            "yaxis".into(),
            axis(
                chart.y_axis_title.as_deref(),
                first.and_then(|s| s.value_format.as_deref()),
            ),
        );
    }

    Value::Object(layout)
}

fn axis(title: Option<&str>, tickformat: Option<&str>) -> Value {
    let mut axis = Map::new();
    if let Some(title) = title {
        axis.insert("title".into(), json!({ "text": title }));
    }
    if let Some(fmt) = tickformat {
        axis.insert("tickformat".into(), fmt.into());
    }
    Value::Object(axis)
}

fn cells_to_json(values: &[CellValue]) -> Value {
    Value::Array(values.iter().map(cell_to_json).collect())
}

fn cell_to_json(value: &CellValue) -> Value {
    match value {
        CellValue::Empty => Value::Null,
        CellValue::Number(n) => json!(n),
        CellValue::Text(s) => json!(s),
        CellValue::Boolean(b) => json!(b),
        CellValue::DateTime(dt) => json!(dt.to_string()),
    }
}
