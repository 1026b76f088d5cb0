//! Chart normalizer

use chartbook_core::{ChartHandle, Workbook};
use chartbook_model::{ChartDescription, ChartType};

use crate::error::Result;
use crate::series::extract_series;

/// Normalize one chart into a [`ChartDescription`]
///
/// Returns `Ok(None)` for charts whose type tag is outside the supported
/// set: the chart is skipped with a warning and extraction continues for the
/// rest of the workbook. Series resolution failures, by contrast, propagate.
pub fn normalize(
    title: &str,
    chart: &ChartHandle,
    workbook: &Workbook,
) -> Result<Option<ChartDescription>> {
    let Some(chart_type) = ChartType::from_tag(&chart.type_tag) else {
        log::warn!(
            "Chart titled '{}' is not of one of the allowed types and can not be visualised",
            title
        );
        return Ok(None);
    };

    let (x_axis_title, y_axis_title) = if chart_type.has_axes() {
        (chart.x_axis_title.clone(), chart.y_axis_title.clone())
    } else {
        (None, None)
    };

    let series = extract_series(chart, chart_type, workbook)?;

    Ok(Some(ChartDescription {
        title: title.to_string(),
        chart_type,
        x_axis_title,
        y_axis_title,
        series,
    }))
}
