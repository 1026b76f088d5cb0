//! Chart series extraction

use chartbook_core::{CellValue, ChartHandle, DataSource, Workbook};
use chartbook_model::{ChartType, SeriesRecord};

use crate::deref::dereference;
use crate::error::{Error, Result};
use crate::range::resolve;

/// Extract one chart's series into normalized records, in chart order
///
/// Scatter charts take categories from the X-value reference and values from
/// the Y-value reference. All other types take the category/value pair, with
/// a carry-forward policy on categories: a series that omits its category
/// reference reuses the most recently seen one from an earlier series in the
/// same chart (spreadsheet tools commonly omit redundant category blocks).
/// The carried state is per chart; it never leaks between charts.
///
/// A series with no value reference, or whose referenced sheet or range does
/// not resolve, fails the whole chart: a partial series list would misrender.
pub fn extract_series(
    chart: &ChartHandle,
    chart_type: ChartType,
    workbook: &Workbook,
) -> Result<Vec<SeriesRecord>> {
    let mut records = Vec::with_capacity(chart.series.len());
    let mut carried_categories: Option<DataSource> = None;

    for (index, raw) in chart.series.iter().enumerate() {
        let (categories, values) = match chart_type {
            ChartType::Scatter => (raw.x_values.as_ref(), raw.y_values.as_ref()),
            _ => {
                if let Some(source) = &raw.categories {
                    carried_categories = Some(source.clone());
                }
                (carried_categories.as_ref(), raw.values.as_ref())
            }
        };

        let values = values.ok_or(Error::MissingValueReference(index))?;

        let (category_values, category_format) = match categories {
            Some(source) => {
                let resolved = resolve(&source.reference)?;
                (
                    dereference(workbook, &resolved.sheet_name, &resolved.range)?,
                    normalize_format(source.format_code.as_deref()),
                )
            }
            // No category reference anywhere in the chart so far: the
            // category axis is implicit
            None => (Vec::new(), None),
        };

        let resolved = resolve(&values.reference)?;
        let value_values: Vec<CellValue> =
            dereference(workbook, &resolved.sheet_name, &resolved.range)?;

        records.push(SeriesRecord {
            category_values,
            value_values,
            category_format,
            value_format: normalize_format(values.format_code.as_deref()),
            series_name: raw.name.clone(),
        });
    }

    Ok(records)
}

/// Normalize a cached format code: `"General"` signals default formatting,
/// not a real format string, and resolves to absent
fn normalize_format(code: Option<&str>) -> Option<String> {
    match code {
        None | Some("General") => None,
        Some(code) => Some(code.to_string()),
    }
}
