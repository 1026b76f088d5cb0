//! Extraction session
//!
//! [`ChartbookSession`] ties together a loaded workbook (the discovery
//! snapshot, with cached values), the chart catalog built from it, and the
//! external evaluator that produces fresh values for each parameter run.

use ahash::AHashMap;
use chartbook_core::{CellValue, Workbook};
use chartbook_extract::{
    input_rows, normalize, output_rows, ChartCatalog, FigureTitle, InputRow, OutputRow,
    INPUT_SHEET, OUTPUT_SHEET,
};
use chartbook_model::ChartDescription;

use crate::error::{Error, Result};
use crate::evaluate::{CalculationInput, Evaluated, SpreadsheetEvaluator};

/// Caller-supplied parameter values, keyed by generated input keys
/// (`input_0`, `input_1`, ...)
pub type ParamValues = AHashMap<String, CellValue>;

/// A chart-extraction session over one workbook
///
/// The catalog is built once at construction. Figures are extracted against
/// a freshly evaluated workbook on every call; values differ between
/// parameter runs, so chart descriptions are never cached.
pub struct ChartbookSession<E> {
    workbook: Workbook,
    catalog: ChartCatalog,
    evaluator: E,
}

impl<E: SpreadsheetEvaluator> ChartbookSession<E> {
    /// Create a session from a loaded workbook and an evaluator
    pub fn new(workbook: Workbook, evaluator: E) -> Self {
        let catalog = ChartCatalog::discover(&workbook);
        Self {
            workbook,
            catalog,
            evaluator,
        }
    }

    /// The discovery workbook snapshot
    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    /// The chart catalog built at construction
    pub fn catalog(&self) -> &ChartCatalog {
        &self.catalog
    }

    /// Validate that the convention-named input and output sheets are
    /// present
    pub fn validate_sheet_names(&self) -> Result<()> {
        if !self.workbook.has_sheet(INPUT_SHEET) || !self.workbook.has_sheet(OUTPUT_SHEET) {
            return Err(Error::configuration(
                "excel_file",
                "The sheet names are not correctly formatted. \
                 Please check the sheet and follow the documentation",
            ));
        }
        Ok(())
    }

    /// The declared input parameters from the input sheet
    pub fn input_cells(&self) -> Result<Vec<InputRow>> {
        Ok(input_rows(&self.workbook)?)
    }

    /// Title-list view of every cataloged chart, in discovery order
    pub fn figure_titles(&self) -> Vec<FigureTitle> {
        self.catalog.titles()
    }

    /// Extract every supported chart against a fresh evaluation
    ///
    /// Unsupported chart types are skipped with a warning; unresolvable
    /// series references fail the whole call.
    pub fn figures(&self, params: &ParamValues) -> Result<Vec<ChartDescription>> {
        let evaluated = self.evaluated(params)?;

        let mut figures = Vec::new();
        for (title, chart) in self.catalog.iter() {
            if let Some(figure) = normalize(title, chart, &evaluated.workbook)? {
                figures.push(figure);
            }
        }

        // `evaluated` is released here, success or failure above
        Ok(figures)
    }

    /// Extract a single chart by title against a fresh evaluation
    pub fn figure_by_title(&self, title: &str, params: &ParamValues) -> Result<ChartDescription> {
        let chart = self
            .catalog
            .get(title)
            .ok_or_else(|| Error::FigureNotFound(title.to_string()))?;

        let evaluated = self.evaluated(params)?;
        normalize(title, chart, &evaluated.workbook)?
            .ok_or_else(|| Error::FigureNotFound(title.to_string()))
    }

    /// The declared outputs with their values from a fresh evaluation
    pub fn outputs(&self, params: &ParamValues) -> Result<Vec<OutputRow>> {
        let evaluated = self.evaluated(params)?;
        Ok(output_rows(&evaluated.workbook, &evaluated.values)?)
    }

    /// Build the ordered substitution list and run one evaluation round
    fn evaluated(&self, params: &ParamValues) -> Result<Evaluated> {
        let inputs = self.calculation_inputs(params)?;
        self.evaluator.evaluate(&inputs)
    }

    /// Bind caller parameters to declared inputs, in sheet order
    ///
    /// The declared input table and the supplied parameter set must agree on
    /// row count; a mismatch means the table was edited after the parameters
    /// were generated and the keys no longer line up.
    fn calculation_inputs(&self, params: &ParamValues) -> Result<Vec<CalculationInput>> {
        let input_cells = self.input_cells()?;

        if input_cells.len() != params.len() {
            return Err(Error::configuration(
                "fields_table",
                "Please do not add or delete rows from the input table, \
                 go back to the previous step and re-process the uploaded file",
            ));
        }

        input_cells
            .into_iter()
            .map(|row| {
                let value = params.get(&row.key).cloned().ok_or_else(|| {
                    Error::configuration(row.key.clone(), "No value supplied for input")
                })?;
                Ok(CalculationInput {
                    field_name: row.name,
                    value,
                })
            })
            .collect()
    }
}
