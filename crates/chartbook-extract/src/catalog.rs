//! Chart catalog
//!
//! Enumerates every chart across every sheet of a workbook and keys them by
//! title for lookup, assigning `"Untitled {n}"` names where no explicit
//! title exists.

use ahash::AHashMap;
use chartbook_core::{ChartHandle, Workbook};

/// A catalog entry: resolved title plus the chart it names
#[derive(Debug, Clone)]
struct CatalogEntry {
    title: String,
    chart: ChartHandle,
}

/// Title-to-chart lookup built once per workbook
///
/// Charts are discovered in sheet order, then in-sheet order. The untitled
/// counter is shared across the whole workbook, starting at 1. Duplicate
/// explicit titles silently overwrite earlier entries: the last chart wins,
/// keeping the first entry's position.
#[derive(Debug, Clone, Default)]
pub struct ChartCatalog {
    entries: Vec<CatalogEntry>,
    index: AHashMap<String, usize>,
}

impl ChartCatalog {
    /// Discover all charts in a workbook
    pub fn discover(workbook: &Workbook) -> Self {
        let mut catalog = Self::default();
        let mut untitled_index = 1u32;

        for sheet in workbook.worksheets() {
            for chart in sheet.charts() {
                let title = match &chart.title {
                    Some(title) => title.text(),
                    None => {
                        let title = format!("Untitled {}", untitled_index);
                        untitled_index += 1;
                        title
                    }
                };
                catalog.insert(title, chart.clone());
            }
        }

        catalog
    }

    fn insert(&mut self, title: String, chart: ChartHandle) {
        match self.index.get(&title) {
            Some(&pos) => self.entries[pos].chart = chart,
            None => {
                self.index.insert(title.clone(), self.entries.len());
                self.entries.push(CatalogEntry { title, chart });
            }
        }
    }

    /// Look up a chart by title
    pub fn get(&self, title: &str) -> Option<&ChartHandle> {
        self.index.get(title).map(|&pos| &self.entries[pos].chart)
    }

    /// Number of cataloged charts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog holds no charts
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (title, chart) pairs in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChartHandle)> {
        self.entries.iter().map(|e| (e.title.as_str(), &e.chart))
    }

    /// Title-list view: one [`FigureTitle`] per entry, in discovery order
    pub fn titles(&self) -> Vec<FigureTitle> {
        self.entries
            .iter()
            .map(|e| FigureTitle {
                name: e.title.clone(),
                concat_name: concat_name(&e.title),
                type_tag: e.chart.type_tag.clone(),
            })
            .collect()
    }
}

/// A catalog entry's title view, for embedding figure references in
/// templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureTitle {
    /// Resolved chart title
    pub name: String,
    /// Normalized identifier derived from the title
    pub concat_name: String,
    /// Raw chart type tag
    pub type_tag: String,
}

/// Derive a normalized identifier: lowercase, spaces to underscores, every
/// other non-alphanumeric character dropped
fn concat_name(title: &str) -> String {
    title
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .flat_map(char::to_lowercase)
        .collect()
}
