//! # chartbook-model
//!
//! Renderer-agnostic chart descriptions produced by extraction. Any plotting
//! backend consuming `{type, axis titles, series list}` can render these.

mod chart;
mod series;
mod types;

pub use chart::ChartDescription;
pub use series::SeriesRecord;
pub use types::ChartType;
