//! Report sections and markdown assembly
//!
//! The report is a fixed sequence of three sections, each writing narrative
//! blocks and charts through the `ReportWriter`:
//! 1. introduction (dataset overview, raw sample)
//! 2. single-dimensional analysis (one categorical column at a time)
//! 3. multi-dimensional analysis (salary boxplots)

pub mod introduction;
pub mod multi_dimensional;
pub mod single_dimensional;
pub mod writer;

pub use introduction::introduction_section;
pub use multi_dimensional::multi_dimensional_section;
pub use single_dimensional::single_dimensional_section;
pub use writer::ReportWriter;

use crate::charts::ChartStyle;
use crate::config::ReportConfig;

/// Resolve the configured chart dimensions for a given category count
pub(crate) fn chart_style(config: &ReportConfig, n_categories: usize) -> ChartStyle {
    ChartStyle::new(
        config.chart_width.resolve(n_categories),
        config.chart_height.resolve(n_categories),
    )
}
