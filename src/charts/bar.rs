//! Bar chart of grouped counts

use std::path::Path;

use plotters::prelude::*;

use crate::charts::ChartStyle;
use crate::data::GroupedCounts;
use crate::error::{ReportError, Result};

/// Render one bar per group, in the order the counts carry (ascending for
/// column groupings). Category labels are drawn vertically so long answer
/// texts stay readable.
pub fn bar_chart(
    path: &Path,
    title: &str,
    counts: &GroupedCounts,
    style: &ChartStyle,
) -> Result<()> {
    if counts.is_empty() {
        return Err(ReportError::Chart(format!(
            "no groups to plot for '{}'",
            counts.column()
        )));
    }

    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(ReportError::chart)?;

    let n = counts.len();
    let y_max = counts.max_count() + counts.max_count() / 10 + 1;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(180)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n).into_segmented(), 0u32..y_max)
        .map_err(ReportError::chart)?;

    let labels = counts.labels();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => labels
                .get(*i)
                .map(|label| label.to_string())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .x_label_style(
            ("sans-serif", style.label_font)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_desc("Respondents")
        .draw()
        .map_err(ReportError::chart)?;

    chart
        .draw_series(counts.iter().enumerate().map(|(i, (_, count))| {
            Rectangle::new(
                [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), count)],
                BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(ReportError::chart)?;

    root.present().map_err(ReportError::chart)?;
    Ok(())
}
