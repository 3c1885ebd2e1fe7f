//! Pie chart of grouped counts
//!
//! Slice labels carry the percentage directly ("Bachelor's degree (42.4%)")
//! instead of a separate legend, mirroring autopct-style pie charts.

use std::path::Path;

use plotters::prelude::*;

use crate::charts::{palette_color, ChartStyle};
use crate::data::GroupedCounts;
use crate::error::{ReportError, Result};

pub fn pie_chart(
    path: &Path,
    title: &str,
    counts: &GroupedCounts,
    style: &ChartStyle,
) -> Result<()> {
    let total = counts.total();
    if total == 0 {
        return Err(ReportError::Chart(format!(
            "no rows to plot for '{}'",
            counts.column()
        )));
    }

    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(ReportError::chart)?;
    let root = root
        .titled(title, ("sans-serif", 22))
        .map_err(ReportError::chart)?;

    let (w, h) = root.dim_in_pixel();
    let center = ((w / 2) as i32, (h / 2) as i32);
    let radius = f64::from(w.min(h)) * 0.3;

    let sizes: Vec<f64> = counts.iter().map(|(_, count)| f64::from(count)).collect();
    let labels: Vec<String> = counts
        .iter()
        .map(|(label, count)| {
            format!("{} ({:.1}%)", label, 100.0 * f64::from(count) / total as f64)
        })
        .collect();
    let colors: Vec<RGBColor> = (0..counts.len()).map(palette_color).collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    // First slice starts at the top
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", style.label_font).into_font());
    pie.label_offset(12.0);

    root.draw(&pie).map_err(ReportError::chart)?;
    root.present().map_err(ReportError::chart)?;
    Ok(())
}
