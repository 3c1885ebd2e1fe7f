//! Chart rendering
//!
//! All charts render to standalone SVG files via plotters. SVG keeps the
//! crate free of a font rasterizer: text is emitted as `<text>` elements and
//! sized by the viewer.
//!
//! - `bar`: one bar per category, counts on the y axis
//! - `pie`: percentage distribution over categories
//! - `boxplot`: numeric column grouped by a categorical column, with or
//!   without outlier points

pub mod bar;
pub mod boxplot;
pub mod pie;

pub use bar::bar_chart;
pub use boxplot::grouped_boxplot;
pub use pie::pie_chart;

/// Pixel dimensions and label styling for one chart
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    /// Font size for category labels on the x axis
    pub label_font: u32,
}

impl ChartStyle {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            label_font: 12,
        }
    }

    /// Shrink category labels (crowded axes: countries, mental health)
    pub fn with_label_font(mut self, size: u32) -> Self {
        self.label_font = size;
        self
    }
}

/// Pick a slice color from the fixed palette, cycling past its end
pub(crate) fn palette_color(index: usize) -> plotters::style::RGBColor {
    use plotters::style::{Palette, Palette99};
    let (r, g, b) = Palette99::COLORS[index % Palette99::COLORS.len()];
    plotters::style::RGBColor(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_style_defaults() {
        let style = ChartStyle::new(800, 600);
        assert_eq!(style.label_font, 12);
        let small = style.with_label_font(6);
        assert_eq!(small.label_font, 6);
        assert_eq!(small.width, 800);
    }

    #[test]
    fn test_palette_color_cycles() {
        use plotters::style::{Palette, Palette99};

        let first = palette_color(0);
        let wrapped = palette_color(Palette99::COLORS.len());
        assert_eq!(first.0, wrapped.0);
        assert_eq!(first.1, wrapped.1);
        assert_eq!(first.2, wrapped.2);
    }
}
