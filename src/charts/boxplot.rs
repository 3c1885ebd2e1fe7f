//! Grouped boxplots of a numeric column
//!
//! One box per category. The whiskers sit at the Tukey fences (1.5 × IQR
//! beyond the quartiles). With `show_outliers` the values beyond the fences
//! are overlaid as points and the y axis extends to the data maximum;
//! without, the axis stops just past the highest fence so the boxes fill the
//! chart.

use std::path::Path;

use plotters::data::Quartiles;
use plotters::prelude::*;

use crate::charts::ChartStyle;
use crate::data::{outliers, tukey_fences, NumericGroup};
use crate::error::{ReportError, Result};

pub fn grouped_boxplot(
    path: &Path,
    title: &str,
    groups: &[NumericGroup],
    y_desc: &str,
    show_outliers: bool,
    style: &ChartStyle,
) -> Result<()> {
    let populated: Vec<&NumericGroup> = groups.iter().filter(|g| !g.values.is_empty()).collect();
    if populated.is_empty() {
        return Err(ReportError::Chart(
            "no populated groups to plot".to_string(),
        ));
    }

    let quartiles: Vec<Quartiles> = populated
        .iter()
        .map(|group| Quartiles::new(&group.values))
        .collect();

    let y_max = if show_outliers {
        populated
            .iter()
            .flat_map(|g| g.values.iter().copied())
            .fold(f64::MIN, f64::max)
    } else {
        populated
            .iter()
            .filter_map(|g| tukey_fences(&g.values))
            .fold(f64::MIN, |max, fences| max.max(fences.upper))
    };
    let y_max = (y_max.max(0.0) * 1.05) as f32 + 1.0;

    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(ReportError::chart)?;

    let n = populated.len();
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(180)
        .y_label_area_size(80)
        .build_cartesian_2d((0..n).into_segmented(), 0f32..y_max)
        .map_err(ReportError::chart)?;

    let labels: Vec<&str> = populated.iter().map(|g| g.label.as_str()).collect();
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
        .y_desc(y_desc)
        .draw()
        .map_err(ReportError::chart)?;

    chart
        .draw_series(quartiles.iter().enumerate().map(|(i, quartiles)| {
            Boxplot::new_vertical(SegmentValue::CenterOf(i), quartiles)
                .width(16)
                .whisker_width(0.5)
                .style(BLUE)
        }))
        .map_err(ReportError::chart)?;

    if show_outliers {
        chart
            .draw_series(populated.iter().enumerate().flat_map(|(i, group)| {
                outliers(&group.values).into_iter().map(move |value| {
                    Circle::new(
                        (SegmentValue::CenterOf(i), value as f32),
                        2,
                        BLACK.mix(0.4).filled(),
                    )
                })
            }))
            .map_err(ReportError::chart)?;
    }

    root.present().map_err(ReportError::chart)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salary_groups() -> Vec<NumericGroup> {
        vec![
            NumericGroup {
                label: "25-34".to_string(),
                values: vec![40e3, 50e3, 55e3, 60e3, 65e3, 900e3],
            },
            NumericGroup {
                label: "35-44".to_string(),
                values: vec![70e3, 80e3, 85e3, 90e3],
            },
            NumericGroup {
                label: "45-54".to_string(),
                values: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_boxplot_with_outliers() {
        let path = std::env::temp_dir().join("survey_report_test_box_outliers.svg");
        grouped_boxplot(
            &path,
            "Salary by age",
            &salary_groups(),
            "Yearly salary (USD)",
            true,
            &ChartStyle::new(900, 600),
        )
        .unwrap();

        let rendered = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(rendered.contains("<svg"));
    }

    #[test]
    fn test_boxplot_without_outliers() {
        let path = std::env::temp_dir().join("survey_report_test_box_plain.svg");
        grouped_boxplot(
            &path,
            "Salary by age",
            &salary_groups(),
            "Yearly salary (USD)",
            false,
            &ChartStyle::new(900, 600),
        )
        .unwrap();

        let rendered = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(rendered.contains("<svg"));
    }

    #[test]
    fn test_boxplot_all_groups_empty() {
        let groups = vec![NumericGroup {
            label: "empty".to_string(),
            values: Vec::new(),
        }];
        let path = std::env::temp_dir().join("survey_report_test_box_empty.svg");

        let result = grouped_boxplot(
            &path,
            "Empty",
            &groups,
            "Yearly salary (USD)",
            true,
            &ChartStyle::new(900, 600),
        );
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(ReportError::Chart(_))));
    }
}
