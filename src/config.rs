//! Report configuration
//!
//! Configuration comes from three layers, lowest priority first:
//! 1. Built-in defaults (this module)
//! 2. An optional JSON settings file (`--settings report.json`)
//! 3. Command-line flags parsed in `main.rs`
//!
//! Invalid values in the settings file warn on stderr and fall back to the
//! default rather than aborting the run.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ReportError, Result};

/// Chart dimension - either explicit pixels or "auto" (derived from the
/// number of categories on the axis)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChartSize {
    #[default]
    Auto,
    Pixels(u32),
}

impl ChartSize {
    /// Parse from a settings value
    ///
    /// Valid formats:
    /// - "auto" or "" (empty) → Auto
    /// - "900" → Pixels(900) if in valid range [200, 5000]
    pub fn parse(value: &str, default: ChartSize) -> Self {
        let trimmed = value.trim();

        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return ChartSize::Auto;
        }

        match trimmed.parse::<u32>() {
            Ok(px) if (200..=5000).contains(&px) => ChartSize::Pixels(px),
            Ok(px) => {
                eprintln!(
                    "⚠ Chart size {} out of valid range [200-5000], using default: {:?}",
                    px, default
                );
                default
            }
            Err(_) => {
                eprintln!(
                    "⚠ Invalid chart size '{}', using default: {:?}",
                    trimmed, default
                );
                default
            }
        }
    }

    /// Resolve to pixels given the number of categories on the axis.
    ///
    /// Auto sizing grows with the category count so crowded charts (country,
    /// years-of-code) stay legible, capped to keep single-category charts
    /// from collapsing and wide ones from exploding.
    pub fn resolve(&self, n_categories: usize) -> u32 {
        match self {
            ChartSize::Pixels(px) => *px,
            ChartSize::Auto => (640 + 18 * n_categories as u32).clamp(640, 2400),
        }
    }
}

/// Report generation configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Path to the survey CSV
    pub data_file: PathBuf,

    /// Directory receiving report.md and the charts/ subdirectory
    pub output_dir: PathBuf,

    /// Placeholder substituted for missing categorical answers
    pub sentinel: String,

    /// Language highlighted in the used/desired language analyses
    pub focus_language: String,

    /// Number of raw rows shown in the introduction sample
    pub sample_rows: usize,

    /// Chart width (pixels or auto)
    pub chart_width: ChartSize,

    /// Chart height (pixels or auto); height never auto-scales with
    /// categories, only width does
    pub chart_height: ChartSize,

    /// Font size for axis labels on crowded charts (country, mental health)
    pub small_label_font: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("survey_results_public.csv"),
            output_dir: PathBuf::from("report"),
            sentinel: "No answer".to_string(),
            focus_language: "Python".to_string(),
            sample_rows: 10,
            chart_width: ChartSize::Auto,
            chart_height: ChartSize::Pixels(600),
            small_label_font: 8,
        }
    }
}

/// On-disk settings file shape. Every field is optional; absent fields keep
/// the built-in default.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReportSettings {
    data_file: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    sentinel: Option<String>,
    focus_language: Option<String>,
    sample_rows: Option<usize>,
    chart_width: Option<String>,
    chart_height: Option<String>,
    small_label_font: Option<u32>,
}

impl ReportConfig {
    /// Load configuration from an optional settings file.
    ///
    /// A missing `path` yields the defaults. An unreadable or malformed file
    /// is a hard error: a settings file that was explicitly passed but cannot
    /// be honored should abort rather than silently fall back.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = ReportConfig::default();

        let Some(path) = path else {
            return Ok(config);
        };

        let raw = std::fs::read_to_string(path)?;
        let settings: ReportSettings = serde_json::from_str(&raw)
            .map_err(|e| ReportError::Config(format!("{}: {}", path.display(), e)))?;

        if let Some(data_file) = settings.data_file {
            config.data_file = data_file;
        }
        if let Some(output_dir) = settings.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(sentinel) = settings.sentinel {
            config.sentinel = sentinel;
        }
        if let Some(language) = settings.focus_language {
            config.focus_language = language;
        }
        if let Some(sample_rows) = settings.sample_rows {
            config.sample_rows = sample_rows;
        }
        if let Some(width) = settings.chart_width {
            config.chart_width = ChartSize::parse(&width, config.chart_width);
        }
        if let Some(height) = settings.chart_height {
            config.chart_height = ChartSize::parse(&height, config.chart_height);
        }
        if let Some(font) = settings.small_label_font {
            if (4..=24).contains(&font) {
                config.small_label_font = font;
            } else {
                eprintln!(
                    "⚠ small_label_font {} out of valid range [4-24], using default: {}",
                    font, config.small_label_font
                );
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_size_auto() {
        let size = ChartSize::parse("auto", ChartSize::Auto);
        assert_eq!(size, ChartSize::Auto);
        assert_eq!(size.resolve(1), 658);
        assert_eq!(size.resolve(50), 1540);
        assert_eq!(size.resolve(200), 2400); // Capped at max
    }

    #[test]
    fn test_chart_size_empty_string() {
        let size = ChartSize::parse("", ChartSize::Auto);
        assert_eq!(size, ChartSize::Auto);
    }

    #[test]
    fn test_chart_size_pixels() {
        let size = ChartSize::parse("900", ChartSize::Auto);
        assert_eq!(size, ChartSize::Pixels(900));
        assert_eq!(size.resolve(180), 900); // Ignores category count
    }

    #[test]
    fn test_chart_size_out_of_range() {
        let size = ChartSize::parse("50000", ChartSize::Pixels(600));
        assert_eq!(size, ChartSize::Pixels(600)); // Falls back to default
    }

    #[test]
    fn test_chart_size_invalid() {
        let size = ChartSize::parse("abc", ChartSize::Auto);
        assert_eq!(size, ChartSize::Auto);
    }

    #[test]
    fn test_load_no_settings_file() {
        let config = ReportConfig::load(None).unwrap();
        assert_eq!(config.sentinel, "No answer");
        assert_eq!(config.focus_language, "Python");
        assert_eq!(config.sample_rows, 10);
    }

    #[test]
    fn test_load_settings_file_overrides() {
        let path = std::env::temp_dir().join("survey_report_test_settings.json");
        std::fs::write(
            &path,
            r#"{
                "sentinel": "N/A",
                "focus_language": "Rust",
                "chart_width": "1200",
                "small_label_font": 6
            }"#,
        )
        .unwrap();

        let config = ReportConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.sentinel, "N/A");
        assert_eq!(config.focus_language, "Rust");
        assert_eq!(config.chart_width, ChartSize::Pixels(1200));
        assert_eq!(config.small_label_font, 6);
        // Untouched fields keep defaults
        assert_eq!(config.sample_rows, 10);
    }

    #[test]
    fn test_load_malformed_settings_file() {
        let path = std::env::temp_dir().join("survey_report_test_bad_settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = ReportConfig::load(Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ReportError::Config(_))));
    }
}
