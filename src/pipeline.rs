//! Report generation pipeline
//!
//! One linear batch run shared by the binary and the integration tests:
//! 1. Load the survey CSV
//! 2. Preprocess (sentinel fill, salary cast)
//! 3. Render the three report sections
//! 4. Write report.md
//!
//! Any failure aborts the whole report; there is no partial recovery.

use std::path::PathBuf;

use anyhow::Context;

use crate::config::ReportConfig;
use crate::data;
use crate::report::{
    introduction_section, multi_dimensional_section, single_dimensional_section, ReportWriter,
};

/// What a completed run produced
#[derive(Debug)]
pub struct ReportSummary {
    pub rows: usize,
    pub columns: usize,
    pub charts: usize,
    pub report_path: PathBuf,
}

/// Run the whole pipeline according to `config`
pub fn generate_report(config: &ReportConfig) -> anyhow::Result<ReportSummary> {
    println!("[1/4] Loading survey data from {}...", config.data_file.display());
    let df = data::read_survey(&config.data_file)
        .with_context(|| format!("failed to load {}", config.data_file.display()))?;
    println!("✓ Loaded {} rows × {} columns", df.height(), df.width());

    println!("\n[2/4] Preprocessing (sentinel: '{}')...", config.sentinel);
    let df = data::preprocess(df, &config.sentinel).context("preprocessing failed")?;
    println!("✓ Missing categorical answers filled");

    println!("\n[3/4] Rendering report sections...");
    let mut writer = ReportWriter::new(&config.output_dir)
        .with_context(|| format!("cannot prepare output dir {}", config.output_dir.display()))?;
    writer.heading(1, "Stack Overflow Developer Survey 2021");

    introduction_section(&df, config, &mut writer).context("introduction section failed")?;
    println!("  ✓ Introduction");
    single_dimensional_section(&df, config, &mut writer)
        .context("single-dimensional section failed")?;
    println!("  ✓ Single-dimensional analysis");
    multi_dimensional_section(&df, config, &mut writer)
        .context("multi-dimensional section failed")?;
    println!("  ✓ Multi-dimensional analysis");

    println!("\n[4/4] Writing report...");
    let rows = df.height();
    let columns = df.width();
    let charts = writer.chart_count();
    let report_path = writer.finish().context("writing report.md failed")?;
    println!("✓ Report written to {} ({} charts)", report_path.display(), charts);

    Ok(ReportSummary {
        rows,
        columns,
        charts,
        report_path,
    })
}
