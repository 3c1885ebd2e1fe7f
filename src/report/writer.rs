//! Markdown report assembly
//!
//! Sections append blocks (headings, paragraphs, lists, tables, chart
//! images) in render order; `finish` writes the whole document to
//! `report.md` in the output directory. Chart files land in a `charts/`
//! subdirectory and are referenced with relative paths, numbered in render
//! order.

use std::path::{Path, PathBuf};

use crate::error::Result;

pub struct ReportWriter {
    output_dir: PathBuf,
    charts_dir: PathBuf,
    blocks: Vec<String>,
    chart_seq: usize,
}

impl ReportWriter {
    /// Create the output and charts directories
    pub fn new(output_dir: &Path) -> Result<Self> {
        let charts_dir = output_dir.join("charts");
        std::fs::create_dir_all(&charts_dir)?;
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            charts_dir,
            blocks: Vec::new(),
            chart_seq: 0,
        })
    }

    /// Add a heading; `level` is the number of leading `#`
    pub fn heading(&mut self, level: usize, text: &str) {
        self.blocks.push(format!("{} {}", "#".repeat(level), text));
    }

    /// Add a paragraph. Lines are trimmed individually so sections can use
    /// indented raw string literals.
    pub fn paragraph(&mut self, text: &str) {
        let cleaned: Vec<&str> = text.trim().lines().map(str::trim).collect();
        self.blocks.push(cleaned.join("\n"));
    }

    /// Add a bullet list
    pub fn bullet_list<S: AsRef<str>>(&mut self, items: &[S]) {
        let rendered: Vec<String> = items
            .iter()
            .map(|item| format!("- {}", item.as_ref()))
            .collect();
        self.blocks.push(rendered.join("\n"));
    }

    /// Add a markdown table
    pub fn table(&mut self, headers: &[String], rows: &[Vec<String>]) {
        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(format!("| {} |", headers.join(" | ")));
        lines.push(format!("|{}|", vec!["---"; headers.len()].join("|")));
        for row in rows {
            lines.push(format!("| {} |", row.join(" | ")));
        }
        self.blocks.push(lines.join("\n"));
    }

    /// Reserve the next chart file path: charts/NN_slug.svg
    pub fn next_chart_path(&mut self, slug: &str) -> PathBuf {
        self.chart_seq += 1;
        self.charts_dir.join(format!("{:02}_{}.svg", self.chart_seq, slug))
    }

    /// Reference a rendered chart in the document
    pub fn image(&mut self, title: &str, path: &Path) {
        // Relative to the output dir so the report stays portable
        let relative = path
            .strip_prefix(&self.output_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        self.blocks.push(format!("![{}]({})", title, relative));
    }

    /// Number of charts reserved so far
    pub fn chart_count(&self) -> usize {
        self.chart_seq
    }

    /// Write report.md and return its path
    pub fn finish(self) -> Result<PathBuf> {
        let report_path = self.output_dir.join("report.md");
        let mut document = self.blocks.join("\n\n");
        document.push('\n');
        std::fs::write(&report_path, document)?;
        Ok(report_path)
    }
}
