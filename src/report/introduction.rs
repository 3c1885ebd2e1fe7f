//! Introduction section: dataset overview and raw-data sample

use polars::prelude::*;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::report::writer::ReportWriter;
use crate::schema;

pub fn introduction_section(
    df: &DataFrame,
    config: &ReportConfig,
    writer: &mut ReportWriter,
) -> Result<()> {
    writer.heading(2, "Introduction");
    writer.paragraph(
        "This report presents descriptive analyses of the answers collected by the
         Stack Overflow developer survey in 2021.",
    );

    writer.paragraph("A brief summary of the data:");
    writer.bullet_list(&[
        format!("Number of records: {}", df.height()),
        format!("Number of columns: {}", df.width()),
    ]);

    // The full dataset is far too wide to show; sample a handful of rows
    // over the columns the report actually analyses.
    if config.sample_rows > 0 {
        writer.paragraph(&format!(
            "A sample of the first {} records over the analysed columns:",
            config.sample_rows.min(df.height())
        ));
        let (headers, rows) = sample_rows(df, config.sample_rows)?;
        writer.table(&headers, &rows);
    }

    Ok(())
}

/// First `limit` rows of the sample columns, formatted as strings
fn sample_rows(df: &DataFrame, limit: usize) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let head = df.head(Some(limit));

    let headers: Vec<String> = schema::SAMPLE_COLUMNS
        .iter()
        .map(|name| name.to_string())
        .collect();

    // Format column by column, then transpose into table rows
    let mut cells_by_column: Vec<Vec<String>> = Vec::with_capacity(headers.len());
    for column in schema::SAMPLE_COLUMNS {
        let series = head.column(column)?.as_materialized_series().clone();
        let mut cells = Vec::with_capacity(head.height());
        for row_idx in 0..head.height() {
            cells.push(format_cell(&series, row_idx)?);
        }
        cells_by_column.push(cells);
    }

    let rows: Vec<Vec<String>> = (0..head.height())
        .map(|row_idx| {
            cells_by_column
                .iter()
                .map(|cells| cells[row_idx].clone())
                .collect()
        })
        .collect();
    Ok((headers, rows))
}

fn format_cell(series: &Series, idx: usize) -> Result<String> {
    let cell = match series.dtype() {
        DataType::String => series
            .str()?
            .get(idx)
            .map(|value| value.to_string())
            .unwrap_or_else(|| "—".to_string()),
        DataType::Float64 => series
            .f64()?
            .get(idx)
            .map(|value| format!("{:.0}", value))
            .unwrap_or_else(|| "—".to_string()),
        _ => format!("{}", series.get(idx)?),
    };
    // Pipes would break the markdown table
    Ok(cell.replace('|', "/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cell_string_and_null() {
        let series = Series::new("s".into(), &[Some("Bachelor"), None]);
        assert_eq!(format_cell(&series, 0).unwrap(), "Bachelor");
        assert_eq!(format_cell(&series, 1).unwrap(), "—");
    }

    #[test]
    fn test_format_cell_salary() {
        let series = Series::new("s".into(), &[Some(50000.6), None]);
        assert_eq!(format_cell(&series, 0).unwrap(), "50001");
        assert_eq!(format_cell(&series, 1).unwrap(), "—");
    }

    #[test]
    fn test_format_cell_escapes_pipes() {
        let series = Series::new("s".into(), &["a|b"]);
        assert_eq!(format_cell(&series, 0).unwrap(), "a/b");
    }
}
