//! CSV loading and preprocessing
//!
//! The survey CSV uses the literal string "NA" for missing answers, so the
//! reader maps "NA" (and empty fields) to null. All columns are read as
//! strings; the salary column is cast to Float64 afterwards, which turns
//! unparseable entries into nulls instead of aborting the read.

use std::path::Path;

use polars::prelude::*;

use crate::error::{ReportError, Result};
use crate::schema;

/// Read the survey CSV into a DataFrame.
///
/// Fails loudly on a missing file or malformed CSV, and with a named-column
/// error if any column the report depends on is absent.
pub fn read_survey(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        // Don't infer dtypes: bracket columns like YearsCode mix numbers and
        // strings ("Less than 1 year"), so everything starts as String
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| {
            opts.with_null_values(Some(NullValues::AllColumnsSingle("NA".into())))
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    ensure_required_columns(&df)?;
    Ok(df)
}

/// Replace missing categorical answers with the sentinel and cast the salary
/// column to Float64.
///
/// After this call none of `schema::CATEGORICAL_COLUMNS` contains a null.
/// Salary nulls are kept; they are filtered per-analysis.
pub fn preprocess(df: DataFrame, sentinel: &str) -> Result<DataFrame> {
    let mut lf = df.lazy();

    for column in schema::CATEGORICAL_COLUMNS {
        lf = lf.with_column(col(*column).fill_null(lit(sentinel)));
    }
    lf = lf.with_column(col(schema::YEARLY_SALARY).cast(DataType::Float64));

    Ok(lf.collect()?)
}

fn ensure_required_columns(df: &DataFrame) -> Result<()> {
    let names = df.get_column_names();
    let extra = [schema::COUNTRY, schema::YEARLY_SALARY];
    let required = schema::CATEGORICAL_COLUMNS.iter().chain(extra.iter());

    for column in required {
        if !names.iter().any(|name| name.as_str() == *column) {
            return Err(ReportError::MissingColumn((*column).to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const HEADER: &str = "EdLevel,Age,YearsCode,YearsCodePro,Employment,Country,US_State,\
LanguageHaveWorkedWith,LanguageWantToWorkWith,MentalHealth,OrgSize,OpSys,ConvertedCompYearly";

    fn write_fixture(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, format!("{}\n{}", HEADER, body)).unwrap();
        path
    }

    #[test]
    fn test_read_survey_missing_file() {
        let result = read_survey(Path::new("/nonexistent/survey.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_survey_missing_column() {
        let path = std::env::temp_dir().join("survey_report_test_missing_col.csv");
        std::fs::write(&path, "EdLevel,Age\nBachelor,25-34\n").unwrap();

        let result = read_survey(&path);
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(ReportError::MissingColumn(name)) => assert_eq!(name, "YearsCode"),
            other => panic!("expected MissingColumn, got {:?}", other.map(|df| df.shape())),
        }
    }

    #[test]
    fn test_preprocess_fills_designated_columns() {
        let path = write_fixture(
            "survey_report_test_preprocess.csv",
            "Bachelor,25-34,5,NA,Employed,Germany,NA,Python;Rust,Rust,None,20 to 99,Linux,50000\n\
             ,35-44,10,3,Student,NA,NA,Java,NA,NA,NA,Windows,\n\
             Master,NA,Less than 1 year,NA,Employed,United States of America,California,Python,Python,None,NA,macOS,120000\n",
        );

        let df = preprocess(read_survey(&path).unwrap(), "No answer").unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(df.height(), 3);
        for column in schema::CATEGORICAL_COLUMNS {
            let nulls = df.column(column).unwrap().null_count();
            assert_eq!(nulls, 0, "column {} still has nulls", column);
        }

        // Sentinel actually substituted
        let ed = df.column(schema::ED_LEVEL).unwrap();
        let ed = ed.as_materialized_series();
        assert_eq!(ed.str().unwrap().get(1), Some("No answer"));
    }

    #[test]
    fn test_preprocess_keeps_salary_nulls() {
        let path = write_fixture(
            "survey_report_test_salary.csv",
            "Bachelor,25-34,5,2,Employed,Germany,NA,Python,Rust,None,20 to 99,Linux,50000\n\
             Master,35-44,10,3,Student,France,NA,Java,Go,None,NA,Windows,\n",
        );

        let df = preprocess(read_survey(&path).unwrap(), "No answer").unwrap();
        std::fs::remove_file(&path).unwrap();

        let salary = df.column(schema::YEARLY_SALARY).unwrap();
        assert_eq!(salary.dtype(), &DataType::Float64);
        assert_eq!(salary.null_count(), 1);

        let salary = salary.as_materialized_series();
        assert_eq!(salary.f64().unwrap().get(0), Some(50000.0));
    }

    #[test]
    fn test_preprocess_country_not_filled() {
        // Country is grouped as-is; it is not in the sentinel-filled set
        let path = write_fixture(
            "survey_report_test_country.csv",
            "Bachelor,25-34,5,2,Employed,NA,NA,Python,Rust,None,20 to 99,Linux,50000\n",
        );

        let df = preprocess(read_survey(&path).unwrap(), "No answer").unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(df.column(schema::COUNTRY).unwrap().null_count(), 1);
    }
}
