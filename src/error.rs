use thiserror::Error;

/// Errors that can occur while generating the survey report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem error (missing data file, unwritable output dir, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse or dataframe operation error
    #[error("dataframe error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// A designated survey column is absent from the loaded CSV
    #[error("missing survey column '{0}'")]
    MissingColumn(String),

    /// Configuration error (bad settings file, invalid paths, ...)
    #[error("configuration error: {0}")]
    Config(String),

    /// Chart rendering error
    #[error("chart error: {0}")]
    Chart(String),
}

impl ReportError {
    /// Wrap a plotters drawing error.
    ///
    /// Plotters errors are generic over the backend error type, which makes
    /// them awkward to carry in an enum; the message is enough since a chart
    /// failure always aborts the report.
    pub fn chart<E: std::fmt::Display>(err: E) -> Self {
        ReportError::Chart(err.to_string())
    }
}

/// Type alias for Results using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;
