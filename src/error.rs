use thiserror::Error;

/// Errors surfaced by the analysis engine.
///
/// Every variant is terminal for the current request: nothing is retried and
/// no partial result is returned. The calling layer decides how to present
/// the failure (reprompt for a range, reject the file, and so on).
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Malformed input table: missing required columns, unparsable dates,
    /// or non-numeric / non-finite price values. Fatal when loading data.
    #[error("format error: {0}")]
    Format(String),

    /// A filter or extremes scan matched no records.
    #[error("empty range: {0}")]
    EmptyRange(String),

    /// Caller-supplied parameter outside the accepted domain
    /// (non-positive cash, inverted date range).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The period minimum is zero, so shares and ROI are undefined.
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
