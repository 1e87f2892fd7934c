use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnpMergeError {
    #[error("Can't read input file: {0}")]
    InputReadError(String),

    #[error("Can't write output file: {0}")]
    OutputWriteError(String),

    #[error("Unknown report format: {0}")]
    UnknownReportFormat(String),

    #[error("Delimiter must be a single byte character, got: {0:?}")]
    InvalidDelimiter(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for snpmerge-core operations.
pub type Result<T> = std::result::Result<T, SnpMergeError>;
