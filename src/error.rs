use std::io;

use thiserror::Error;

/// Failures raised while partitioning, expanding or reading fixture rows.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    #[error("line {line} is not valid JSON: {source}")]
    BadJson {
        line: usize,
        source: serde_json::Error,
    },
    #[error("invalid dimension config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
