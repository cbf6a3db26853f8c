use thiserror::Error;

/// Record construction errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
