use thiserror::Error;

/// Application-level errors (command-line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    RfcError(#[from] rolodex_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] rolodex_core::error::CoreError),

    #[error("Failed to write {path}: {source}")]
    PersistError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type AppResult<T> = std::result::Result<T, AppError>;
