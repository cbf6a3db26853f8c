//! Reading records and writing documents.

use std::path::Path;

use tokio::io::AsyncWriteExt;

use crate::error::{AppError, AppResult};

/// Reads a JSON record from disk.
///
/// ## Errors
/// Returns an error if the file cannot be read.
pub async fn read_record(path: impl AsRef<Path>) -> AppResult<String> {
    let path = path.as_ref();
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AppError::ReadError {
            path: path.display().to_string(),
            source,
        })
}

/// ## Summary
/// Writes a document verbatim, creating parent directories as needed.
///
/// ## Errors
/// Returns an error if a directory cannot be created or the file cannot be written.
pub async fn save_to_file(path: impl AsRef<Path>, document: &str) -> AppResult<()> {
    let path = path.as_ref();
    let persist_error = |source| AppError::PersistError {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(persist_error)?;
    }

    tokio::fs::write(path, document)
        .await
        .map_err(persist_error)?;

    tracing::info!(path = %path.display(), bytes = document.len(), "Saved vCard");
    Ok(())
}

/// Writes a document to standard output.
///
/// ## Errors
/// Returns an error if standard output cannot be written.
pub async fn write_stdout(document: &str) -> AppResult<()> {
    let persist_error = |source| AppError::PersistError {
        path: "<stdout>".to_string(),
        source,
    };

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(document.as_bytes())
        .await
        .map_err(persist_error)?;
    stdout.flush().await.map_err(persist_error)
}
