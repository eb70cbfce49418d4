use std::path::PathBuf;
use sweeper_models::ErrorKind;
use sweeper_storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Invalid date format '{0}'")]
    InvalidDateFormat(String),

    #[error("Failed to list {}: {}", .path.display(), .source)]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete {}: {}", .path.display(), .source)]
    RemoveFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SweepError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SweepError::InvalidDateFormat(_) => ErrorKind::Config,
            SweepError::ListDirectory { .. } | SweepError::RemoveFile { .. } => ErrorKind::Io,
            SweepError::Storage(e) => e.kind(),
        }
    }
}
