use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for lode installer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Filesystem operation on a shim path failed.
    #[error("{}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        source: io::Error,
    },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No shim artifacts exist for the requested command.
    #[error("{0} not found")]
    CommandNotFound(String),
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn filesystem<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        AppError::Filesystem { path: path.into(), source }
    }
}
