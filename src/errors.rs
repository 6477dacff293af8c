//! Typed error definitions for flatback.
//! Provides the user-visible failure categories and their exit-code mapping.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("Source directory does not exist: {0}")]
    SourceNotFound(PathBuf),

    #[error("Source path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied on {path}: {context}")]
    PermissionDenied { path: PathBuf, context: String },
}

impl BackupError {
    /// Process exit code for this failure category. Unclassified failures use
    /// the generic code 1; success is 0.
    pub fn code(&self) -> u8 {
        match self {
            BackupError::SourceNotFound(_) | BackupError::NotADirectory(_) => 2,
            BackupError::PermissionDenied { .. } => 3,
        }
    }
}
