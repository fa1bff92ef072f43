//! # Property Store Errors

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for property store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Property store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Path does not reference an existing regular file
    #[error("File {} does not exist", .0.display())]
    NotFound(PathBuf),

    /// Document is not well-formed XML
    #[error("Error while parsing file {path}: {reason}")]
    Parse { path: String, reason: String },

    /// Read or write failure other than non-existence
    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },

    /// Emitter failure while rendering the document
    #[error("Failed to serialize document: {0}")]
    Serialize(String),
}

impl StoreError {
    pub fn parse(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: &Path, err: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// True for the one error kind the query path swallows
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
