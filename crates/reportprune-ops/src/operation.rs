//! Per-file deletion errors.

use serde::Serialize;
use strum::Display;
use thiserror::Error;

use reportprune_core::FileDescriptor;

/// Kind of deletion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeletionErrorKind {
    /// The file vanished before it could be deleted.
    NotFound,
    /// The process may not delete the file.
    PermissionDenied,
    /// Any other I/O failure.
    Io,
}

/// A file that could not be deleted.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{}: {message}", .file.path.display())]
pub struct DeletionError {
    /// The file that failed.
    pub file: FileDescriptor,
    /// Kind of failure.
    pub kind: DeletionErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl DeletionError {
    /// Create a deletion error from an I/O error.
    pub fn io(file: FileDescriptor, source: &std::io::Error) -> Self {
        let kind = match source.kind() {
            std::io::ErrorKind::NotFound => DeletionErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => DeletionErrorKind::PermissionDenied,
            _ => DeletionErrorKind::Io,
        };
        Self {
            file,
            kind,
            message: source.to_string(),
        }
    }
}
