//! Execution results.

use serde::Serialize;
use strum::Display;

use reportprune_core::FileDescriptor;

use crate::executor::ExecutionMode;
use crate::operation::DeletionError;

/// Why a planned deletion was not carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum SkipReason {
    /// Dry-run mode: the file would have been deleted.
    #[serde(rename = "dry-run")]
    #[strum(serialize = "dry-run")]
    DryRun,
}

/// A planned deletion that was not performed.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    /// The file.
    pub file: FileDescriptor,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Outcome of applying a retention plan.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    /// Mode the plan was applied in.
    pub mode: ExecutionMode,
    /// The report that was kept, if any.
    pub kept: Option<FileDescriptor>,
    /// Files actually deleted, in deletion order.
    pub deleted: Vec<FileDescriptor>,
    /// Planned deletions that were not performed.
    pub skipped: Vec<SkippedFile>,
    /// Files that failed to delete.
    pub errors: Vec<DeletionError>,
}

impl ExecutionResult {
    /// Create an empty result.
    pub fn new(mode: ExecutionMode, kept: Option<FileDescriptor>) -> Self {
        Self {
            mode,
            kept,
            deleted: Vec::new(),
            skipped: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Check if every planned deletion succeeded (or was skipped by dry-run).
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Bytes actually freed.
    pub fn bytes_freed(&self) -> u64 {
        self.deleted.iter().map(|f| f.size).sum()
    }

    /// Bytes that a live run would have freed for the skipped files.
    pub fn bytes_skipped(&self) -> u64 {
        self.skipped.iter().map(|s| s.file.size).sum()
    }

    /// Get a human-readable summary.
    pub fn summary(&self) -> String {
        match self.mode {
            ExecutionMode::DryRun => format!("Would delete {} files", self.skipped.len()),
            ExecutionMode::Live if self.errors.is_empty() => {
                format!("Deleted {} files", self.deleted.len())
            }
            ExecutionMode::Live => format!(
                "Deleted {} files, {} failed",
                self.deleted.len(),
                self.errors.len()
            ),
        }
    }
}
