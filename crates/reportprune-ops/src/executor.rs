//! Applies a retention plan to the filesystem.

use std::fs;

use serde::Serialize;
use strum::Display;

use reportprune_core::FileDescriptor;
use reportprune_plan::RetentionPlan;

use crate::operation::DeletionError;
use crate::result::{ExecutionResult, SkipReason, SkippedFile};

/// Whether deletions are performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ExecutionMode {
    /// Report what would happen; never touch the filesystem.
    #[default]
    DryRun,
    /// Delete planned files.
    Live,
}

impl ExecutionMode {
    /// Pick the mode from a dry-run flag.
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { Self::DryRun } else { Self::Live }
    }

    /// Check if this is a dry run.
    pub fn is_dry_run(self) -> bool {
        self == Self::DryRun
    }
}

/// Executor for retention plans.
#[derive(Debug, Clone, Copy, Default)]
pub struct Executor {
    mode: ExecutionMode,
}

impl Executor {
    /// Create an executor for a mode.
    pub fn new(mode: ExecutionMode) -> Self {
        Self { mode }
    }

    /// Create a dry-run executor.
    pub fn dry_run() -> Self {
        Self::new(ExecutionMode::DryRun)
    }

    /// Create an executor that deletes files.
    pub fn live() -> Self {
        Self::new(ExecutionMode::Live)
    }

    /// The mode of this executor.
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Apply a plan: reports first, then images, each in plan order.
    ///
    /// Only planned deletions are visited, so the kept report is never
    /// touched. Per-file failures are collected
    /// in the result and do not stop the batch.
    pub fn execute(&self, plan: &RetentionPlan) -> ExecutionResult {
        let mut result = ExecutionResult::new(self.mode, plan.keep.clone());

        for file in plan.deletions() {
            match self.mode {
                ExecutionMode::DryRun => {
                    tracing::debug!(file = %file.name, "would delete");
                    result.skipped.push(SkippedFile {
                        file: file.clone(),
                        reason: SkipReason::DryRun,
                    });
                }
                ExecutionMode::Live => match delete_file(file) {
                    Ok(()) => {
                        tracing::info!(file = %file.name, path = %file.path.display(), "deleted");
                        result.deleted.push(file.clone());
                    }
                    Err(err) => {
                        tracing::warn!(file = %file.name, kind = %err.kind, "{}", err.message);
                        result.errors.push(err);
                    }
                },
            }
        }

        result
    }
}

fn delete_file(file: &FileDescriptor) -> Result<(), DeletionError> {
    fs::remove_file(&file.path).map_err(|e| DeletionError::io(file.clone(), &e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use reportprune_plan::RetentionPlanner;
    use tempfile::TempDir;

    use crate::DeletionErrorKind;

    fn touch(dir: &Path, name: &str) -> FileDescriptor {
        let path = dir.join(name);
        fs::write(&path, name).unwrap();
        FileDescriptor::image(path, name.len() as u64)
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(ExecutionMode::from_dry_run(true), ExecutionMode::DryRun);
        assert_eq!(ExecutionMode::from_dry_run(false), ExecutionMode::Live);
        assert_eq!(ExecutionMode::DryRun.to_string(), "dry-run");
    }

    #[test]
    fn test_dry_run_records_skips() {
        let temp = TempDir::new().unwrap();
        let files = vec![touch(temp.path(), "a.png"), touch(temp.path(), "b.png")];
        let plan = RetentionPlanner::new().plan(&files);

        let result = Executor::dry_run().execute(&plan);

        assert!(result.deleted.is_empty());
        assert_eq!(result.skipped.len(), 2);
        assert!(result.skipped.iter().all(|s| s.reason == SkipReason::DryRun));
        assert_eq!(result.skipped[0].reason.to_string(), "dry-run");
        assert!(temp.path().join("a.png").exists());
        assert!(temp.path().join("b.png").exists());
        assert_eq!(result.summary(), "Would delete 2 files");
    }

    #[test]
    fn test_live_failure_does_not_abort() {
        let temp = TempDir::new().unwrap();
        let files = vec![
            touch(temp.path(), "a.png"),
            touch(temp.path(), "b.png"),
            touch(temp.path(), "c.png"),
        ];
        let plan = RetentionPlanner::new().plan(&files);

        fs::remove_file(temp.path().join("b.png")).unwrap();
        let result = Executor::live().execute(&plan);

        assert_eq!(result.deleted.len(), 2);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].file.name, "b.png");
        assert_eq!(result.errors[0].kind, DeletionErrorKind::NotFound);
        assert!(!result.is_success());
        assert!(!temp.path().join("a.png").exists());
        assert!(!temp.path().join("c.png").exists());
        assert_eq!(result.summary(), "Deleted 2 files, 1 failed");
        assert_eq!(result.bytes_freed(), 10);
    }

    #[test]
    fn test_kept_report_untouched() {
        let temp = TempDir::new().unwrap();
        let newer = temp.path().join("Data_Volume_Report_07022026.xlsx");
        let older = temp.path().join("Data_Volume_Report_04022026.xlsx");
        fs::write(&newer, "new").unwrap();
        fs::write(&older, "old").unwrap();

        let date = |d| chrono::NaiveDate::from_ymd_opt(2026, 2, d).unwrap();
        let files = vec![
            FileDescriptor::report(&newer, 3, date(7)),
            FileDescriptor::report(&older, 3, date(4)),
        ];
        let plan = RetentionPlanner::new().plan(&files);
        let result = Executor::live().execute(&plan);

        assert!(newer.exists());
        assert!(!older.exists());
        assert_eq!(result.kept.as_ref().unwrap().path, newer);
        assert_eq!(result.deleted.len(), 1);
        assert!(result.deleted.iter().all(|f| f.path != newer));
        assert!(result.skipped.is_empty());
        assert!(result.errors.is_empty());
    }
}
