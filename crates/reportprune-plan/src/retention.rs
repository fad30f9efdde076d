//! Keep/delete decisions over classified files.

use std::cmp::Ordering;

use itertools::Itertools;
use serde::Serialize;

use reportprune_core::{FileDescriptor, FileKind};

/// The computed keep/delete decision for one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RetentionPlan {
    /// The report to keep (absent when no reports were found).
    pub keep: Option<FileDescriptor>,
    /// Reports other than `keep`, newest to oldest.
    pub delete_reports: Vec<FileDescriptor>,
    /// Every image found.
    pub delete_images: Vec<FileDescriptor>,
    /// Report-looking files with an invalid date. Neither kept nor deleted.
    pub ambiguous: Vec<FileDescriptor>,
}

impl RetentionPlan {
    /// Planned deletions in execution order: reports, then images.
    pub fn deletions(&self) -> impl Iterator<Item = &FileDescriptor> {
        self.delete_reports.iter().chain(self.delete_images.iter())
    }

    /// Number of planned deletions.
    pub fn deletion_count(&self) -> usize {
        self.delete_reports.len() + self.delete_images.len()
    }

    /// Total bytes the planned deletions would free.
    pub fn bytes_to_free(&self) -> u64 {
        self.deletions().map(|f| f.size).sum()
    }

    /// Check if nothing would be deleted.
    pub fn is_noop(&self) -> bool {
        self.deletion_count() == 0
    }
}

/// Pure planner over an in-memory list of descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetentionPlanner;

impl RetentionPlanner {
    /// Create a new planner.
    pub fn new() -> Self {
        Self
    }

    /// Compute the retention plan. Input order is irrelevant.
    pub fn plan(&self, files: &[FileDescriptor]) -> RetentionPlan {
        let mut reports = files
            .iter()
            .filter(|f| f.kind == FileKind::Report)
            .cloned()
            .sorted_by(newest_first);

        let keep = reports.next();
        let delete_reports: Vec<FileDescriptor> = reports.collect();

        let delete_images: Vec<FileDescriptor> = files
            .iter()
            .filter(|f| f.kind == FileKind::Image)
            .cloned()
            .collect();

        let ambiguous: Vec<FileDescriptor> =
            files.iter().filter(|f| f.is_ambiguous()).cloned().collect();

        match &keep {
            Some(kept) => tracing::debug!(
                file = %kept.name,
                date = ?kept.date,
                older = delete_reports.len(),
                "keeping newest report"
            ),
            None => tracing::debug!("no reports found"),
        }
        for file in &delete_reports {
            tracing::debug!(file = %file.name, date = ?file.date, "planned report deletion");
        }
        for file in &delete_images {
            tracing::debug!(file = %file.name, "planned image deletion");
        }

        RetentionPlan {
            keep,
            delete_reports,
            delete_images,
            ambiguous,
        }
    }
}

/// Ordering used to rank reports: newest date first, then the greatest
/// file name, then the greatest path.
pub fn newest_first(a: &FileDescriptor, b: &FileDescriptor) -> Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| b.name.cmp(&a.name))
        .then_with(|| b.path.cmp(&a.path))
}
