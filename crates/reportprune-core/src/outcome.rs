//! Scan outcome container and statistics.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::descriptor::{FileDescriptor, FileKind};
use crate::error::ScanWarning;

/// Summary statistics for a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Regular files seen.
    pub total_files: u64,
    /// Total size of all files seen.
    pub total_size: u64,
    /// Files classified as reports.
    pub reports: u64,
    /// Files classified as images.
    pub images: u64,
    /// Files classified as other (ambiguous ones included).
    pub others: u64,
    /// Report-pattern filenames rejected for an invalid date.
    pub ambiguous: u64,
}

impl ScanStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats with a classified file.
    pub fn record(&mut self, file: &FileDescriptor) {
        self.total_files += 1;
        self.total_size += file.size;
        match file.kind {
            FileKind::Report => self.reports += 1,
            FileKind::Image => self.images += 1,
            FileKind::Other => {
                self.others += 1;
                if file.is_ambiguous() {
                    self.ambiguous += 1;
                }
            }
        }
    }
}

/// Everything a scan produced: classified files plus non-fatal warnings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Canonical root path that was scanned.
    pub root: PathBuf,
    /// Classified files, in traversal order.
    pub files: Vec<FileDescriptor>,
    /// Subtrees or files that could not be read.
    pub warnings: Vec<ScanWarning>,
    /// Summary statistics.
    pub stats: ScanStats,
    /// Time taken by the scan.
    pub scan_duration: Duration,
}

impl ScanOutcome {
    /// Create an empty outcome for a root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
            warnings: Vec::new(),
            stats: ScanStats::new(),
            scan_duration: Duration::ZERO,
        }
    }

    /// Add a classified file.
    pub fn push_file(&mut self, file: FileDescriptor) {
        self.stats.record(&file);
        self.files.push(file);
    }

    /// Add a warning.
    pub fn push_warning(&mut self, warning: ScanWarning) {
        self.warnings.push(warning);
    }

    /// Check whether part of the tree could not be read.
    pub fn is_partial(&self) -> bool {
        !self.warnings.is_empty()
    }
}
