//! Directory scanning and filename classification for reportprune.
//!
//! The scanner walks a root directory, emits one [`FileDescriptor`] per
//! regular file and classifies it as a dated report, an image or other.
//!
//! # Example
//!
//! ```rust,no_run
//! use reportprune_scan::{PruneConfig, ReportScanner};
//!
//! let scanner = ReportScanner::new(PruneConfig::new("extracted_files")).unwrap();
//! let outcome = scanner.scan().unwrap();
//!
//! println!("{} reports, {} images", outcome.stats.reports, outcome.stats.images);
//! for warning in &outcome.warnings {
//!     eprintln!("skipped: {warning}");
//! }
//! ```
//!
//! Unreadable subtrees become [`ScanWarning`]s; siblings are still scanned.

mod classify;
mod scanner;

pub use classify::{Classifier, DateMatch, ReportPattern};
pub use scanner::{ReportScanner, ScanEntry, ScanIter};

// Re-export core types for convenience
pub use reportprune_core::{
    FileDescriptor, FileKind, PruneConfig, ScanError, ScanOutcome, ScanStats, ScanWarning,
    WarningKind,
};
