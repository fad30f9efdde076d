//! Retention planning for reportprune.
//!
//! Given the classified files of a scan, the planner decides which single
//! report to keep and which files to delete:
//!
//! 1. Reports are ordered by parsed date, newest first. Equal dates fall
//!    back to the lexicographically greatest file name, then path.
//! 2. The first report is kept; every other report is deleted.
//! 3. Every image is deleted, whatever the report count.
//!
//! A lone report is always kept, however old it is.
//!
//! ```rust,ignore
//! use reportprune_plan::RetentionPlanner;
//! use reportprune_scan::{PruneConfig, ReportScanner};
//!
//! let outcome = ReportScanner::new(PruneConfig::new("extracted_files"))?.scan()?;
//! let plan = RetentionPlanner::new().plan(&outcome.files);
//!
//! if let Some(keep) = &plan.keep {
//!     println!("keeping {}", keep.name);
//! }
//! for file in plan.deletions() {
//!     println!("would delete {}", file.name);
//! }
//! ```

mod retention;

pub use retention::{RetentionPlan, RetentionPlanner, newest_first};

// Re-export core types
pub use reportprune_core::{FileDescriptor, FileKind};
