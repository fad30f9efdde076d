//! Deletion executor for reportprune.
//!
//! Applies a [`RetentionPlan`](reportprune_plan::RetentionPlan) to the
//! filesystem. In dry-run mode nothing is touched and every planned
//! deletion is reported as skipped. In live mode each file is deleted
//! independently: a failure is recorded and the batch carries on.

mod executor;
mod operation;
mod result;

pub use executor::{ExecutionMode, Executor};
pub use operation::{DeletionError, DeletionErrorKind};
pub use result::{ExecutionResult, SkipReason, SkippedFile};
