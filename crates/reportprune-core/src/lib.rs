//! Core types and configuration for reportprune.
//!
//! This crate provides the data structures shared by the scanner, the
//! retention planner and the deletion executor: file descriptors, scan
//! outcomes, configuration and the scan error types.

mod config;
mod descriptor;
mod error;
mod outcome;

pub use config::{
    DEFAULT_IMAGE_EXTENSIONS, DEFAULT_REPORT_PATTERN, PruneConfig, PruneConfigBuilder,
    PruneConfigBuilderError,
};
pub use descriptor::{FileDescriptor, FileKind};
pub use error::{ScanError, ScanWarning, WarningKind};
pub use outcome::{ScanOutcome, ScanStats};
