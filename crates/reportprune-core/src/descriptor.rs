//! Classified file descriptors.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Classification of a scanned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FileKind {
    /// A dated report whose filename yielded a valid calendar date.
    Report,
    /// An image, recognised by extension.
    Image,
    /// Anything else. Never kept or deleted.
    Other,
}

/// A single regular file found during a scan.
///
/// Descriptors are built fresh on every scan. The constructors uphold the
/// invariant that `date` is present exactly when `kind` is [`FileKind::Report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Absolute path to the file.
    pub path: PathBuf,

    /// File name (last path component).
    pub name: CompactString,

    /// Classification.
    pub kind: FileKind,

    /// Date parsed from the filename (reports only).
    pub date: Option<NaiveDate>,

    /// Size in bytes.
    pub size: u64,

    /// Why a report-looking filename was rejected, if it was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambiguity: Option<String>,
}

impl FileDescriptor {
    /// Create a report descriptor.
    pub fn report(path: impl Into<PathBuf>, size: u64, date: NaiveDate) -> Self {
        Self::build(path.into(), FileKind::Report, Some(date), size, None)
    }

    /// Create an image descriptor.
    pub fn image(path: impl Into<PathBuf>, size: u64) -> Self {
        Self::build(path.into(), FileKind::Image, None, size, None)
    }

    /// Create a descriptor for a file that is neither a report nor an image.
    pub fn other(path: impl Into<PathBuf>, size: u64) -> Self {
        Self::build(path.into(), FileKind::Other, None, size, None)
    }

    /// Create a descriptor for a filename that matched the report pattern
    /// but whose digits are not a valid date. It is classified as `Other`.
    pub fn ambiguous(path: impl Into<PathBuf>, size: u64, reason: impl Into<String>) -> Self {
        Self::build(path.into(), FileKind::Other, None, size, Some(reason.into()))
    }

    fn build(
        path: PathBuf,
        kind: FileKind,
        date: Option<NaiveDate>,
        size: u64,
        ambiguity: Option<String>,
    ) -> Self {
        let name = file_name_of(&path);
        Self {
            path,
            name,
            kind,
            date,
            size,
            ambiguity,
        }
    }

    /// Check if this is a dated report.
    pub fn is_report(&self) -> bool {
        self.kind == FileKind::Report
    }

    /// Check if this is an image.
    pub fn is_image(&self) -> bool {
        self.kind == FileKind::Image
    }

    /// Check if this filename looked like a report but carried an invalid date.
    pub fn is_ambiguous(&self) -> bool {
        self.ambiguity.is_some()
    }
}

fn file_name_of(path: &Path) -> CompactString {
    path.file_name()
        .map(|n| CompactString::new(n.to_string_lossy()))
        .unwrap_or_else(|| CompactString::new(path.to_string_lossy()))
}
