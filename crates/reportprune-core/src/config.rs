//! Prune configuration types.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// Default report filename pattern: `Data_Volume_Report_<DD><MM><YYYY>.xlsx`.
pub const DEFAULT_REPORT_PATTERN: &str =
    r"^Data_Volume_Report_(?P<day>\d{2})(?P<month>\d{2})(?P<year>\d{4})\.(?i:xlsx)$";

/// Default image extensions (compared case-insensitively).
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

const DATE_GROUPS: [&str; 3] = ["day", "month", "year"];

/// Configuration for a prune run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PruneConfig {
    /// Root directory to scan.
    pub root: PathBuf,

    /// Extensions classified as images, lower-case, without the leading dot.
    #[builder(default = "Self::default_image_extensions()", setter(custom))]
    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,

    /// Regex for report filenames. Must define `day`, `month` and `year` groups.
    #[builder(default = "DEFAULT_REPORT_PATTERN.to_string()")]
    #[serde(default = "default_report_pattern")]
    pub report_pattern: String,

    /// Follow symbolic links.
    #[builder(default = "false")]
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Maximum depth to traverse (None = unlimited).
    #[builder(default)]
    #[serde(default)]
    pub max_depth: Option<u32>,

    /// Include hidden files (starting with .).
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_hidden: bool,
}

fn default_true() -> bool {
    true
}

fn default_image_extensions() -> Vec<String> {
    DEFAULT_IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_report_pattern() -> String {
    DEFAULT_REPORT_PATTERN.to_string()
}

impl PruneConfigBuilder {
    /// Set the image extensions. Entries are trimmed, lower-cased and
    /// stripped of a leading dot; empty entries are dropped.
    pub fn image_extensions<I, S>(&mut self, extensions: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = normalize_extension(ext.as_ref()).to_ascii_lowercase();
            if !ext.is_empty() && !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }
        self.image_extensions = Some(normalized);
        self
    }

    fn default_image_extensions() -> Vec<String> {
        default_image_extensions()
    }

    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) if root.as_os_str().is_empty() => {
                return Err("Root path cannot be empty".to_string());
            }
            None => return Err("Root path is required".to_string()),
            _ => {}
        }

        if let Some(ref extensions) = self.image_extensions {
            if extensions.is_empty() {
                return Err("At least one image extension is required".to_string());
            }
        }

        if let Some(ref pattern) = self.report_pattern {
            compile_report_pattern(pattern)?;
        }

        Ok(())
    }
}

impl PruneConfig {
    /// Create a new config builder.
    pub fn builder() -> PruneConfigBuilder {
        PruneConfigBuilder::default()
    }

    /// Create a config with default classification rules for a root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            image_extensions: default_image_extensions(),
            report_pattern: default_report_pattern(),
            follow_symlinks: false,
            max_depth: None,
            include_hidden: true,
        }
    }

    /// Compile the report pattern, checking that the date groups exist.
    pub fn compiled_report_pattern(&self) -> Result<Regex, ScanError> {
        compile_report_pattern(&self.report_pattern)
            .map_err(|message| ScanError::InvalidConfig { message })
    }

    /// Check whether a path has one of the configured image extensions.
    pub fn is_image(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        if ext.is_empty() {
            return false;
        }
        self.image_extensions.iter().any(|candidate| {
            let candidate = normalize_extension(candidate);
            !candidate.is_empty() && candidate.eq_ignore_ascii_case(ext)
        })
    }
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

fn normalize_extension(ext: &str) -> &str {
    ext.trim().trim_start_matches('.')
}

fn compile_report_pattern(pattern: &str) -> Result<Regex, String> {
    let regex = Regex::new(pattern).map_err(|e| format!("Invalid report pattern: {e}"))?;
    let names: Vec<&str> = regex.capture_names().flatten().collect();
    for group in DATE_GROUPS {
        if !names.contains(&group) {
            return Err(format!("Report pattern is missing the `{group}` group"));
        }
    }
    Ok(regex)
}
