//! Filename classification: dated reports, images and everything else.

use std::path::Path;

use chrono::NaiveDate;
use regex::Regex;

use reportprune_core::{FileDescriptor, PruneConfig, ScanError};

/// Result of matching a filename against the report pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateMatch {
    /// The filename does not look like a report.
    NoMatch,
    /// The filename is a report with a valid date.
    Valid(NaiveDate),
    /// The filename looks like a report but the digits are not a calendar date.
    Invalid(String),
}

/// Compiled report filename pattern with `day`, `month` and `year` groups.
#[derive(Debug, Clone)]
pub struct ReportPattern {
    regex: Regex,
}

impl ReportPattern {
    /// Compile the pattern held by a config.
    pub fn from_config(config: &PruneConfig) -> Result<Self, ScanError> {
        Ok(Self {
            regex: config.compiled_report_pattern()?,
        })
    }

    /// Match a filename and extract its date.
    pub fn parse(&self, name: &str) -> DateMatch {
        let Some(caps) = self.regex.captures(name) else {
            return DateMatch::NoMatch;
        };

        let day = caps.name("day").map(|m| m.as_str()).unwrap_or_default();
        let month = caps.name("month").map(|m| m.as_str()).unwrap_or_default();
        let year = caps.name("year").map(|m| m.as_str()).unwrap_or_default();

        let parsed = match (day.parse::<u32>(), month.parse::<u32>(), year.parse::<i32>()) {
            (Ok(d), Ok(m), Ok(y)) => NaiveDate::from_ymd_opt(y, m, d),
            _ => None,
        };

        match parsed {
            Some(date) => DateMatch::Valid(date),
            None => DateMatch::Invalid(format!(
                "day {day}, month {month}, year {year} is not a calendar date"
            )),
        }
    }
}

/// Classifies files by name using the configured rules.
#[derive(Debug, Clone)]
pub struct Classifier {
    pattern: ReportPattern,
    config: PruneConfig,
}

impl Classifier {
    /// Build a classifier from a config.
    pub fn new(config: &PruneConfig) -> Result<Self, ScanError> {
        Ok(Self {
            pattern: ReportPattern::from_config(config)?,
            config: config.clone(),
        })
    }

    /// Classify a single file.
    ///
    /// The report pattern wins over the image set: a report-looking name
    /// with a bad date is `Other`, never an image.
    pub fn classify(&self, path: &Path, size: u64) -> FileDescriptor {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        match self.pattern.parse(&name) {
            DateMatch::Valid(date) => FileDescriptor::report(path, size, date),
            DateMatch::Invalid(reason) => FileDescriptor::ambiguous(path, size, reason),
            DateMatch::NoMatch if self.config.is_image(path) => FileDescriptor::image(path, size),
            DateMatch::NoMatch => FileDescriptor::other(path, size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reportprune_core::FileKind;

    fn default_pattern() -> ReportPattern {
        ReportPattern::from_config(&PruneConfig::default()).unwrap()
    }

    #[test]
    fn test_parse_valid_date() {
        let pattern = default_pattern();
        assert_eq!(
            pattern.parse("Data_Volume_Report_07022026.xlsx"),
            DateMatch::Valid(NaiveDate::from_ymd_opt(2026, 2, 7).unwrap())
        );
    }

    #[test]
    fn test_parse_extension_case_insensitive() {
        let pattern = default_pattern();
        assert!(matches!(
            pattern.parse("Data_Volume_Report_04022026.XLSX"),
            DateMatch::Valid(_)
        ));
    }

    #[test]
    fn test_parse_invalid_calendar_date() {
        let pattern = default_pattern();
        assert!(matches!(
            pattern.parse("Data_Volume_Report_99992026.xlsx"),
            DateMatch::Invalid(_)
        ));
        assert!(matches!(
            pattern.parse("Data_Volume_Report_32012026.xlsx"),
            DateMatch::Invalid(_)
        ));
        assert!(matches!(
            pattern.parse("Data_Volume_Report_01132026.xlsx"),
            DateMatch::Invalid(_)
        ));
        // Not a leap year
        assert!(matches!(
            pattern.parse("Data_Volume_Report_29022025.xlsx"),
            DateMatch::Invalid(_)
        ));
    }

    #[test]
    fn test_parse_no_match() {
        let pattern = default_pattern();
        assert_eq!(pattern.parse("Data_Volume_Report_0702202.xlsx"), DateMatch::NoMatch);
        assert_eq!(pattern.parse("Data_Volume_Report_07022026.xls"), DateMatch::NoMatch);
        assert_eq!(pattern.parse("Copy of Data_Volume_Report_07022026.xlsx"), DateMatch::NoMatch);
        assert_eq!(pattern.parse("summary.xlsx"), DateMatch::NoMatch);
    }

    #[test]
    fn test_classify() {
        let classifier = Classifier::new(&PruneConfig::default()).unwrap();

        let report = classifier.classify(Path::new("/d/Data_Volume_Report_07022026.xlsx"), 10);
        assert_eq!(report.kind, FileKind::Report);

        let image = classifier.classify(Path::new("/d/image001.PNG"), 10);
        assert_eq!(image.kind, FileKind::Image);

        let ambiguous = classifier.classify(Path::new("/d/Data_Volume_Report_99992026.xlsx"), 10);
        assert_eq!(ambiguous.kind, FileKind::Other);
        assert!(ambiguous.is_ambiguous());

        let other = classifier.classify(Path::new("/d/readme.txt"), 10);
        assert_eq!(other.kind, FileKind::Other);
        assert!(!other.is_ambiguous());
    }

    #[test]
    fn test_custom_pattern() {
        let config = PruneConfig::builder()
            .root("/d")
            .report_pattern(r"^(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2})_usage\.csv$")
            .build()
            .unwrap();
        let classifier = Classifier::new(&config).unwrap();

        let report = classifier.classify(Path::new("/d/2026-02-07_usage.csv"), 1);
        assert_eq!(report.date, NaiveDate::from_ymd_opt(2026, 2, 7));

        let default_name = classifier.classify(Path::new("/d/Data_Volume_Report_07022026.xlsx"), 1);
        assert_eq!(default_name.kind, FileKind::Other);
    }
}
