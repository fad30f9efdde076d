//! JWalk-based directory scanner.

use std::path::PathBuf;
use std::time::Instant;

use jwalk::{DirEntry, Parallelism, WalkDir};

use reportprune_core::{FileDescriptor, PruneConfig, ScanError, ScanOutcome, ScanWarning, WarningKind};

use crate::classify::Classifier;

type WalkItem = Result<DirEntry<((), ())>, jwalk::Error>;

/// A single item produced while walking the tree.
#[derive(Debug, Clone)]
pub enum ScanEntry {
    /// A classified regular file.
    File(FileDescriptor),
    /// A subtree or file that could not be read.
    Warning(ScanWarning),
}

/// Scanner that walks a root directory and classifies every regular file.
#[derive(Debug, Clone)]
pub struct ReportScanner {
    config: PruneConfig,
    classifier: Classifier,
}

impl ReportScanner {
    /// Create a scanner for a config.
    pub fn new(config: PruneConfig) -> Result<Self, ScanError> {
        let classifier = Classifier::new(&config)?;
        Ok(Self { config, classifier })
    }

    /// The config this scanner was built with.
    pub fn config(&self) -> &PruneConfig {
        &self.config
    }

    /// Resolve and validate the root path.
    ///
    /// A missing root or a root that is not a directory is the only fatal
    /// condition of a scan.
    pub fn resolve_root(&self) -> Result<PathBuf, ScanError> {
        let root = &self.config.root;
        let root_path = root.canonicalize().map_err(|e| ScanError::io(root, e))?;
        if !root_path.is_dir() {
            return Err(ScanError::NotADirectory { path: root_path });
        }
        Ok(root_path)
    }

    /// Lazily walk the tree.
    ///
    /// Traversal order is filesystem-dependent and carries no meaning.
    pub fn walk(&self) -> Result<ScanIter<'_>, ScanError> {
        let root_path = self.resolve_root()?;

        let walker = WalkDir::new(&root_path)
            .parallelism(Parallelism::Serial)
            .skip_hidden(!self.config.include_hidden)
            .follow_links(self.config.follow_symlinks)
            .sort(true)
            .min_depth(1)
            .max_depth(
                self.config
                    .max_depth
                    .map(|d| d as usize)
                    .unwrap_or(usize::MAX),
            );

        Ok(ScanIter {
            root: root_path,
            inner: Box::new(walker.into_iter()),
            classifier: &self.classifier,
        })
    }

    /// Walk the whole tree and collect the result.
    pub fn scan(&self) -> Result<ScanOutcome, ScanError> {
        let start = Instant::now();
        let iter = self.walk()?;
        let mut outcome = ScanOutcome::new(iter.root().to_path_buf());

        for entry in iter {
            match entry {
                ScanEntry::File(file) => outcome.push_file(file),
                ScanEntry::Warning(warning) => outcome.push_warning(warning),
            }
        }

        outcome.scan_duration = start.elapsed();
        tracing::debug!(
            root = %outcome.root.display(),
            files = outcome.stats.total_files,
            reports = outcome.stats.reports,
            images = outcome.stats.images,
            warnings = outcome.warnings.len(),
            "scan complete"
        );
        Ok(outcome)
    }
}

/// Lazy iterator over scanned entries.
pub struct ScanIter<'a> {
    root: PathBuf,
    inner: Box<dyn Iterator<Item = WalkItem>>,
    classifier: &'a Classifier,
}

impl ScanIter<'_> {
    /// Canonical root being walked.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn visit(&self, item: WalkItem) -> Option<ScanEntry> {
        let mut entry = match item {
            Ok(e) => e,
            Err(err) => return Some(ScanEntry::Warning(walk_warning(&err, PathBuf::new()))),
        };

        // jwalk reports an unreadable directory on the directory entry itself
        if let Some(err) = entry.read_children_error.take() {
            return Some(ScanEntry::Warning(walk_warning(&err, entry.path())));
        }

        if !entry.file_type().is_file() {
            return None;
        }

        let path = entry.path();
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(err) => {
                let warning = ScanWarning::new(&path, err.to_string(), WarningKind::MetadataError);
                tracing::warn!(path = %path.display(), "{}", warning.message);
                return Some(ScanEntry::Warning(warning));
            }
        };

        let file = self.classifier.classify(&path, metadata.len());
        match &file.ambiguity {
            Some(reason) => tracing::debug!(
                file = %file.name,
                "skipping ambiguous report name: {reason}"
            ),
            None => tracing::debug!(file = %file.name, kind = %file.kind, date = ?file.date, "classified"),
        }
        Some(ScanEntry::File(file))
    }
}

/// Turn a jwalk error into a scan warning, using `fallback` when the error
/// carries no path.
fn walk_warning(err: &jwalk::Error, fallback: PathBuf) -> ScanWarning {
    let path = err.path().map(|p| p.to_path_buf()).unwrap_or(fallback);
    let warning = match err.io_error() {
        Some(io) => ScanWarning::from_io(path, io),
        None => ScanWarning::new(path, err.to_string(), WarningKind::ReadError),
    };
    tracing::warn!(path = %warning.path.display(), "{}", warning.message);
    warning
}

impl Iterator for ScanIter<'_> {
    type Item = ScanEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.inner.next()?;
            if let Some(entry) = self.visit(item) {
                return Some(entry);
            }
        }
    }
}
