use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use super::{ErrorKind, ParseFailure, TagInfo, TagVersion};
use crate::formatters::render_report;

/// A file whose tag could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub path: PathBuf,
    pub kind: ErrorKind,
    pub message: String,
    pub trace: Vec<String>,
}

/// Running tally of tag parse outcomes for one scanned root.
///
/// Every recorded file lands in exactly one of three buckets (success,
/// missing, error) and bumps `total_files` once, so
/// `total_files == success_count() + missing_count + error_count()` always holds.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub root: PathBuf,
    pub total_files: usize,
    pub missing_count: usize,
    pub unsync_count: usize,
    pub version_histogram: BTreeMap<TagVersion, usize>,
    pub exception_histogram: BTreeMap<ErrorKind, usize>,
    pub error_records: Vec<ErrorRecord>,
}

impl Report {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// The file has no tag header at all.
    pub fn record_missing(&mut self, _path: &Path) {
        self.missing_count += 1;
        self.total_files += 1;
    }

    pub fn record_error(&mut self, path: &Path, failure: ParseFailure) {
        *self
            .exception_histogram
            .entry(failure.kind.clone())
            .or_insert(0) += 1;
        self.error_records.push(ErrorRecord {
            path: path.to_path_buf(),
            kind: failure.kind,
            message: failure.message,
            trace: failure.trace,
        });
        self.total_files += 1;
    }

    pub fn record_success(&mut self, tag: &TagInfo) {
        *self.version_histogram.entry(tag.version).or_insert(0) += 1;
        if tag.unsynchronized {
            self.unsync_count += 1;
        }
        self.total_files += 1;
    }

    pub fn error_count(&self) -> usize {
        self.error_records.len()
    }

    pub fn success_count(&self) -> usize {
        self.total_files - self.missing_count - self.error_count()
    }

    /// Files read without error, which includes files that simply have no tag.
    pub fn loaded_count(&self) -> usize {
        self.total_files - self.error_count()
    }

    /// Percentage of files loaded without error, or `None` for an empty report.
    pub fn loaded_percentage(&self) -> Option<f64> {
        if self.total_files == 0 {
            return None;
        }
        Some(self.loaded_count() as f64 / self.total_files as f64 * 100.0)
    }

    pub fn render(&self) -> String {
        render_report(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
