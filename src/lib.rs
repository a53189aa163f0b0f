use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::{Path, PathBuf};
use thousands::Separable;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

pub mod cli;
pub mod formatters;
pub mod models;
pub mod tags;
pub mod utils;

use crate::formatters::Writer;
use crate::models::{Report, ScanOptions};
use crate::tags::{LoftyTagReader, TagReadError, TagReader};
use crate::utils::{has_audio_extension, should_ignore};

pub const USAGE: &str = "Usage: id3scan directory ...";

/// Walks `root` and classifies every matching audio file into a fresh report.
///
/// A root that is itself a matching file is classified as a one-file tree.
pub fn scan<R: TagReader>(root: &Path, options: &ScanOptions, reader: &R) -> Report {
    scan_with_progress(root, options, reader, &ProgressBar::hidden())
}

pub fn scan_with_progress<R: TagReader>(
    root: &Path,
    options: &ScanOptions,
    reader: &R,
    progress: &ProgressBar,
) -> Report {
    let mut report = Report::new(root);

    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .into_iter()
        .filter_entry(|entry| {
            // The root is always scanned, even if its own name matches
            let keep = entry.depth() == 0
                || !should_ignore(entry.path(), &options.ignore, entry.file_type().is_dir());
            if !keep {
                debug!("Ignoring {}", entry.path().display());
            }
            keep
        });

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), err);
                continue;
            }
        };

        let path = entry.path();
        if !is_regular_file(&entry) {
            debug!("Skipping non-file entry: {}", path.display());
            continue;
        }

        if !has_audio_extension(path, &options.extensions) {
            debug!("Skipping non-audio file: {}", path.display());
            continue;
        }

        progress.set_message(format!(
            "Scanning: {} ({} files)",
            path.display(),
            report.total_files.separate_with_commas()
        ));

        classify(&mut report, path, reader);
        progress.inc(1);
    }

    info!(
        "Scanned {}: {} files, {} without tags, {} errors",
        root.display(),
        report.total_files,
        report.missing_count,
        report.error_count()
    );

    report
}

/// Routes one file's tag read into exactly one of the report's outcome buckets.
pub fn classify<R: TagReader>(report: &mut Report, path: &Path, reader: &R) {
    match reader.read_tag(path) {
        Ok(tag) => {
            debug!(
                "Tagged: {} (ID3v{}, unsynchronized: {})",
                path.display(),
                tag.version,
                tag.unsynchronized
            );
            report.record_success(&tag);
        }
        Err(TagReadError::NoHeader) => {
            debug!("No tag: {}", path.display());
            report.record_missing(path);
        }
        Err(TagReadError::Failed(failure)) => {
            debug!("Failed to read {}: {}", path.display(), failure);
            report.record_error(path, failure);
        }
    }
}

// Symlinked files count even when links are not followed for directories
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Scans each root in order, writing a progress line and then its report.
pub fn scan_roots<W: Write, R: TagReader>(
    paths: &[PathBuf],
    options: &ScanOptions,
    reader: &R,
    show_progress: bool,
    writer: &mut Writer<W>,
) -> Result<()> {
    for path in paths {
        writer.write(&format!("Scanning {}", path.display()))?;
        writer.flush()?;

        let progress = if show_progress {
            spinner()
        } else {
            ProgressBar::hidden()
        };
        let report = scan_with_progress(path, options, reader, &progress);
        progress.finish_and_clear();

        writer.write(&report.render())?;
    }

    Ok(())
}

/// Entry point behind the binary: prints usage when no paths were given.
pub fn run<W: Write>(cli: &cli::Cli, writer: &mut Writer<W>) -> Result<()> {
    if cli.paths.is_empty() {
        writer.write(USAGE)?;
        return Ok(());
    }

    let options = ScanOptions::from_cli(cli)?;
    let reader = LoftyTagReader::new(cli.parsing_mode);

    scan_roots(&cli.paths, &options, &reader, cli.progress, writer)
}

fn spinner() -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        progress.set_style(style);
    }
    progress
}
