use anyhow::Result;
use globset::GlobSet;

use crate::cli::Cli;
use crate::utils::build_globset;

pub const DEFAULT_EXTENSION: &str = "mp3";

/// Library-side configuration for a directory scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Lowercased extensions without the leading dot
    pub extensions: Vec<String>,
    pub follow_links: bool,
    pub ignore: GlobSet,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            follow_links: false,
            ignore: GlobSet::empty(),
        }
    }
}

impl ScanOptions {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self::default()
            .with_extensions(&cli.extensions)
            .with_follow_links(cli.follow_links)
            .with_ignore_patterns(&cli.ignore_patterns)?)
    }

    pub fn with_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        let extensions: Vec<String> = extensions
            .iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        if !extensions.is_empty() {
            self.extensions = extensions;
        }
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Result<Self> {
        self.ignore = build_globset(patterns)?;
        Ok(self)
    }
}
