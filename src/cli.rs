use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::models::{ParsingStrictness, DEFAULT_EXTENSION};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "id3scan",
    about = "Scan directories of MP3 files and report on the health of their ID3v2 tags",
    version
)]
pub struct Cli {
    /// Directories to scan
    #[arg(required = false)]
    pub paths: Vec<PathBuf>,

    /// Audio file extension(s) to inspect, matched case-insensitively
    #[arg(short = 'e', long = "extension", default_value = DEFAULT_EXTENSION)]
    pub extensions: Vec<String>,

    /// How forgiving the tag parser is with malformed frames
    #[arg(
        long = "parsing-mode",
        value_enum,
        default_value_t = ParsingStrictness::Relaxed
    )]
    pub parsing_mode: ParsingStrictness,

    /// Follow symbolic links while walking directories
    #[arg(long = "follow-links")]
    pub follow_links: bool,

    /// List of patterns to ignore (file or directory names)
    #[arg(long = "ignore")]
    pub ignore_patterns: Vec<String>,

    /// Log more detail to stderr (-v for progress, -vv for every file)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Show a spinner on stderr while scanning
    #[arg(long = "progress")]
    pub progress: bool,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
