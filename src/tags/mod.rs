mod lofty_reader;

pub use lofty_reader::LoftyTagReader;

use std::path::Path;
use thiserror::Error;

use crate::models::{ParseFailure, TagInfo};

/// Why a file's tag could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagReadError {
    /// The file carries no tag header. Expected for untagged files, not a defect.
    #[error("No ID3v2 header found")]
    NoHeader,

    #[error("{0}")]
    Failed(ParseFailure),
}

/// Source of parsed tags for the scanner.
pub trait TagReader {
    fn read_tag(&self, path: &Path) -> Result<TagInfo, TagReadError>;
}
