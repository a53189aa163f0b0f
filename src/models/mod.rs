mod parse_failure;
mod parsing_strictness;
mod report;
mod scan_options;
mod tag_info;

pub use parse_failure::{variant_name, ErrorKind, ParseFailure};
pub use parsing_strictness::ParsingStrictness;
pub use report::{ErrorRecord, Report};
pub use scan_options::{ScanOptions, DEFAULT_EXTENSION};
pub use tag_info::{TagInfo, TagVersion};
