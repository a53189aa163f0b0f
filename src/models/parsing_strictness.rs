use clap::ValueEnum;

/// How forgiving the tag reader should be with malformed frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ParsingStrictness {
    /// Fail on any deviation from the ID3v2 standard
    Strict,
    /// Recover from bad frames where possible, failing only on unrecoverable data
    BestAttempt,
    /// Skip anything that cannot be parsed
    #[default]
    Relaxed,
}
