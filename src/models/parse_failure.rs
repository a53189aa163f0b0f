use std::error::Error;
use std::fmt;

/// Stable category of a tag parse failure.
///
/// Kinds are open-ended strings so that new failure categories coming out of
/// the tag reader need no changes here. Ordering is by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorKind(String);

impl ErrorKind {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ErrorKind {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ErrorKind {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A failed tag parse, kept with enough detail to print it back to a human.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub kind: ErrorKind,
    pub message: String,
    /// Underlying causes, outermost first. Does not repeat `message`.
    pub trace: Vec<String>,
}

impl ParseFailure {
    pub fn new(kind: impl Into<ErrorKind>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            trace: Vec::new(),
        }
    }

    pub fn with_trace(mut self, trace: Vec<String>) -> Self {
        self.trace = trace;
        self
    }

    /// Builds a failure from an error value, walking its `source()` chain for the trace.
    pub fn from_error(kind: impl Into<ErrorKind>, err: &(dyn Error + 'static)) -> Self {
        let mut trace = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            trace.push(cause.to_string());
            source = cause.source();
        }

        Self::new(kind, err.to_string()).with_trace(trace)
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Extracts the leading identifier of a `Debug` rendering, e.g. `Io` from `Io(Custom { .. })`.
pub fn variant_name(debug: &str) -> &str {
    let end = debug
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(debug.len());
    &debug[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug)]
    struct Outer(io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "could not read frame")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_from_error_collects_source_chain() {
        let err = Outer(io::Error::new(io::ErrorKind::UnexpectedEof, "unexpected end of file"));
        let failure = ParseFailure::from_error("Io", &err);

        assert_eq!(failure.kind.as_str(), "Io");
        assert_eq!(failure.message, "could not read frame");
        assert_eq!(failure.trace, vec!["unexpected end of file".to_string()]);
    }

    #[test]
    fn test_variant_name() {
        assert_eq!(variant_name("Io(Custom { kind: Other })"), "Io");
        assert_eq!(variant_name("SizeMismatch"), "SizeMismatch");
        assert_eq!(variant_name("Id3v2(Id3v2Error { kind: BadFrameId })"), "Id3v2");
        assert_eq!(variant_name("FakeTag { .. }"), "FakeTag");
        assert_eq!(variant_name(""), "");
    }

    #[test]
    fn test_error_kinds_order_by_name() {
        let mut kinds = vec![ErrorKind::new("ValueError"), ErrorKind::new("IOError")];
        kinds.sort();
        assert_eq!(kinds[0].as_str(), "IOError");
    }
}
