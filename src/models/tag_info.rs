use std::fmt;

/// ID3 tag format version, compared lexicographically as `(major, minor, revision)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagVersion {
    pub major: u8,
    pub minor: u8,
    pub revision: u8,
}

impl TagVersion {
    pub const fn new(major: u8, minor: u8, revision: u8) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }
}

impl fmt::Display for TagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

/// The facts about a successfully parsed tag that a report cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub version: TagVersion,
    pub unsynchronized: bool,
}

impl TagInfo {
    pub fn new(version: TagVersion, unsynchronized: bool) -> Self {
        Self {
            version,
            unsynchronized,
        }
    }
}
