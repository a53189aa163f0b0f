use lofty::config::{ParseOptions, ParsingMode};
use lofty::error::LoftyError;
use lofty::file::AudioFile;
use lofty::mpeg::MpegFile;
use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use super::{TagReadError, TagReader};
use crate::models::{variant_name, ParseFailure, ParsingStrictness, TagInfo, TagVersion};

const HEADER_LEN: usize = 10;
const FOOTER_LEN: usize = 10;
const ID3V1_LEN: u64 = 128;

const FLAG_UNSYNCHRONISATION: u8 = 0x80;
const FLAG_FOOTER: u8 = 0x10;

// lofty's MPEG reader looks past the tag for audio frames and an ID3v1 trailer
const STREAM_PADDING: usize = 1024;

const ID3V1_VERSION: TagVersion = TagVersion::new(1, 1, 0);

impl From<ParsingStrictness> for ParsingMode {
    fn from(strictness: ParsingStrictness) -> Self {
        match strictness {
            ParsingStrictness::Strict => ParsingMode::Strict,
            ParsingStrictness::BestAttempt => ParsingMode::BestAttempt,
            ParsingStrictness::Relaxed => ParsingMode::Relaxed,
        }
    }
}

/// The fixed 10-byte ID3v2 header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Id3v2Header {
    major: u8,
    revision: u8,
    flags: u8,
    size: u32,
}

impl Id3v2Header {
    /// Returns `None` unless `bytes` is a full header starting with `ID3`.
    fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < HEADER_LEN || &bytes[..3] != b"ID3" {
            return None;
        }

        let size = bytes[6..10]
            .iter()
            .fold(0u32, |size, byte| (size << 7) | u32::from(byte & 0x7f));

        Some(Self {
            major: bytes[3],
            revision: bytes[4],
            flags: bytes[5],
            size,
        })
    }

    fn is_supported(&self) -> bool {
        (2..=4).contains(&self.major)
    }

    fn version(&self) -> TagVersion {
        TagVersion::new(2, self.major, self.revision)
    }

    fn unsynchronized(&self) -> bool {
        self.flags & FLAG_UNSYNCHRONISATION != 0
    }

    /// Length of the tag body following the header, footer included.
    fn body_len(&self) -> usize {
        let footer = if self.major == 4 && self.flags & FLAG_FOOTER != 0 {
            FOOTER_LEN
        } else {
            0
        };
        self.size as usize + footer
    }
}

/// Reads ID3 tags, handing the ID3v2 tag region to lofty.
///
/// Only the bytes covered by the tag header are parsed, so whatever audio
/// data follows the tag cannot affect the outcome. Files without an ID3v2
/// header (or with an unsupported one) fall back to an ID3v1 trailer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyTagReader {
    strictness: ParsingStrictness,
}

impl LoftyTagReader {
    pub fn new(strictness: ParsingStrictness) -> Self {
        Self { strictness }
    }

    fn parse_options(&self) -> ParseOptions {
        ParseOptions::new()
            .read_properties(false)
            .parsing_mode(self.strictness.into())
    }

    fn parse_region(&self, mut region: Vec<u8>) -> Result<(), TagReadError> {
        region.resize(region.len() + STREAM_PADDING, 0);
        MpegFile::read_from(&mut Cursor::new(region), self.parse_options())
            .map(|_| ())
            .map_err(|e| TagReadError::Failed(lofty_failure(&e)))
    }
}

impl TagReader for LoftyTagReader {
    fn read_tag(&self, path: &Path) -> Result<TagInfo, TagReadError> {
        let mut file = File::open(path).map_err(io_failure)?;

        let mut prefix = Vec::with_capacity(HEADER_LEN);
        (&mut file)
            .take(HEADER_LEN as u64)
            .read_to_end(&mut prefix)
            .map_err(io_failure)?;

        let header = match Id3v2Header::parse(&prefix) {
            Some(header) => header,
            None => {
                return if has_id3v1(&mut file).map_err(io_failure)? {
                    Ok(TagInfo::new(ID3V1_VERSION, false))
                } else {
                    Err(TagReadError::NoHeader)
                };
            }
        };

        if !header.is_supported() {
            if has_id3v1(&mut file).map_err(io_failure)? {
                return Ok(TagInfo::new(ID3V1_VERSION, false));
            }
            // lofty rejects the header itself with its own error
            self.parse_region(prefix)?;
            return Err(TagReadError::Failed(ParseFailure::new(
                "Id3v2",
                format!("Unsupported ID3v2 version {}", header.version()),
            )));
        }

        let tag_len = HEADER_LEN + header.body_len();
        let file_len = file.metadata().map_err(io_failure)?.len();
        if tag_len as u64 > file_len {
            return Err(io_failure(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("ID3v2 tag claims {} bytes but the file has {}", tag_len, file_len),
            )));
        }

        let mut region = prefix;
        region.resize(tag_len, 0);
        file.read_exact(&mut region[HEADER_LEN..])
            .map_err(io_failure)?;
        self.parse_region(region)?;

        Ok(TagInfo::new(header.version(), header.unsynchronized()))
    }
}

fn has_id3v1(file: &mut File) -> io::Result<bool> {
    let len = file.seek(SeekFrom::End(0))?;
    if len < ID3V1_LEN {
        return Ok(false);
    }

    file.seek(SeekFrom::Start(len - ID3V1_LEN))?;
    let mut marker = [0u8; 3];
    file.read_exact(&mut marker)?;
    Ok(&marker == b"TAG")
}

fn io_failure(err: io::Error) -> TagReadError {
    TagReadError::Failed(ParseFailure::from_error("Io", &err))
}

fn lofty_failure(err: &LoftyError) -> ParseFailure {
    let debug = format!("{:?}", err.kind());
    ParseFailure::from_error(variant_name(&debug), err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_parse() {
        let header = Id3v2Header::parse(b"ID3\x03\x01\x80\x00\x00\x02\x01").unwrap();
        assert_eq!(header.version(), TagVersion::new(2, 3, 1));
        assert!(header.unsynchronized());
        assert_eq!(header.size, 257);
        assert_eq!(header.body_len(), 257);
        assert!(header.is_supported());

        assert_eq!(Id3v2Header::parse(b"ID3\x03"), None);
        assert_eq!(Id3v2Header::parse(b"TAG\x03\x00\x00\x00\x00\x00\x00"), None);
    }

    #[test]
    fn test_v4_footer_extends_body() {
        let header = Id3v2Header::parse(b"ID3\x04\x00\x10\x00\x00\x00\x05").unwrap();
        assert_eq!(header.body_len(), 15);

        let header = Id3v2Header::parse(b"ID3\x03\x00\x10\x00\x00\x00\x05").unwrap();
        assert_eq!(header.body_len(), 5);
    }

    #[test]
    fn test_unknown_major_keeps_its_version() {
        let header = Id3v2Header::parse(b"ID3\x05\x00\x00\x00\x00\x00\x00").unwrap();
        assert!(!header.is_supported());
        assert_eq!(header.version(), TagVersion::new(2, 5, 0));
    }

    #[test]
    fn test_missing_file_is_io_failure() {
        let reader = LoftyTagReader::default();
        match reader.read_tag(Path::new("/definitely/not/here.mp3")) {
            Err(TagReadError::Failed(failure)) => assert_eq!(failure.kind.as_str(), "Io"),
            other => panic!("expected an Io failure, got {:?}", other),
        }
    }
}
