mod file_helper;

pub use file_helper::{build_globset, has_audio_extension, should_ignore};
