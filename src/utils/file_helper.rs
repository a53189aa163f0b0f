use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

pub fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid ignore pattern: {}", pattern))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Checks an entry's file name against the ignore set.
///
/// Directories are also tried with a trailing `/`, so `backups/` only ever
/// matches directories.
pub fn should_ignore(path: &Path, ignore: &GlobSet, is_dir: bool) -> bool {
    if ignore.is_empty() {
        return false;
    }

    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return false,
    };

    if ignore.is_match(&*name) {
        return true;
    }

    is_dir && ignore.is_match(format!("{}/", name))
}

/// Case-insensitive suffix match of the file name against `.ext` for each extension.
pub fn has_audio_extension(path: &Path, extensions: &[String]) -> bool {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().to_lowercase(),
        None => return false,
    };

    extensions
        .iter()
        .any(|ext| name.ends_with(&format!(".{}", ext.to_lowercase())))
}
