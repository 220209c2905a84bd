//! Reads the directory and query files into memory.

use crate::core::Entry;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads `path` as UTF-8 and returns one string per line.
///
/// `\r\n` endings are accepted and a trailing newline does not produce an
/// empty last line.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<String> = text.lines().map(str::to_owned).collect();
    debug!(path = %path.display(), lines = lines.len(), "loaded input");
    Ok(lines)
}

/// Reads a directory file and parses every line into an [`Entry`].
pub fn read_directory(path: impl AsRef<Path>) -> Result<Vec<Entry>> {
    Ok(read_lines(path)?.into_iter().map(Entry::parse).collect())
}
