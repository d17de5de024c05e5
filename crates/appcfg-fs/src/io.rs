//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Write content atomically to a file with locking.
///
/// Writes to a sibling temp file, then renames it over the target.
/// An advisory lock is held on the temp file while writing.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed { path: path.to_path_buf() })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .unlock()
        .map_err(|_| Error::LockFailed { path: path.to_path_buf() })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read text content, treating a missing file as `None`.
pub fn read_text_optional(path: &Path) -> Result<Option<String>> {
    match read_text(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Parse JSON text that was read from `path`.
pub fn parse_json<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|e| Error::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_text(path)?;
    parse_json(path, &content)
}

/// Read and deserialize a JSON file, treating a missing file as `None`.
pub fn read_json_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match read_text_optional(path)? {
        Some(content) => parse_json(path, &content).map(Some),
        None => Ok(None),
    }
}

/// Serialize `value` as pretty JSON (with trailing newline) and write it atomically.
pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value).map_err(|e| Error::JsonSerialize {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    content.push('\n');
    write_atomic(path, content.as_bytes())
}
