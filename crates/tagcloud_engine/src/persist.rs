use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("destination {0} is not writable: {1}")]
    Destination(String, String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Atomically write `content` to `path`: stage a temp file in the target
/// directory, flush and sync it, then rename over the destination. Readers
/// never observe a partial file, and a failed run leaves no target behind.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), PersistError> {
    let parent = parent_dir(path);
    if parent.exists() {
        let meta = fs::metadata(&parent)
            .map_err(|e| PersistError::Destination(path.display().to_string(), e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::Destination(
                path.display().to_string(),
                "parent is not a directory".into(),
            ));
        }
    } else {
        fs::create_dir_all(&parent)
            .map_err(|e| PersistError::Destination(path.display().to_string(), e.to_string()))?;
    }

    let mut tmp = NamedTempFile::new_in(&parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace an existing file if present to keep determinism.
    if path.exists() {
        fs::remove_file(path)?;
    }
    tmp.persist(path).map_err(|e| PersistError::Io(e.error))?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
