use std::io::Write;
use std::path::{Path, PathBuf};

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Walk up from `start` to `stop` (inclusive) and return the first existing
/// file among `names`, checked in order at each level.
///
/// Returns `None` if `start` is not below `stop` and nothing matched there.
pub fn find_file_up_to(start: &Path, stop: &Path, names: &[&str]) -> Option<PathBuf> {
    let mut current = start;
    loop {
        for name in names {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        if current == stop {
            return None;
        }
        current = current.parent()?;
    }
}

/// Ensure a directory exists, creating it and any parents if needed.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Write `contents` to `path` through a temp file in the same directory.
///
/// The target is only replaced once the whole payload has been flushed, so
/// readers never observe a partially written file.
pub fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    ensure_dir(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    tracing::debug!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
