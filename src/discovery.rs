//! Discovery of profile files in the data directory

use crate::errors::{ExplorerError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File-name pattern of Argo profile files
pub const PROFILE_FILE_PATTERN: &str = "*_prof.nc";

/// Lists files in `dir` matching `pattern`, sorted by path.
///
/// Only the directory itself is searched, not subdirectories. An existing
/// directory with no matching files yields an empty list.
///
/// # Errors
///
/// Returns [`ExplorerError::DataDirNotFound`] if `dir` is not a directory
/// and [`ExplorerError::PatternError`] for an invalid pattern.
pub fn discover_profile_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ExplorerError::DataDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let full_pattern = format!("{}/{}", escaped.trim_end_matches('/'), pattern);

    let mut files = Vec::new();
    for entry in glob::glob(&full_pattern)? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => warn!("Skipping unreadable directory entry: {}", e),
        }
    }
    files.sort();

    debug!(dir = %dir.display(), count = files.len(), "discovered profile files");
    Ok(files)
}
