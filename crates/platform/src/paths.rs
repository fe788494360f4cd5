//! Path expansion utilities
//!
//! Configuration files name their output directory with the usual shell
//! conventions (`~`, relative segments); these helpers resolve them to
//! plain absolute-ish paths without requiring the target to exist yet.

use crate::error::PlatformError;
use std::path::{Path, PathBuf};

/// Expand a path, resolving `~` to the user's home directory
pub fn expand_path<P: AsRef<Path>>(path: P) -> Result<PathBuf, PlatformError> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if let Some(rest) = path_str.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or(PlatformError::NoHomeDirectory)?;
        Ok(home.join(rest))
    } else if path_str == "~" {
        dirs::home_dir().ok_or(PlatformError::NoHomeDirectory)
    } else {
        Ok(path.to_path_buf())
    }
}

/// Normalize a path by resolving `.` and `..` components without
/// requiring the path to exist
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            std::path::Component::ParentDir => {
                if !components.is_empty() {
                    components.pop();
                }
            }
            std::path::Component::CurDir => {}
            other => components.push(other),
        }
    }

    components.iter().collect()
}
