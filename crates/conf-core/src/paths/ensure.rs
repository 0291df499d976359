//! Directory creation for store directories.
//!
//! Creates missing directories with owner-only permissions. Existing
//! directories and the files inside them are left exactly as they are.

use std::fs::DirBuilder;
use std::path::Path;

use super::error::PathError;
use super::perms::{DIR_MODE, restrict_dir};

/// Ensure `path` exists as a directory, creating it (and parents) if needed.
///
/// A newly created leaf directory gets [`DIR_MODE`]. Returns `true` when the
/// directory had to be created.
pub fn ensure_private_dir(path: &Path) -> Result<bool, PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::EmptyPath);
    }

    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(false);
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    let create_failed = |e: std::io::Error| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };
    builder.create(path).map_err(create_failed)?;
    restrict_dir(path).map_err(create_failed)?;

    tracing::debug!(path = %path.display(), mode = %format_args!("{DIR_MODE:o}"), "Created store directory");
    Ok(true)
}
