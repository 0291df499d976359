//! Platform-specific path resolution.
//!
//! Resolves the per-user configuration root and normalizes paths typed by
//! users. Public API is re-exported through the parent module.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// File name used when a store is bound with [`crate::ConfStore::for_app`].
pub const DEFAULT_FILE_NAME: &str = "config.yaml";

/// Get the per-user configuration root (e.g. `~/.config` on Linux,
/// `~/Library/Application Support` on macOS, `%APPDATA%` on Windows).
///
/// Unlike application data roots, this directory is never created here;
/// stores create their own `Dir/Id` subdirectory on demand.
pub fn default_config_dir() -> Result<PathBuf, PathError> {
    dirs::config_dir().ok_or(PathError::NoConfigDir)
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
