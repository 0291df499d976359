//! Path utilities for configuration stores.
//!
//! - Per-user configuration root and user path normalization
//! - Private directory creation
//! - Permission bits applied to store files and directories
//! - A resolved-path snapshot for diagnostics
//!
//! No interactive/terminal I/O here - adapters handle prompts separately.

mod ensure;
mod error;
mod perms;
mod platform;
mod resolver;

#[cfg(test)]
pub(crate) mod test_utils;

pub use ensure::ensure_private_dir;
pub use error::PathError;
#[cfg(unix)]
pub use perms::mode_of;
pub use perms::{DIR_MODE, FILE_MODE, restrict_dir, restrict_file};
pub use platform::{DEFAULT_FILE_NAME, default_config_dir, normalize_user_path};
pub use resolver::ResolvedPaths;
