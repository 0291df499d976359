//! Restrictive permission bits for store directories and files.
//!
//! Configuration files may hold tokens and cookies, so stores default to
//! owner-only access. The modes are applied explicitly after creation so the
//! result does not depend on the process umask. On non-Unix targets these
//! helpers are no-ops.

use std::io;
use std::path::Path;

/// Owner-only access for store directories.
pub const DIR_MODE: u32 = 0o700;

/// Owner-only read/write for configuration files.
pub const FILE_MODE: u32 = 0o600;

/// Apply [`FILE_MODE`] to `path`.
pub fn restrict_file(path: &Path) -> io::Result<()> {
    set_mode(path, FILE_MODE)
}

/// Apply [`DIR_MODE`] to `path`.
pub fn restrict_dir(path: &Path) -> io::Result<()> {
    set_mode(path, DIR_MODE)
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn set_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}

/// Permission bits of `path` (lower nine bits only).
#[cfg(unix)]
pub fn mode_of(path: &Path) -> io::Result<u32> {
    use std::os::unix::fs::PermissionsExt;

    Ok(std::fs::metadata(path)?.permissions().mode() & 0o777)
}
