//! Resolved-path snapshot for CLI introspection.
//!
//! Captures every path a store handle resolves to in one call so the
//! `conf paths` command and tests can compare them side by side.

use std::path::PathBuf;

use crate::store::ConfStore;

/// All paths a store resolves to, plus whether the file currently exists.
///
/// Use this for debugging "which file is this process actually using"
/// issues when several binaries share one store identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Owning application / namespace.
    pub id: String,
    /// Base directory (usually the per-user configuration root).
    pub dir: PathBuf,
    /// `Dir/Id`
    pub dir_path: PathBuf,
    /// `Dir/Id/File`
    pub path: PathBuf,
    /// Sidecar lock file honored by writers.
    pub lock_path: PathBuf,
    /// Whether the configuration file is present.
    pub exists: bool,
}

impl ResolvedPaths {
    /// Resolve all paths for `store`.
    pub fn resolve(store: &ConfStore) -> Self {
        Self {
            id: store.id().to_string(),
            dir: store.dir().to_path_buf(),
            dir_path: store.dir_path(),
            path: store.path(),
            lock_path: store.lock_path(),
            exists: store.exists(),
        }
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "id = {}", self.id)?;
        writeln!(f, "dir = {}", self.dir.display())?;
        writeln!(f, "dir_path = {}", self.dir_path.display())?;
        writeln!(f, "path = {}", self.path.display())?;
        writeln!(f, "lock_path = {}", self.lock_path.display())?;
        write!(f, "exists = {}", self.exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn resolve_reflects_store_identity() {
        let temp = tempdir().unwrap();
        let store = ConfStore::new("foo", temp.path(), "config.yaml");

        let paths = ResolvedPaths::resolve(&store);
        assert_eq!(paths.dir_path, temp.path().join("foo"));
        assert_eq!(paths.path, temp.path().join("foo").join("config.yaml"));
        assert!(paths.lock_path.starts_with(&paths.dir_path));
        assert!(!paths.exists);
    }

    #[test]
    fn display_format_is_parseable() {
        let temp = tempdir().unwrap();
        let store = ConfStore::new("foo", temp.path(), "config.yaml");
        let output = ResolvedPaths::resolve(&store).to_string();

        for key in ["id", "dir", "dir_path", "path", "lock_path", "exists"] {
            assert!(
                output.lines().any(|l| l.starts_with(&format!("{key} = "))),
                "missing {key}"
            );
        }
    }
}
