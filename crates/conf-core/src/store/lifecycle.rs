//! Store lifecycle: create, reset, probe.
//!
//! On-disk states move Nonexistent -> Initialized (empty file) -> Populated
//! (after an overwrite). Only [`ConfStore::init`] goes back, and it does so
//! by deleting the whole `Dir/Id` directory.

use std::fs::{self, OpenOptions};
use std::path::{Component, Path, PathBuf};

use tracing::info;

use super::ConfStore;
use crate::error::{ConfError, Result};
use crate::paths::{default_config_dir, ensure_private_dir, restrict_file};

impl ConfStore {
    /// Destructively (re)create the store directory and an empty file.
    ///
    /// Any existing `Dir/Id` directory is removed recursively, including
    /// files this store does not own. With an empty `id` that directory is
    /// `dir` itself, so everything under `dir` goes. Callers with a terminal
    /// should ask for confirmation first.
    ///
    /// An empty `id` is refused when `dir` is the per-user configuration
    /// root or a filesystem root.
    ///
    /// Permissions are owner-only (0700/0600) because configuration files
    /// routinely hold session tokens and cookies.
    pub fn init(&self) -> Result<()> {
        self.validate_identity()?;

        let dir = self.dir_path();
        if dir.parent().is_none() {
            return Err(ConfError::Identity(format!(
                "refusing to reset filesystem root {}",
                dir.display()
            )));
        }
        if self.id.is_empty() && is_user_config_root(&self.dir) {
            return Err(ConfError::Identity(format!(
                "refusing to reset the user configuration root {}",
                dir.display()
            )));
        }

        if dir.exists() {
            fs::remove_dir_all(&dir).map_err(|e| ConfError::io(&dir, e))?;
        }
        ensure_private_dir(&dir)?;

        let path = self.path();
        touch(&path)?;
        info!(id = %self.id, path = %path.display(), "Initialized configuration store");
        Ok(())
    }

    /// True if the configuration file is present.
    pub fn exists(&self) -> bool {
        self.path().is_file()
    }

    /// [`init`](Self::init) only when the file does not exist yet.
    pub fn soft_init(&self) -> Result<()> {
        if self.exists() {
            return Ok(());
        }
        self.init()
    }

    /// Path to hand to an external editor.
    ///
    /// Creates the directory if needed but leaves the file alone; editors
    /// create it on first save.
    pub fn edit_path(&self) -> Result<PathBuf> {
        self.ensure_dir()?;
        Ok(self.path())
    }

    /// Create `Dir/Id` if absent without touching anything inside it.
    pub(crate) fn ensure_dir(&self) -> Result<()> {
        self.validate_identity()?;
        ensure_private_dir(&self.dir_path())?;
        Ok(())
    }

    fn validate_identity(&self) -> Result<()> {
        if self.id.is_empty() && self.dir.as_os_str().is_empty() {
            return Err(ConfError::Identity("empty directory id".to_string()));
        }
        if !self.id.is_empty() && !is_single_component(&self.id) {
            return Err(ConfError::Identity(format!(
                "id {:?} must be a single path component",
                self.id
            )));
        }
        if !is_single_component(&self.file) {
            return Err(ConfError::Identity(format!(
                "file {:?} must be a single path component",
                self.file
            )));
        }
        Ok(())
    }
}

fn is_user_config_root(dir: &Path) -> bool {
    default_config_dir().is_ok_and(|root| same_dir(&root, dir))
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a.components().eq(b.components()),
    }
}

fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn touch(path: &Path) -> Result<()> {
    let mut options = OpenOptions::new();
    options.create(true).write(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(crate::paths::FILE_MODE);
    }
    options.open(path).map_err(|e| ConfError::io(path, e))?;
    restrict_file(path).map_err(|e| ConfError::io(path, e))
}
