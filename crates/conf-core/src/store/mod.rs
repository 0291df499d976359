//! The configuration store handle.
//!
//! A [`ConfStore`] names one YAML document on disk through an
//! `{id, dir, file}` triple. The handle is a plain value: construct one at
//! startup and pass it to whatever needs it. Every operation re-reads or
//! rewrites the file, so handles never hold cached state.
//!
//! Operations are grouped by concern:
//! - [`lifecycle`]: `init`, `soft_init`, `exists`, `edit_path`
//! - [`reader`]: `data`, `print`
//! - [`writer`]: `overwrite`, `overwrite_raw` (locked, atomic)
//! - [`query`]: `query`, `query_value`, `query_print`

use std::path::{Path, PathBuf};

use crate::paths::{DEFAULT_FILE_NAME, PathError, default_config_dir};

mod lifecycle;
mod lock;
mod query;
mod reader;
mod writer;

pub use lock::WriteLock;

/// Handle to one configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfStore {
    id: String,
    dir: PathBuf,
    file: String,
}

impl ConfStore {
    /// Bind a store to `dir/id/file`.
    pub fn new(id: impl Into<String>, dir: impl Into<PathBuf>, file: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dir: dir.into(),
            file: file.into(),
        }
    }

    /// Bind a store for `id` under the per-user configuration root, using
    /// [`DEFAULT_FILE_NAME`].
    pub fn for_app(id: impl Into<String>) -> Result<Self, PathError> {
        Ok(Self::new(id, default_config_dir()?, DEFAULT_FILE_NAME))
    }

    /// Usually the application name.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Usually the per-user configuration root.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Usually `config.yaml`.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// `dir` and `id` joined.
    pub fn dir_path(&self) -> PathBuf {
        self.dir.join(&self.id)
    }

    /// `dir`, `id` and `file` joined.
    pub fn path(&self) -> PathBuf {
        self.dir_path().join(&self.file)
    }

    /// Sidecar file that writers lock while committing.
    pub fn lock_path(&self) -> PathBuf {
        self.dir_path().join(format!(".{}.lock", self.file))
    }
}
