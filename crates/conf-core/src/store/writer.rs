//! Locked, atomic whole-document overwrite.
//!
//! A commit is: serialize, ensure `Dir/Id`, take the exclusive lock, write
//! a temp file next to the target, fsync, chmod 0600, rename over the
//! target, release the lock. Readers see either the previous commit or the
//! new one, never a mix.

use std::io::Write;

use serde::Serialize;
use serde_yaml::Value;
use tempfile::Builder;
use tracing::info;

use super::{ConfStore, WriteLock};
use crate::error::{ConfError, Result};
use crate::paths::restrict_file;

impl ConfStore {
    /// Replace the whole document with `value` serialized as YAML.
    ///
    /// There is no merge with the existing content. Serialization happens
    /// before any filesystem access, and on failure the previously
    /// committed file is left intact.
    pub fn overwrite<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let yaml = serde_yaml::to_string(value).map_err(ConfError::Serialize)?;
        self.commit(yaml.as_bytes())
    }

    /// Replace the whole document with `text`, which must parse as a single
    /// YAML (or JSON) document. The committed bytes are the canonical YAML
    /// form of the parsed value.
    pub fn overwrite_raw(&self, text: &str) -> Result<()> {
        let document: Value = serde_yaml::from_str(text).map_err(|source| ConfError::Document {
            origin: "input".to_string(),
            source,
        })?;
        self.overwrite(&document)
    }

    fn commit(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_dir()?;

        let dir = self.dir_path();
        let path = self.path();
        let _lock = WriteLock::acquire(&self.lock_path())?;

        // Dropping an unpersisted NamedTempFile removes it
        let mut temp = Builder::new()
            .prefix(&format!(".{}.", self.file))
            .suffix(".tmp")
            .tempfile_in(&dir)
            .map_err(|e| ConfError::io(&dir, e))?;
        temp.write_all(bytes)
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| ConfError::io(temp.path(), e))?;
        restrict_file(temp.path()).map_err(|e| ConfError::io(temp.path(), e))?;
        temp.persist(&path)
            .map_err(|e| ConfError::io(&path, e.error))?;

        info!(
            id = %self.id,
            path = %path.display(),
            bytes = bytes.len(),
            "Committed configuration"
        );
        Ok(())
    }
}
