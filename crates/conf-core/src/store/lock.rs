//! Cross-process exclusive write lock.
//!
//! Uses an advisory `flock(LOCK_EX)` on the store's sidecar lock file, so
//! the lock is honored between unrelated processes as well as between
//! threads that open the file separately. The configuration file itself is
//! not locked: commits rename a fresh inode over it.
//!
//! The lock file is never removed. Unlinking it while another process waits
//! on the old inode would let two writers hold "the" lock at once.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfError;

/// Scoped exclusive lock; released when dropped.
///
/// Acquisition blocks without a timeout. Do not call
/// [`crate::ConfStore::overwrite`] while holding a lock on the same store
/// from the same thread: the second acquisition opens a new file
/// description and would wait forever.
#[derive(Debug)]
pub struct WriteLock {
    #[cfg(unix)]
    _file: nix::fcntl::Flock<File>,
    #[cfg(not(unix))]
    file: File,
    path: PathBuf,
}

impl WriteLock {
    /// Block until the exclusive lock on `path` is held, creating the lock
    /// file if necessary. The parent directory must exist.
    pub fn acquire(path: &Path) -> Result<Self, ConfError> {
        let lock_err = |source: std::io::Error| ConfError::Lock {
            path: path.to_path_buf(),
            source,
        };

        let mut options = OpenOptions::new();
        options.create(true).read(true).write(true).truncate(false);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(crate::paths::FILE_MODE);
        }
        let file = options.open(path).map_err(lock_err)?;

        debug!(path = %path.display(), "Waiting for write lock");

        #[cfg(unix)]
        let lock = {
            use nix::errno::Errno;
            use nix::fcntl::{Flock, FlockArg};

            let mut file = file;
            loop {
                match Flock::lock(file, FlockArg::LockExclusive) {
                    Ok(locked) => break Self {
                        _file: locked,
                        path: path.to_path_buf(),
                    },
                    // Interrupted by a signal before the lock was granted
                    Err((returned, Errno::EINTR)) => file = returned,
                    Err((_, errno)) => return Err(lock_err(errno.into())),
                }
            }
        };

        #[cfg(not(unix))]
        let lock = {
            file.lock().map_err(lock_err)?;
            Self {
                file,
                path: path.to_path_buf(),
            }
        };

        debug!(path = %path.display(), "Acquired write lock");
        Ok(lock)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for WriteLock {
    fn drop(&mut self) {
        // Unix: dropping the Flock unlocks it
        #[cfg(not(unix))]
        let _ = self.file.unlock();
        debug!(path = %self.path.display(), "Released write lock");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn lock_file_is_created_and_kept() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".config.yaml.lock");

        let lock = WriteLock::acquire(&path).unwrap();
        assert_eq!(lock.path(), path);
        drop(lock);
        assert!(path.exists());
    }

    #[test]
    fn second_holder_waits_for_release() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".config.yaml.lock");

        let first = WriteLock::acquire(&path).unwrap();
        let (tx, rx) = mpsc::channel();
        let contender_path = path.clone();
        let contender = thread::spawn(move || {
            let _second = WriteLock::acquire(&contender_path).unwrap();
            tx.send(()).unwrap();
        });

        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
        drop(first);
        assert!(rx.recv_timeout(Duration::from_secs(10)).is_ok());
        contender.join().unwrap();
    }

    #[test]
    fn missing_parent_is_a_lock_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("absent").join(".lock");
        assert!(matches!(
            WriteLock::acquire(&path),
            Err(ConfError::Lock { .. })
        ));
    }
}
