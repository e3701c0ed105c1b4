//! Single-instance enforcement.
//!
//! The lock file is created exclusively and holds the owner's PID, so a
//! second instance fails at startup instead of racing the first. The file
//! is removed when the lock is dropped.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::engine::error::EngineError;

#[derive(Debug)]
pub struct InstanceLock {
    path: PathBuf,
}

impl InstanceLock {
    pub fn acquire(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref().to_path_buf();
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Err(EngineError::AlreadyRunning(path));
            }
            Err(err) => return Err(EngineError::Io(err)),
        };
        writeln!(file, "{}", std::process::id())?;
        debug!(path = %path.display(), "instance lock acquired");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), %err, "failed to remove instance lock");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lock_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("arpvakt-lock-{tag}-{}.pid", std::process::id()))
    }

    #[test]
    fn second_acquire_is_rejected_while_held() {
        let path = lock_path("exclusive");
        let _ = std::fs::remove_file(&path);

        let lock = InstanceLock::acquire(&path).unwrap();
        assert!(matches!(
            InstanceLock::acquire(&path),
            Err(EngineError::AlreadyRunning(_))
        ));
        drop(lock);

        // Released on drop: a new instance may start.
        let relock = InstanceLock::acquire(&path).unwrap();
        drop(relock);
        assert!(!path.exists());
    }

    #[test]
    fn lock_file_records_the_pid() {
        let path = lock_path("pid");
        let _ = std::fs::remove_file(&path);

        let lock = InstanceLock::acquire(&path).unwrap();
        let contents = std::fs::read_to_string(lock.path()).unwrap();
        assert_eq!(contents.trim(), std::process::id().to_string());
        drop(lock);
    }
}
