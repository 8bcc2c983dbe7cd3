//! Scratch storage for spooled uploads.
//!
//! Uploaded bytes are written to a uniquely named file so the conversion
//! backends can read them by path. The handle removes the file on drop, so
//! cleanup holds on every exit path; `release` can also be called explicitly
//! and is safe to call more than once.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Factory for scratch files.
#[derive(Clone, Debug)]
pub struct ScratchStore {
    dir: Option<PathBuf>,
}

impl ScratchStore {
    /// Use `dir` for scratch files, or the OS temp dir when `None`.
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    /// Write `bytes` to a uniquely named file and return its handle.
    ///
    /// Naming comes from `tempfile`'s randomized names, so concurrent
    /// acquisitions never collide on a path.
    pub fn acquire(&self, bytes: &[u8], suffix: &str) -> std::io::Result<ScratchFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("pagemill-").suffix(suffix);

        let mut file = match &self.dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.as_file_mut().write_all(bytes)?;
        file.as_file_mut().flush()?;

        let path = file.path().to_path_buf();
        Ok(ScratchFile {
            path,
            inner: Some(file),
        })
    }
}

/// A spooled file that is deleted exactly once, no matter how the conversion
/// that owns it ends.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
    inner: Option<NamedTempFile>,
}

impl ScratchFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the underlying file. Idempotent: later calls (including the
    /// one from `Drop`) are no-ops, and a file that is already gone only
    /// produces a warning.
    pub fn release(&mut self) {
        if let Some(file) = self.inner.take() {
            if let Err(err) = file.close() {
                tracing::warn!(
                    path = %self.path.display(),
                    "failed to remove scratch file: {err}"
                );
            }
        }
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_writes_bytes() {
        let store = ScratchStore::new(None);
        let file = store.acquire(b"hello", ".pdf").unwrap();
        assert_eq!(std::fs::read(file.path()).unwrap(), b"hello");
    }

    #[test]
    fn release_removes_file_and_is_idempotent() {
        let store = ScratchStore::new(None);
        let mut file = store.acquire(b"x", ".pdf").unwrap();
        let path = file.path().to_path_buf();
        assert!(path.exists());

        file.release();
        assert!(!path.exists());

        // Must not panic or recreate anything
        file.release();
        assert!(!path.exists());
    }

    #[test]
    fn drop_removes_file() {
        let store = ScratchStore::new(None);
        let path = {
            let file = store.acquire(b"x", ".pdf").unwrap();
            file.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn release_after_external_removal_does_not_panic() {
        let store = ScratchStore::new(None);
        let mut file = store.acquire(b"x", ".pdf").unwrap();
        std::fs::remove_file(file.path()).unwrap();
        file.release();
    }

    #[test]
    fn concurrent_acquisitions_get_distinct_paths() {
        let store = ScratchStore::new(None);
        let a = store.acquire(b"a", ".pdf").unwrap();
        let b = store.acquire(b"b", ".pdf").unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn acquire_respects_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScratchStore::new(Some(dir.path().to_path_buf()));
        let file = store.acquire(b"x", ".pdf").unwrap();
        assert_eq!(file.path().parent().unwrap(), dir.path());
    }
}
