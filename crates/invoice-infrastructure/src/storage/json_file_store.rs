//! File-backed key/value store with atomic replacement.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a hidden temp file in
//! the same directory, are fsynced, then renamed over the target, so a
//! reader sees either the old value or the new one and never a torn write.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write as IoWrite};
use std::path::{Path, PathBuf};

use invoice_core::error::{InvoiceError, Result};
use invoice_core::storage::KeyValueStore;

/// A directory of JSON files, one per key.
///
/// Provides:
/// - **Atomicity**: Updates are all-or-nothing via tmp file + atomic rename
/// - **Isolation**: An exclusive lock file is held while writing
/// - **Durability**: Explicit fsync before rename
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn value_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(InvoiceError::storage_unavailable(
                key,
                "key must be non-empty and contain only [A-Za-z0-9_-]",
            ));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{key}.json.tmp"))
    }

    fn ensure_dir(&self, key: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| io_error(key, e))?;
        }
        Ok(())
    }
}

fn io_error(key: &str, err: std::io::Error) -> InvoiceError {
    InvoiceError::storage_unavailable(key, format!("{} (kind: {:?})", err, err.kind()))
}

impl KeyValueStore for JsonFileStore {
    /// Reads `<key>.json`.
    ///
    /// Bytes that are not valid UTF-8 are a content problem, not a storage
    /// one: they are replaced with U+FFFD so the caller's JSON decoding
    /// rejects the value as malformed.
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(key, e)),
        };

        match String::from_utf8(bytes) {
            Ok(content) => Ok(Some(content)),
            Err(e) => {
                tracing::warn!(key, error = %e.utf8_error(), "stored value is not valid UTF-8");
                Ok(Some(String::from_utf8_lossy(e.as_bytes()).into_owned()))
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key)?;
        self.ensure_dir(key)?;
        let _lock = FileLock::acquire(&path).map_err(|e| io_error(key, e))?;

        let tmp_path = self.temp_path(key);
        let write = || -> std::io::Result<()> {
            let mut tmp_file = File::create(&tmp_path)?;
            tmp_file.write_all(value.as_bytes())?;
            tmp_file.sync_all()?;
            drop(tmp_file);
            fs::rename(&tmp_path, &path)
        };

        if let Err(e) = write() {
            // best effort: do not leave a stale temp file behind
            let _ = fs::remove_file(&tmp_path);
            return Err(io_error(key, e));
        }

        tracing::debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.value_path(key)?;
        if !self.dir.exists() {
            return Ok(());
        }
        let _lock = FileLock::acquire(&path).map_err(|e| io_error(key, e))?;

        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(key, "removed value");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}

/// A file lock guard that releases the lock when dropped.
///
/// The lock file itself is left in place: unlinking it while another writer
/// waits on it would let a third writer lock a fresh inode.
struct FileLock {
    #[allow(dead_code)]
    file: File,
}

impl FileLock {
    /// Acquires an exclusive lock next to `path`.
    fn acquire(path: &Path) -> std::io::Result<Self> {
        let lock_path = path.with_extension("lock");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()?;
        }

        Ok(FileLock { file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        store.set("user", r#"{"username":"alice"}"#).unwrap();

        assert_eq!(
            store.get("user").unwrap().as_deref(),
            Some(r#"{"username":"alice"}"#)
        );
        assert!(temp_dir.path().join("user.json").exists());
    }

    #[test]
    fn test_get_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("not-yet-created"));

        assert_eq!(store.get("invoiceForm").unwrap(), None);
    }

    #[test]
    fn test_set_replaces_and_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        store.set("invoiceForm", "1").unwrap();
        store.set("invoiceForm", "2").unwrap();

        assert_eq!(store.get("invoiceForm").unwrap().as_deref(), Some("2"));
        assert!(!temp_dir.path().join(".invoiceForm.json.tmp").exists());
    }

    #[test]
    fn test_lock_file_is_kept_between_writes() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        store.set("invoiceForm", "1").unwrap();
        let lock_path = temp_dir.path().join("invoiceForm.lock");
        assert!(lock_path.exists());

        store.set("invoiceForm", "2").unwrap();
        store.remove("invoiceForm").unwrap();
        assert!(lock_path.exists());
        assert_eq!(store.get("invoiceForm").unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_returned_lossily() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("invoiceForm.json"), [0xff, 0xfe, b'{']).unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        let value = store.get("invoiceForm").unwrap().unwrap();
        assert_eq!(value, "\u{fffd}\u{fffd}{");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        store.set("user", "{}").unwrap();
        store.remove("user").unwrap();
        store.remove("user").unwrap();

        assert_eq!(store.get("user").unwrap(), None);
    }

    #[test]
    fn test_values_survive_a_new_handle() {
        let temp_dir = TempDir::new().unwrap();
        JsonFileStore::new(temp_dir.path())
            .set("user", "persisted")
            .unwrap();

        let reopened = JsonFileStore::new(temp_dir.path());
        assert_eq!(reopened.get("user").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        let err = store.set("../escape", "x").unwrap_err();
        assert!(err.is_storage_unavailable());
    }

    #[test]
    fn test_unreadable_location_is_storage_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the store directory should be.
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let store = JsonFileStore::new(&blocker);

        let err = store.set("user", "{}").unwrap_err();
        assert!(err.is_storage_unavailable());
    }
}
