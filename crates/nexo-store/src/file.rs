//! # File-Backed Store
//!
//! [`JsonFileStore`] maps each key to `<dir>/<key>.json`.
//!
//! Writes go through a sibling temp file and a rename, so a crash mid-write
//! leaves the previous blob intact rather than a truncated one.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::blob::BlobStore;
use crate::error::{StoreError, StoreResult};

/// Blob store persisting each key as a JSON file in one directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(dir.to_string_lossy(), e))?;

        debug!(dir = %dir.display(), "opened file store");
        Ok(JsonFileStore { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for JsonFileStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn save(&self, key: &str, blob: &str) -> StoreResult<()> {
        let path = self.path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));

        fs::write(&tmp, blob).map_err(|e| StoreError::io(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(key, e))?;

        debug!(key, bytes = blob.len(), "saved blob");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        assert!(store.load("products").unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        store.save("products", r#"[{"id":"p1"}]"#).unwrap();
        assert_eq!(
            store.load("products").unwrap().as_deref(),
            Some(r#"[{"id":"p1"}]"#)
        );
    }

    #[test]
    fn test_save_replaces_previous_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        store.save("session", "\"a\"").unwrap();
        store.save("session", "\"b\"").unwrap();
        assert_eq!(store.load("session").unwrap().as_deref(), Some("\"b\""));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        store.save("session", "{}").unwrap();
        store.remove("session").unwrap();
        store.remove("session").unwrap();
        assert!(store.load("session").unwrap().is_none());
    }

    #[test]
    fn test_reopen_sees_existing_blobs() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = JsonFileStore::open(dir.path()).unwrap();
            store.save("sales", "[]").unwrap();
        }

        let reopened = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.load("sales").unwrap().as_deref(), Some("[]"));
    }
}
