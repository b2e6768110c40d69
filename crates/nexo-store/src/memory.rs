//! # In-Memory Store
//!
//! [`MemoryStore`] backs the same port with a plain map. Used by tests and
//! by demo sessions that should leave no files behind.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::blob::BlobStore;
use crate::error::StoreResult;

/// Blob store holding everything in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held. Test helper.
    pub fn len(&self) -> usize {
        self.blobs.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.borrow().is_empty()
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> StoreResult<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
