//! # nexo-store: Persistence Layer for Nexo POS
//!
//! This crate provides persistence for the Nexo POS system through a
//! string-keyed JSON blob store.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Nexo POS Data Flow                               │
//! │                                                                         │
//! │  Engine operation (settle_sale)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     nexo-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   BlobStore   │    │ JsonFileStore │    │ MemoryStore  │  │   │
//! │  │   │   (blob.rs)   │    │   (file.rs)   │    │ (memory.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ load/save/    │◄───│ <dir>/<key>   │    │ HashMap, for │  │   │
//! │  │   │ remove        │    │ .json files   │    │ tests/demos  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  One JSON blob per collection: products, sales, offices,               │
//! │  customers, expenses, session                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`blob`] - The `BlobStore` port and the well-known collection keys
//! - [`file`] - File-backed implementation
//! - [`memory`] - In-memory implementation
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use nexo_store::{keys, save_list, load_list, BlobStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! save_list(&store, keys::EXPENSES, &["rent"]).unwrap();
//!
//! let back: Vec<String> = load_list(&store, keys::EXPENSES).unwrap();
//! assert_eq!(back, vec!["rent".to_string()]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod blob;
pub mod error;
pub mod file;
pub mod memory;

// =============================================================================
// Re-exports
// =============================================================================

pub use blob::{keys, BlobStore};
pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

// =============================================================================
// Typed Collection Helpers
// =============================================================================

/// Loads a whole collection. An absent key decodes as the empty list, so
/// first-run state needs no seeding.
pub fn load_list<T: DeserializeOwned>(store: &dyn BlobStore, key: &str) -> StoreResult<Vec<T>> {
    match store.load(key)? {
        Some(blob) => serde_json::from_str(&blob).map_err(|e| StoreError::corrupt(key, e)),
        None => Ok(Vec::new()),
    }
}

/// Replaces a whole collection.
pub fn save_list<T: Serialize>(store: &dyn BlobStore, key: &str, items: &[T]) -> StoreResult<()> {
    let blob = serde_json::to_string(items).map_err(|e| StoreError::corrupt(key, e))?;
    store.save(key, &blob)
}

/// Loads a standalone record (the session blob). Absent key means absent
/// record, not an error.
pub fn load_record<T: DeserializeOwned>(
    store: &dyn BlobStore,
    key: &str,
) -> StoreResult<Option<T>> {
    match store.load(key)? {
        Some(blob) => serde_json::from_str(&blob)
            .map(Some)
            .map_err(|e| StoreError::corrupt(key, e)),
        None => Ok(None),
    }
}

/// Replaces a standalone record.
pub fn save_record<T: Serialize>(store: &dyn BlobStore, key: &str, value: &T) -> StoreResult<()> {
    let blob = serde_json::to_string(value).map_err(|e| StoreError::corrupt(key, e))?;
    store.save(key, &blob)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_list_defaults_to_empty() {
        let store = MemoryStore::new();
        let items: Vec<i64> = load_list(&store, keys::SALES).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_list_round_trip() {
        let store = MemoryStore::new();
        save_list(&store, keys::PRODUCTS, &[10_i64, 20]).unwrap();

        let back: Vec<i64> = load_list(&store, keys::PRODUCTS).unwrap();
        assert_eq!(back, vec![10, 20]);
    }

    #[test]
    fn test_corrupt_blob_is_a_typed_error() {
        let store = MemoryStore::new();
        store.save(keys::SALES, "{not json").unwrap();

        let result: StoreResult<Vec<i64>> = load_list(&store, keys::SALES);
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_record_round_trip_and_absence() {
        let store = MemoryStore::new();
        assert!(load_record::<String>(&store, keys::SESSION)
            .unwrap()
            .is_none());

        save_record(&store, keys::SESSION, &"rui".to_string()).unwrap();
        assert_eq!(
            load_record::<String>(&store, keys::SESSION).unwrap().as_deref(),
            Some("rui")
        );
    }
}
