//! # The BlobStore Port
//!
//! Persistence contract the engine writes through.
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Collection-per-Key Layout                            │
//! │                                                                         │
//! │  "products"   ──► JSON array of Product                                │
//! │  "sales"      ──► JSON array of Sale                                   │
//! │  "offices"    ──► JSON array of OfficeUnit                             │
//! │  "customers"  ──► JSON array of Customer                               │
//! │  "expenses"   ──► JSON array of Expense                                │
//! │  "session"    ──► single Actor record (absent = logged out)            │
//! │                                                                         │
//! │  Saves REPLACE the whole blob. There is no partial update and no       │
//! │  cross-key transaction; the engine keeps writes ordered instead.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::StoreResult;

/// Well-known collection keys.
///
/// Every persisted collection lives under one of these. Nothing stops a
/// store from holding other keys, but the engine only touches these six.
pub mod keys {
    pub const PRODUCTS: &str = "products";
    pub const SALES: &str = "sales";
    pub const OFFICES: &str = "offices";
    pub const CUSTOMERS: &str = "customers";
    pub const EXPENSES: &str = "expenses";
    pub const SESSION: &str = "session";
}

/// A minimal string-keyed blob store.
///
/// Implementations must make `save` followed by `load` of the same key
/// return the saved blob, and `remove` of an absent key a no-op.
pub trait BlobStore {
    /// Loads the blob at `key`, or `None` if the key was never saved.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the blob at `key`.
    fn save(&self, key: &str, blob: &str) -> StoreResult<()>;

    /// Deletes the blob at `key`. Absent keys are not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

// Shared handles are stores too; callers that reopen over the same
// backing store keep one handle and clone it.
impl<T: BlobStore + ?Sized> BlobStore for std::rc::Rc<T> {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, blob: &str) -> StoreResult<()> {
        (**self).save(key, blob)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
