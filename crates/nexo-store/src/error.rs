//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the key being touched                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  nexo-engine logs and continues ← Ledger state is already updated      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence errors.
///
/// Wraps I/O and serialization failures with the key that was being
/// read or written.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying file operation failed.
    ///
    /// ## When This Occurs
    /// - Data directory missing or unwritable
    /// - Disk full
    /// - Permission denied
    #[error("I/O failure on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored blob could not be decoded, or a value could not be
    /// encoded.
    ///
    /// ## When This Occurs
    /// - Blob edited by hand and no longer valid JSON
    /// - Blob written by an incompatible version
    #[error("Corrupt blob at key '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.into(),
            source,
        }
    }

    pub fn corrupt(key: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::Corrupt {
            key: key.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
