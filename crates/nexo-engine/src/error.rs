//! # Engine Error Types
//!
//! Errors for operator-facing operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError / ValidationError / StoreError                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  EngineError (this module) ← Stable code + printable message           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Operator surface matches on the code, displays the message            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use nexo_core::{CoreError, ValidationError};
use nexo_store::StoreError;

/// Stable error categories the operator surface can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Credentials rejected, or the office is inactive/blocked.
    AuthDenied,
    /// Operation requires a session, or a role the actor lacks.
    Unauthorized,
    /// Input failed a business rule before any mutation.
    ValidationFailed,
    /// Cart quantity exceeds available stock.
    InsufficientStock,
    /// Settlement refused an empty cart.
    EmptyCart,
    /// The store failed while loading state.
    StorageFailed,
}

/// An engine operation failure.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct EngineError {
    pub code: ErrorCode,
    pub message: String,
}

impl EngineError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        EngineError {
            code,
            message: message.into(),
        }
    }

    pub fn auth_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthDenied, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }
}

impl From<CoreError> for EngineError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::EmptyCart => ErrorCode::EmptyCart,
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CoreError::MissingPhone
            | CoreError::LineNotFound(_)
            | CoreError::Validation(_) => ErrorCode::ValidationFailed,
        };
        EngineError::new(code, err.to_string())
    }
}

impl From<ValidationError> for EngineError {
    fn from(err: ValidationError) -> Self {
        EngineError::new(ErrorCode::ValidationFailed, err.to_string())
    }
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        EngineError::new(ErrorCode::StorageFailed, err.to_string())
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_stable_codes() {
        let err: EngineError = CoreError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::EmptyCart);

        let err: EngineError = CoreError::InsufficientStock {
            name: "LICENSE".to_string(),
            available: 1,
            requested: 2,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InsufficientStock);

        let err: EngineError = CoreError::MissingPhone.into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_code_wire_format() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::InsufficientStock).unwrap(),
            "\"INSUFFICIENT_STOCK\""
        );
    }
}
