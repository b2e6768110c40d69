//! # nexo-core: Pure Business Logic for Nexo POS
//!
//! This crate is the **heart** of Nexo POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Nexo POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Operator Surface                             │   │
//! │  │    Cart UI ──► Checkout ──► Ledger ──► Admin / Reports         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    nexo-engine (Orchestration)                  │   │
//! │  │    session, settle_sale, mark_installment_paid, etc.           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ nexo-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │settlement │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ schedule  │  │   │
//! │  │   │   Sale    │  │   split   │  │ CartLine  │  │  tenant   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORE • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    nexo-store (Persistence Layer)               │   │
//! │  │              JSON blob store behind the BlobStore port          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, OfficeUnit, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Stock-guarded cart assembly
//! - [`settlement`] - Atomic cart-to-sale settlement
//! - [`schedule`] - Installment ledger mutations
//! - [`tenant`] - The office-isolation predicate
//! - [`customer`] - Derived customer aggregates
//! - [`referral`] - Office referral forest with cycle detection
//! - [`intent`] - Voice command payload decoding
//! - [`report`] - Notification payload builders
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Store, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use nexo_core::money::Money;
//!
//! // Create money from cents (never from floats!)
//! let total = Money::from_cents(10000); // R$ 100.00
//!
//! // Split across 3 installments: remainder lands on the last part
//! let parts = total.split(3);
//! assert_eq!(parts.iter().map(|p| p.cents()).collect::<Vec<_>>(),
//!            vec![3333, 3333, 3334]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod customer;
pub mod error;
pub mod intent;
pub mod money;
pub mod referral;
pub mod report;
pub mod schedule;
pub mod settlement;
pub mod tenant;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use nexo_core::Money` instead of
// `use nexo_core::money::Money`

pub use cart::{Cart, CartLine};
pub use customer::{derive_profile, CustomerProfile};
pub use error::{CoreError, CoreResult, ValidationError};
pub use intent::{decode_intent, IntentKind, ParsedIntent};
pub use money::Money;
pub use referral::{build_referral_forest, ReferralForest, ReferralNode};
pub use report::{executive_report, receipt_message, Notification};
pub use settlement::{settle, SaleDraft};
pub use tenant::{observes, scope, Scoped};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a display name (product, customer, office)
///
/// ## Business Reason
/// Prevents runaway free-form input from bloating the persisted blobs.
pub const MAX_NAME_LEN: usize = 200;

/// Placeholder used when a sale or intent arrives without a customer name.
///
/// Walk-in counter sales are common; the ledger still needs a printable
/// name on the receipt.
pub const DEFAULT_CUSTOMER_NAME: &str = "CASUAL CUSTOMER";

/// Placeholder category for expenses recorded without one.
pub const DEFAULT_CATEGORY: &str = "general";

/// Trial period granted to a newly self-registered office, in days.
pub const OFFICE_TRIAL_DAYS: i64 = 30;
