//! # nexo-engine: Orchestration Layer for Nexo POS
//!
//! This crate wires the pure core ([`nexo_core`]) to persistence
//! ([`nexo_store`]) and notification delivery. Every operator-facing
//! operation is a method on [`Engine`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Nexo POS Architecture                            │
//! │                                                                         │
//! │  Operator surface (UI, CLI, whatever hosts the engine)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  nexo-engine (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   session ── checkout ── ledger ── inventory ── customers      │   │
//! │  │   offices ── expenses ── voice                                  │   │
//! │  │                                                                 │   │
//! │  │   Engine { collections, actor, store, notifier, config }       │   │
//! │  └───────────┬─────────────────────────────────┬───────────────────┘   │
//! │              │                                 │                        │
//! │              ▼                                 ▼                        │
//! │        nexo-core (pure logic)          nexo-store (blobs)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`context`] - The `Engine` struct: state, lifecycle, scoped reads
//! - [`session`] - Login/logout
//! - [`checkout`] - Sale settlement orchestration
//! - [`ledger`] - Installment ledger operations
//! - [`inventory`] - Product management and stock debits
//! - [`customers`] - Customer directory and derived profiles
//! - [`offices`] - Tenant administration and the referral forest
//! - [`expenses`] - Operating costs and the executive report
//! - [`voice`] - Voice intent dispatch
//! - [`notify`] - The `Notifier` port
//! - [`config`] - Engine configuration
//! - [`error`] - Engine error types
//!
//! ## Usage
//!
//! ```rust
//! use nexo_core::{Cart, Money, PaymentMethod};
//! use nexo_engine::{Engine, EngineConfig, NullNotifier};
//! use nexo_store::MemoryStore;
//!
//! let mut engine = Engine::open(
//!     Box::new(MemoryStore::new()),
//!     Box::new(NullNotifier),
//!     EngineConfig::default(),
//! )?;
//!
//! engine.login("admin@nexo.app", "123")?;
//! let product = engine.create_product("License", Money::from_cents(5000), 10, "", "")?;
//!
//! let mut cart = Cart::new();
//! cart.add_product(&product)?;
//! let sale = engine.settle_sale(&cart, "Ana", "11999999999", PaymentMethod::Cash, 1)?;
//! assert_eq!(sale.total.cents(), 5000);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod config;
pub mod context;
pub mod customers;
pub mod error;
pub mod expenses;
pub mod inventory;
pub mod ledger;
pub mod notify;
pub mod offices;
pub mod session;
pub mod voice;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::EngineConfig;
pub use context::Engine;
pub use error::{EngineError, EngineResult, ErrorCode};
pub use notify::{Notifier, NotifyError, NullNotifier, RecordingNotifier};
pub use voice::IntentOutcome;
