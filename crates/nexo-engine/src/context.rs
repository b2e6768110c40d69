//! # Engine Context
//!
//! The application context: the five collections, the session actor, the
//! injected store and notifier.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Load / Mutate / Persist                             │
//! │                                                                         │
//! │  Engine::open ──► load all collections + session from the store        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  operation (&mut self) ──► validate ──► mutate in memory               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  persist touched collections (failure logged, state stays committed)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single logical writer: every mutation takes `&mut self`, there is no
//! async runtime and no locking. Reads all pass through the tenant filter.

use tracing::{info, warn};

use nexo_core::{scope, Actor, Customer, Expense, OfficeUnit, Product, Sale, Scoped};
use nexo_store::{keys, load_list, load_record, save_list, BlobStore, JsonFileStore};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::notify::{Notifier, NullNotifier};

/// The Nexo POS engine.
///
/// Owns all application state. Construct with [`Engine::open`] (injected
/// store and notifier) or [`Engine::open_at`] (file store from config).
pub struct Engine {
    pub(crate) store: Box<dyn BlobStore>,
    pub(crate) notifier: Box<dyn Notifier>,
    pub(crate) config: EngineConfig,

    pub(crate) products: Vec<Product>,
    pub(crate) sales: Vec<Sale>,
    pub(crate) offices: Vec<OfficeUnit>,
    pub(crate) customers: Vec<Customer>,
    pub(crate) expenses: Vec<Expense>,
    pub(crate) actor: Option<Actor>,
}

impl Engine {
    /// Opens the engine over an injected store and notifier, loading all
    /// collections and the persisted session.
    ///
    /// A corrupt or unreadable blob fails the open; missing blobs load as
    /// empty collections (first run).
    pub fn open(
        store: Box<dyn BlobStore>,
        notifier: Box<dyn Notifier>,
        config: EngineConfig,
    ) -> EngineResult<Self> {
        let products = load_list(store.as_ref(), keys::PRODUCTS)?;
        let sales = load_list(store.as_ref(), keys::SALES)?;
        let offices = load_list(store.as_ref(), keys::OFFICES)?;
        let customers = load_list(store.as_ref(), keys::CUSTOMERS)?;
        let expenses = load_list(store.as_ref(), keys::EXPENSES)?;
        let actor = load_record(store.as_ref(), keys::SESSION)?;

        let engine = Engine {
            store,
            notifier,
            config,
            products,
            sales,
            offices,
            customers,
            expenses,
            actor,
        };

        info!(
            products = engine.products.len(),
            sales = engine.sales.len(),
            offices = engine.offices.len(),
            session = engine.actor.is_some(),
            "engine opened"
        );

        Ok(engine)
    }

    /// Opens the engine over a file store at `config.data_dir` with no
    /// delivery transport.
    pub fn open_at(config: EngineConfig) -> EngineResult<Self> {
        let store = JsonFileStore::open(&config.data_dir)?;
        Engine::open(Box::new(store), Box::new(NullNotifier), config)
    }

    // =========================================================================
    // Session accessors
    // =========================================================================

    /// The logged-in actor, if any.
    pub fn actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }

    /// The actor, or `Unauthorized` when nobody is logged in.
    pub(crate) fn require_actor(&self) -> EngineResult<&Actor> {
        self.actor
            .as_ref()
            .ok_or_else(|| EngineError::unauthorized("no active session"))
    }

    /// The actor, required to be the super admin.
    pub(crate) fn require_super_admin(&self) -> EngineResult<&Actor> {
        let actor = self.require_actor()?;
        if !actor.is_super_admin() {
            return Err(EngineError::unauthorized("super admin only"));
        }
        Ok(actor)
    }

    // =========================================================================
    // Scoped reads
    // =========================================================================
    // These are the only list read paths; everything goes through the
    // tenant filter.

    pub fn products(&self) -> EngineResult<Vec<&Product>> {
        self.scoped(&self.products)
    }

    pub fn sales(&self) -> EngineResult<Vec<&Sale>> {
        self.scoped(&self.sales)
    }

    pub fn customers(&self) -> EngineResult<Vec<&Customer>> {
        self.scoped(&self.customers)
    }

    pub fn expenses(&self) -> EngineResult<Vec<&Expense>> {
        self.scoped(&self.expenses)
    }

    /// Office directory. Not office-stamped, so this is admin-only.
    pub fn offices(&self) -> EngineResult<&[OfficeUnit]> {
        self.require_super_admin()?;
        Ok(&self.offices)
    }

    fn scoped<'a, T: Scoped>(&'a self, items: &'a [T]) -> EngineResult<Vec<&'a T>> {
        let actor = self.require_actor()?;
        Ok(scope(actor, items).collect())
    }

    // =========================================================================
    // Write-through persistence
    // =========================================================================
    // In-memory state is the truth; a failed save is logged and the
    // caller may retry by mutating again. Nothing rolls back.

    pub(crate) fn persist_products(&self) {
        self.persist(keys::PRODUCTS, &self.products);
    }

    pub(crate) fn persist_sales(&self) {
        self.persist(keys::SALES, &self.sales);
    }

    pub(crate) fn persist_offices(&self) {
        self.persist(keys::OFFICES, &self.offices);
    }

    pub(crate) fn persist_customers(&self) {
        self.persist(keys::CUSTOMERS, &self.customers);
    }

    pub(crate) fn persist_expenses(&self) {
        self.persist(keys::EXPENSES, &self.expenses);
    }

    fn persist<T: serde::Serialize>(&self, key: &str, items: &[T]) {
        if let Err(e) = save_list(self.store.as_ref(), key, items) {
            warn!(key, error = %e, "collection save failed; in-memory state kept");
        }
    }

    /// Hands a payload to the notifier. Fire-and-forget.
    pub(crate) fn notify(&self, notification: &nexo_core::Notification) {
        if let Err(e) = self.notifier.deliver(notification) {
            warn!(phone = %notification.phone, error = %e, "notification dropped");
        }
    }
}
