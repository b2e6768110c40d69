//! # Customer Directory
//!
//! Identity records keyed by (phone, office). Spend and debt are never
//! stored; [`customer_profiles`](Engine::customer_profiles) derives them
//! from the sale ledger on every read.

use tracing::debug;
use uuid::Uuid;

use nexo_core::validation::{validate_name, validate_phone};
use nexo_core::{derive_profile, observes, Customer, CustomerProfile, ValidationError};

use crate::context::Engine;
use crate::error::EngineResult;

impl Engine {
    /// Creates the customer record for (phone, office) if absent.
    ///
    /// Returns whether a record was created. Idempotent: calling twice
    /// with the same pair produces exactly one record. Does not persist;
    /// the calling operation batches that with its own writes.
    pub(crate) fn ensure_customer(&mut self, name: &str, phone: &str, office: &str) -> bool {
        let exists = self
            .customers
            .iter()
            .any(|c| c.phone == phone && c.office_name == office);
        if exists {
            return false;
        }

        let customer = Customer {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_uppercase(),
            phone: phone.trim().to_string(),
            email: String::new(),
            office_name: office.to_string(),
        };

        debug!(customer_id = %customer.id, phone = %customer.phone, "customer created");
        self.customers.push(customer);
        true
    }

    /// Manually registers a customer.
    ///
    /// Unlike [`ensure_customer`](Engine::ensure_customer), an existing
    /// (phone, office) pair is a `Duplicate` validation error here: the
    /// operator asked for a new record and should know one already exists.
    pub fn create_customer(&mut self, name: &str, phone: &str, email: &str) -> EngineResult<Customer> {
        let office = self.require_actor()?.office_name.clone();

        validate_name("name", name)?;
        validate_phone(phone)?;

        let phone = phone.trim();
        if self
            .customers
            .iter()
            .any(|c| c.phone == phone && c.office_name == office)
        {
            return Err(ValidationError::Duplicate {
                field: "phone".to_string(),
                value: phone.to_string(),
            }
            .into());
        }

        let customer = Customer {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_uppercase(),
            phone: phone.to_string(),
            email: email.trim().to_string(),
            office_name: office,
        };

        self.customers.push(customer.clone());
        self.persist_customers();
        Ok(customer)
    }

    /// Removes a customer identity record. Sale history stays; profiles
    /// for the same phone simply stop being listed. Records outside the
    /// acting office are left alone.
    pub fn delete_customer(&mut self, id: &str) -> EngineResult<()> {
        let actor = self.require_actor()?.clone();
        let before = self.customers.len();
        self.customers
            .retain(|c| c.id != id || !observes(&actor, c));

        if self.customers.len() != before {
            debug!(customer_id = %id, "customer deleted");
            self.persist_customers();
        }
        Ok(())
    }

    /// Tenant-scoped customer list with derived spend/debt.
    pub fn customer_profiles(&self) -> EngineResult<Vec<CustomerProfile>> {
        Ok(self
            .customers()?
            .into_iter()
            .map(|c| derive_profile(c, &self.sales))
            .collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
