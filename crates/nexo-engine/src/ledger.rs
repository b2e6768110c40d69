//! # Installment Ledger Operations
//!
//! Persisted wrappers over the core schedule mutations. Missing sales or
//! installment numbers are silent no-ops; the ledger view simply refreshes
//! to current state. A sale outside the acting office is treated the same
//! as a missing one.

use tracing::debug;

use nexo_core::observes;

use crate::context::Engine;
use crate::error::EngineResult;

impl Engine {
    /// Marks installment `number` of `sale_id` as paid.
    ///
    /// Idempotent: already-paid installments and unknown ids change
    /// nothing. Remaining balance and payment status are recomputed.
    pub fn mark_installment_paid(&mut self, sale_id: &str, number: u32) -> EngineResult<()> {
        let actor = self.require_actor()?.clone();

        let changed = self
            .sales
            .iter_mut()
            .find(|s| s.id == sale_id && observes(&actor, &**s))
            .map(|sale| sale.mark_installment_paid(number))
            .unwrap_or(false);

        if changed {
            debug!(sale_id, number, "installment paid");
            self.persist_sales();
        }
        Ok(())
    }

    /// Deletes installment `number` of `sale_id`, voiding that share of
    /// the debt: the sale total drops by the deleted amount and the
    /// remaining numbers keep their gaps.
    pub fn delete_installment(&mut self, sale_id: &str, number: u32) -> EngineResult<()> {
        let actor = self.require_actor()?.clone();

        let removed = self
            .sales
            .iter_mut()
            .find(|s| s.id == sale_id && observes(&actor, &**s))
            .and_then(|sale| sale.delete_installment(number));

        if let Some(amount) = removed {
            debug!(sale_id, number, amount = %amount, "installment deleted");
            self.persist_sales();
        }
        Ok(())
    }

    /// Removes a sale and its schedule. Stock and customer aggregates are
    /// not reversed; aggregates are derived so they self-correct.
    pub fn delete_sale(&mut self, sale_id: &str) -> EngineResult<()> {
        let actor = self.require_actor()?.clone();

        let before = self.sales.len();
        self.sales
            .retain(|s| s.id != sale_id || !observes(&actor, s));

        if self.sales.len() != before {
            debug!(sale_id, "sale deleted");
            self.persist_sales();
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use nexo_core::{Cart, Money, PaymentMethod, PaymentStatus};
    use nexo_store::MemoryStore;

    use crate::config::EngineConfig;
    use crate::context::Engine;
    use crate::notify::NullNotifier;

    fn engine_with_credit_sale() -> (Engine, String) {
        let mut engine = Engine::open(
            Box::new(MemoryStore::new()),
            Box::new(NullNotifier),
            EngineConfig::default(),
        )
        .unwrap();
        engine.login("admin@nexo.app", "123").unwrap();

        let mut cart = Cart::new();
        cart.add_adhoc("LICENSE", Money::from_cents(30000)).unwrap();
        let sale = engine
            .settle_sale(&cart, "Ana", "119", PaymentMethod::Credit, 3)
            .unwrap();
        (engine, sale.id)
    }

    #[test]
    fn test_paying_all_installments_settles_the_sale() {
        let (mut engine, sale_id) = engine_with_credit_sale();

        for number in 1..=3 {
            engine.mark_installment_paid(&sale_id, number).unwrap();
        }

        let sale = &engine.sales[0];
        assert_eq!(sale.remaining_balance, Money::zero());
        assert_eq!(sale.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn test_deleting_pending_installment_reduces_total() {
        let (mut engine, sale_id) = engine_with_credit_sale();

        engine.delete_installment(&sale_id, 2).unwrap();

        let sale = &engine.sales[0];
        assert_eq!(sale.total.cents(), 20000);
        assert_eq!(sale.remaining_balance.cents(), 20000);
        assert_eq!(sale.installments.len(), 2);
        // Numbers keep their gap
        let numbers: Vec<u32> = sale.installments.iter().map(|i| i.number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_unknown_sale_and_number_are_noops() {
        let (mut engine, sale_id) = engine_with_credit_sale();

        engine.mark_installment_paid("ghost", 1).unwrap();
        engine.mark_installment_paid(&sale_id, 99).unwrap();
        engine.delete_installment("ghost", 1).unwrap();
        engine.delete_sale("ghost").unwrap();

        assert_eq!(engine.sales.len(), 1);
        assert_eq!(engine.sales[0].total.cents(), 30000);
    }

    #[test]
    fn test_delete_sale_removes_schedule_with_it() {
        let (mut engine, sale_id) = engine_with_credit_sale();
        engine.delete_sale(&sale_id).unwrap();
        assert!(engine.sales.is_empty());
    }
}
