//! # Checkout
//!
//! Orchestrates a sale: core settlement plus its side effects, applied as
//! a unit from the caller's perspective.
//!
//! ## Settlement Side Effects
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  settle (pure, may refuse ── nothing mutated on refusal)            │
//! │       │                                                             │
//! │       ├── append sale to the ledger                                 │
//! │       ├── debit stock for every product-referencing line            │
//! │       ├── ensure the customer record exists for (phone, office)     │
//! │       ├── persist sales / products / customers                      │
//! │       └── fire the receipt notification (failure only logged)       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::info;

use nexo_core::{receipt_message, settle, Cart, PaymentMethod, Sale, SaleDraft};

use crate::context::Engine;
use crate::error::EngineResult;

impl Engine {
    /// Settles the cart into a finalized sale.
    ///
    /// Refusals (empty cart, missing phone, bad installment count) happen
    /// before any mutation.
    pub fn settle_sale(
        &mut self,
        cart: &Cart,
        customer_name: &str,
        customer_phone: &str,
        payment_method: PaymentMethod,
        installment_count: u32,
    ) -> EngineResult<Sale> {
        let actor = self.require_actor()?.clone();

        let draft = SaleDraft {
            cart,
            customer_name,
            customer_phone,
            payment_method,
            installment_count,
            seller_name: &actor.name,
            seller_office: &actor.office_name,
        };
        let sale = settle(&draft, Utc::now())?;

        info!(
            sale_id = %sale.id,
            total = %sale.total,
            method = ?sale.payment_method,
            office = %sale.seller_office,
            "sale settled"
        );

        for item in &sale.items {
            if let Some(product_id) = item.product_id.clone() {
                self.debit_stock(&product_id, item.quantity);
            }
        }

        let created_customer =
            self.ensure_customer(&sale.customer_name, &sale.customer_phone, &sale.seller_office);

        self.sales.push(sale.clone());

        self.persist_sales();
        self.persist_products();
        if created_customer {
            self.persist_customers();
        }

        self.notify(&receipt_message(&sale));

        Ok(sale)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use nexo_core::Money;
    use nexo_store::MemoryStore;

    use super::*;
    use crate::config::EngineConfig;
    use crate::notify::NullNotifier;

    fn logged_in_engine() -> Engine {
        let mut engine = Engine::open(
            Box::new(MemoryStore::new()),
            Box::new(NullNotifier),
            EngineConfig::default(),
        )
        .unwrap();
        engine.login("admin@nexo.app", "123").unwrap();
        engine
    }

    #[test]
    fn test_settlement_debits_stock_and_creates_customer() {
        let mut engine = logged_in_engine();
        let product = engine
            .create_product("License", Money::from_cents(5000), 5, "", "")
            .unwrap();

        let mut cart = Cart::new();
        cart.add_product(&product).unwrap();
        cart.change_quantity(0, 1, &[product.clone()]).unwrap();

        let sale = engine
            .settle_sale(&cart, "Ana", "11999999999", PaymentMethod::Cash, 1)
            .unwrap();

        assert_eq!(sale.total.cents(), 10000);
        assert_eq!(engine.products[0].stock, 3);
        assert_eq!(engine.customers.len(), 1);
        assert_eq!(engine.sales.len(), 1);
    }

    #[test]
    fn test_refused_settlement_mutates_nothing() {
        let mut engine = logged_in_engine();
        let cart = Cart::new();

        assert!(engine
            .settle_sale(&cart, "Ana", "11999999999", PaymentMethod::Cash, 1)
            .is_err());
        assert!(engine.sales.is_empty());
        assert!(engine.customers.is_empty());
    }

    #[test]
    fn test_over_debit_clamps_at_zero() {
        let mut engine = logged_in_engine();
        let product = engine
            .create_product("License", Money::from_cents(5000), 1, "", "")
            .unwrap();

        // Two concurrent carts both saw stock 1; the second settlement
        // still clamps instead of going negative.
        let mut cart = Cart::new();
        cart.add_product(&product).unwrap();

        engine
            .settle_sale(&cart, "Ana", "119", PaymentMethod::Cash, 1)
            .unwrap();
        engine
            .settle_sale(&cart, "Bia", "118", PaymentMethod::Cash, 1)
            .unwrap();

        assert_eq!(engine.products[0].stock, 0);
    }
}
