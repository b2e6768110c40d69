//! # Inventory Ledger
//!
//! Product creation, deletion and the internal stock debit used by
//! checkout. Stock never goes negative: the debit clamps at zero and an
//! over-debit just means the product reads as sold out.

use tracing::debug;
use uuid::Uuid;

use nexo_core::validation::{validate_name, validate_price, validate_stock};
use nexo_core::{observes, Money, Product};

use crate::context::Engine;
use crate::error::EngineResult;

impl Engine {
    /// Creates a product in the acting office's inventory.
    pub fn create_product(
        &mut self,
        name: &str,
        price: Money,
        stock: i64,
        description: &str,
        category: &str,
    ) -> EngineResult<Product> {
        let office = self.require_actor()?.office_name.clone();

        validate_name("name", name)?;
        validate_price(price.cents())?;
        validate_stock(stock)?;

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_uppercase(),
            price,
            stock,
            description: description.trim().to_string(),
            category: category.trim().to_string(),
            office_name: office,
        };

        debug!(product_id = %product.id, name = %product.name, "product created");

        self.products.push(product.clone());
        self.persist_products();
        Ok(product)
    }

    /// Removes a product. Absent ids, and products outside the acting
    /// office, are a silent no-op; sale history is untouched because sale
    /// lines carry their own snapshot.
    pub fn delete_product(&mut self, id: &str) -> EngineResult<()> {
        let actor = self.require_actor()?.clone();
        let before = self.products.len();
        self.products
            .retain(|p| p.id != id || !observes(&actor, p));

        if self.products.len() != before {
            debug!(product_id = %id, "product deleted");
            self.persist_products();
        }
        Ok(())
    }

    /// Debits sold stock, clamping at zero.
    pub(crate) fn debit_stock(&mut self, product_id: &str, quantity: i64) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == product_id) {
            product.stock = (product.stock - quantity).max(0);
            debug!(product_id, stock = product.stock, "stock debited");
        }
    }
}
