//! # Cart
//!
//! The in-progress cart a seller builds before settlement.
//!
//! ## Invariants
//! - Lines referencing a product never exceed that product's stock; the
//!   cart is the ONLY oversell guard, settlement trusts it.
//! - Quantities are always >= 1; a decrement to zero removes the line.
//! - Ad-hoc lines (no product reference) are unconstrained by stock and
//!   never debit inventory at settlement.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, SaleItem};
use crate::validation::{validate_name, validate_price};

/// One line of the cart.
///
/// Product lines carry a frozen name/price snapshot so the cart displays
/// consistent data even if the product is edited afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub name: String,
    pub quantity: i64,
    pub price: Money,
}

impl CartLine {
    /// Line subtotal (unit price × quantity).
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// The seller's cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of a product, or increments its existing line.
    ///
    /// ## Oversell Guard
    /// Rejected with [`CoreError::InsufficientStock`] when the product is
    /// out of stock or the cumulative cart quantity would exceed it. The
    /// cart keeps its previous state on rejection.
    pub fn add_product(&mut self, product: &Product) -> CoreResult<()> {
        let in_cart = self.quantity_of(&product.id);

        if !product.can_sell(in_cart, 1) {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: in_cart + 1,
            });
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id.as_deref() == Some(product.id.as_str()))
        {
            line.quantity += 1;
            return Ok(());
        }

        self.lines.push(CartLine {
            product_id: Some(product.id.clone()),
            name: product.name.clone(),
            quantity: 1,
            price: product.price,
        });
        Ok(())
    }

    /// Adds a free-form line with no product reference.
    ///
    /// The name is uppercased, matching how inventory names are stored.
    pub fn add_adhoc(&mut self, name: &str, price: Money) -> CoreResult<()> {
        validate_name("item name", name)?;
        validate_price(price.cents())?;

        self.lines.push(CartLine {
            product_id: None,
            name: name.trim().to_uppercase(),
            quantity: 1,
            price,
        });
        Ok(())
    }

    /// Adjusts a line's quantity by `delta`.
    ///
    /// Increments on product lines are stock-guarded against the referenced
    /// product (looked up in `products`). A quantity falling to zero or
    /// below removes the line.
    pub fn change_quantity(
        &mut self,
        index: usize,
        delta: i64,
        products: &[Product],
    ) -> CoreResult<()> {
        let line = self
            .lines
            .get(index)
            .ok_or(CoreError::LineNotFound(index))?;

        if delta > 0 {
            if let Some(product_id) = line.product_id.as_deref() {
                if let Some(product) = products.iter().find(|p| p.id == product_id) {
                    if !product.can_sell(line.quantity, delta) {
                        return Err(CoreError::InsufficientStock {
                            name: product.name.clone(),
                            available: product.stock,
                            requested: line.quantity + delta,
                        });
                    }
                }
            }
        }

        let line = &mut self.lines[index];
        line.quantity += delta;
        if line.quantity <= 0 {
            self.lines.remove(index);
        }
        Ok(())
    }

    /// Total quantity of a given product across the cart.
    pub fn quantity_of(&self, product_id: &str) -> i64 {
        self.lines
            .iter()
            .filter(|l| l.product_id.as_deref() == Some(product_id))
            .map(|l| l.quantity)
            .sum()
    }

    /// Cart total (sum of line subtotals).
    pub fn total(&self) -> Money {
        self.lines.iter().map(|l| l.subtotal()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Converts cart lines into frozen sale items.
    pub(crate) fn to_sale_items(&self) -> Vec<SaleItem> {
        self.lines
            .iter()
            .map(|l| SaleItem {
                product_id: l.product_id.clone(),
                name: l.name.clone(),
                quantity: l.quantity,
                price: l.price,
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price_cents: i64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("PRODUCT {}", id),
            price: Money::from_cents(price_cents),
            stock,
            description: String::new(),
            category: "Geral".to_string(),
            office_name: "Alpha".to_string(),
        }
    }

    #[test]
    fn test_add_product_and_total() {
        let mut cart = Cart::new();
        let p = product("1", 5000, 10);

        cart.add_product(&p).unwrap();
        cart.add_product(&p).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of("1"), 2);
        assert_eq!(cart.total().cents(), 10000);
    }

    #[test]
    fn test_out_of_stock_product_rejected() {
        let mut cart = Cart::new();
        let p = product("1", 5000, 0);

        assert!(matches!(
            cart.add_product(&p),
            Err(CoreError::InsufficientStock { .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_second_unit_rejected_when_stock_is_one() {
        // Scenario: stock = 1, attempt to add 2 units
        let mut cart = Cart::new();
        let p = product("1", 5000, 1);

        cart.add_product(&p).unwrap();
        assert!(matches!(
            cart.add_product(&p),
            Err(CoreError::InsufficientStock { .. })
        ));

        // Cart retains quantity 1
        assert_eq!(cart.quantity_of("1"), 1);
    }

    #[test]
    fn test_change_quantity_guards_increment_against_stock() {
        let mut cart = Cart::new();
        let p = product("1", 5000, 2);
        let products = vec![p.clone()];

        cart.add_product(&p).unwrap();
        cart.change_quantity(0, 1, &products).unwrap();
        assert!(matches!(
            cart.change_quantity(0, 1, &products),
            Err(CoreError::InsufficientStock { .. })
        ));
        assert_eq!(cart.quantity_of("1"), 2);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let mut cart = Cart::new();
        let p = product("1", 5000, 5);
        let products = vec![p.clone()];

        cart.add_product(&p).unwrap();
        cart.change_quantity(0, -1, &products).unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_adhoc_line_ignores_stock_and_uppercases() {
        let mut cart = Cart::new();

        cart.add_adhoc("consulting hour", Money::from_cents(15000))
            .unwrap();

        assert_eq!(cart.lines()[0].name, "CONSULTING HOUR");
        assert!(cart.lines()[0].product_id.is_none());
        assert_eq!(cart.total().cents(), 15000);
    }

    #[test]
    fn test_adhoc_line_requires_name() {
        let mut cart = Cart::new();
        assert!(cart.add_adhoc("", Money::from_cents(100)).is_err());
    }

    #[test]
    fn test_change_quantity_unknown_index() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.change_quantity(3, 1, &[]),
            Err(CoreError::LineNotFound(3))
        ));
    }
}
