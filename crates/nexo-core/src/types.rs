//! # Domain Types
//!
//! Core domain types used throughout Nexo POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Product ──► SaleItem (snapshot) ──► Sale ──► Installment           │
//! │                                                                     │
//! │  Customer (identity only; spend/debt are DERIVED from sales)        │
//! │  OfficeUnit (tenant; referral parent via referrer_email)            │
//! │  Expense / Actor (session record)                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tenant Stamping
//! Every entity that a standard actor can read carries the owning office
//! name. The scoping predicate in [`crate::tenant`] is the single
//! enforcement point; these types just carry the field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product held in an office's inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name, stored uppercased.
    pub name: String,

    /// Unit price in cents.
    pub price: Money,

    /// Current stock level. Never negative: settlement debits clamp at 0.
    pub stock: i64,

    /// Optional free-form description.
    #[serde(default)]
    pub description: String,

    /// Category label, defaults to a general bucket.
    #[serde(default)]
    pub category: String,

    /// Tenant this product belongs to.
    pub office_name: String,
}

impl Product {
    /// Checks whether `quantity` more units can be sold on top of
    /// `already_in_cart` units.
    pub fn can_sell(&self, already_in_cart: i64, quantity: i64) -> bool {
        already_in_cart + quantity <= self.stock
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer identity record.
///
/// The (phone, office) pair is the natural key. Spend and debt are NOT
/// stored here; they are derived by folding over the sale ledger (see
/// [`crate::customer`]), so they can never drift out of sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    /// Stored uppercased.
    pub name: String,
    /// Natural key within the office.
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub office_name: String,
}

// =============================================================================
// Payment Enums
// =============================================================================

/// How a sale is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Paid in full at settlement time.
    Cash,
    /// Paid over a monthly installment schedule.
    Credit,
}

/// Settlement state of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Remaining balance is zero.
    Paid,
    /// Installments outstanding.
    Pending,
    /// Reserved for externally-recorded partial payments.
    Partial,
}

/// State of a single installment.
///
/// Pending → Paid is one-way; there is no "unpay" operation. Either state
/// may be removed entirely via installment deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstallmentStatus {
    Pending,
    Paid,
}

// =============================================================================
// Sale
// =============================================================================

/// One line of a sale.
///
/// Uses the snapshot pattern: name and unit price are frozen at settlement
/// time so sale history never depends on the product still existing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    /// Reference to the product, if the line came from inventory.
    /// Ad-hoc lines have no reference and never touch stock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    /// Name at time of sale (frozen).
    pub name: String,

    /// Quantity sold, always >= 1.
    pub quantity: i64,

    /// Unit price at time of sale (frozen).
    pub price: Money,
}

impl SaleItem {
    /// Line subtotal (unit price × quantity).
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// One scheduled partial payment within a credit sale.
///
/// Owned exclusively by its parent [`Sale`]; never exists independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    /// 1-based sequence number, contiguous at creation. Deletion leaves
    /// gaps; numbers are never reassigned.
    pub number: u32,
    pub amount: Money,
    pub due_date: DateTime<Utc>,
    pub status: InstallmentStatus,
}

impl Installment {
    #[inline]
    pub fn is_paid(&self) -> bool {
        self.status == InstallmentStatus::Paid
    }
}

/// A finalized sale.
///
/// Created atomically by the settlement engine; afterwards only the
/// installment ledger may mutate `total`, `installments`,
/// `remaining_balance` and `payment_status`. Everything else is history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub date: DateTime<Utc>,
    pub items: Vec<SaleItem>,
    /// Sum of line subtotals at creation; reduced only by installment
    /// deletion.
    pub total: Money,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    /// Customer snapshot at time of sale.
    pub customer_name: String,
    pub customer_phone: String,
    pub seller_name: String,
    /// Tenant that made the sale.
    pub seller_office: String,
    pub remaining_balance: Money,
    #[serde(default)]
    pub installments: Vec<Installment>,
}

impl Sale {
    /// Sum of amounts of installments already marked paid.
    pub fn paid_amount(&self) -> Money {
        self.installments
            .iter()
            .filter(|i| i.is_paid())
            .map(|i| i.amount)
            .sum()
    }
}

// =============================================================================
// Office
// =============================================================================

/// Billing standing of an office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfficeStatus {
    Normal,
    LatePayment,
    Blocked,
}

/// A tenant: an independent retail unit with isolated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeUnit {
    pub id: String,
    pub name: String,
    /// Login key, stored lowercased.
    pub owner_email: String,
    /// Owner email of the office that referred this one, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_email: Option<String>,
    pub active: bool,
    pub status: OfficeStatus,
    pub expiry_date: DateTime<Utc>,
    #[serde(default)]
    pub phone: String,
}

// =============================================================================
// Expense
// =============================================================================

/// An operating expense recorded by an office.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub date: DateTime<Utc>,
    pub office_name: String,
}

// =============================================================================
// Actor (session)
// =============================================================================

/// Authorization role of the session actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Oversees all offices; tenant filtering is the identity transform.
    SuperAdmin,
    /// Sees only its own office's data.
    OfficeAdmin,
}

/// The logged-in actor, persisted as the standalone session record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub office_name: String,
}

impl Actor {
    #[inline]
    pub fn is_super_admin(&self) -> bool {
        self.role == Role::SuperAdmin
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_sell_respects_cumulative_cart_quantity() {
        let product = Product {
            id: "p1".to_string(),
            name: "LICENSE".to_string(),
            price: Money::from_cents(5000),
            stock: 3,
            description: String::new(),
            category: String::new(),
            office_name: "Alpha".to_string(),
        };

        assert!(product.can_sell(0, 3));
        assert!(product.can_sell(2, 1));
        assert!(!product.can_sell(3, 1));
        assert!(!product.can_sell(0, 4));
    }

    #[test]
    fn test_sale_item_subtotal() {
        let item = SaleItem {
            product_id: None,
            name: "SETUP FEE".to_string(),
            quantity: 2,
            price: Money::from_cents(5000),
        };
        assert_eq!(item.subtotal().cents(), 10000);
    }

    #[test]
    fn test_enum_wire_format_matches_persisted_blobs() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Credit).unwrap(),
            "\"CREDIT\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        assert_eq!(
            serde_json::to_string(&OfficeStatus::LatePayment).unwrap(),
            "\"LATE_PAYMENT\""
        );
    }
}
