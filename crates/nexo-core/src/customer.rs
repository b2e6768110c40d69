//! # Customer Aggregates
//!
//! Derived spend/debt for customer records.
//!
//! Spend and debt are NEVER persisted as independent truth: they are
//! recomputed from scratch as a fold over the sale ledger on every read,
//! so they cannot drift when sales or installments change underneath.
//! Callers may cache a [`CustomerProfile`] per render pass, nothing more.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Customer, Sale};

/// A customer record with its derived aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    #[serde(flatten)]
    pub customer: Customer,
    /// Sum of sale totals for this (phone, office) pair.
    pub total_spent: Money,
    /// Sum of remaining balances for this (phone, office) pair.
    pub debt: Money,
}

/// Folds the sale ledger into a customer's profile.
///
/// A sale counts when BOTH its phone and office match: the same phone in
/// another office is a different customer.
pub fn derive_profile(customer: &Customer, sales: &[Sale]) -> CustomerProfile {
    let mut total_spent = Money::zero();
    let mut debt = Money::zero();

    for sale in sales {
        if sale.customer_phone == customer.phone && sale.seller_office == customer.office_name {
            total_spent += sale.total;
            debt += sale.remaining_balance;
        }
    }

    CustomerProfile {
        customer: customer.clone(),
        total_spent,
        debt,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::{PaymentMethod, PaymentStatus};

    fn customer(phone: &str, office: &str) -> Customer {
        Customer {
            id: "c1".to_string(),
            name: "ANA".to_string(),
            phone: phone.to_string(),
            email: String::new(),
            office_name: office.to_string(),
        }
    }

    fn sale(phone: &str, office: &str, total: i64, remaining: i64) -> Sale {
        Sale {
            id: "s".to_string(),
            date: Utc::now(),
            items: Vec::new(),
            total: Money::from_cents(total),
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Paid,
            customer_name: "ANA".to_string(),
            customer_phone: phone.to_string(),
            seller_name: "Rui".to_string(),
            seller_office: office.to_string(),
            remaining_balance: Money::from_cents(remaining),
            installments: Vec::new(),
        }
    }

    #[test]
    fn test_profile_folds_matching_sales() {
        // Scenario: totals 100.00 and 50.00, remaining 0 and 50.00
        let c = customer("119", "Alpha");
        let sales = vec![sale("119", "Alpha", 10000, 0), sale("119", "Alpha", 5000, 5000)];

        let profile = derive_profile(&c, &sales);
        assert_eq!(profile.total_spent.cents(), 15000);
        assert_eq!(profile.debt.cents(), 5000);
    }

    #[test]
    fn test_profile_ignores_other_phones_and_offices() {
        let c = customer("119", "Alpha");
        let sales = vec![
            sale("119", "Alpha", 10000, 0),
            sale("118", "Alpha", 7000, 7000),
            sale("119", "Beta", 9000, 9000),
        ];

        let profile = derive_profile(&c, &sales);
        assert_eq!(profile.total_spent.cents(), 10000);
        assert_eq!(profile.debt, Money::zero());
    }

    #[test]
    fn test_profile_with_no_sales_is_zeroed() {
        let profile = derive_profile(&customer("119", "Alpha"), &[]);
        assert_eq!(profile.total_spent, Money::zero());
        assert_eq!(profile.debt, Money::zero());
    }
}
