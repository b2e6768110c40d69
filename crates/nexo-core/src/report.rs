//! # Notification Payloads
//!
//! Builds the outbound message payloads the engine hands to the notifier.
//!
//! The core only constructs payloads; delivery (chat links, SMS gateways)
//! is the notifier port's problem and may fail without affecting ledger
//! state.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::money::Money;
use crate::types::{Expense, PaymentMethod, Sale};
use crate::validation::clean_phone;

/// A preformatted message plus its target phone (digits only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub phone: String,
    pub message: String,
}

/// Digital receipt summarizing a settled sale.
pub fn receipt_message(sale: &Sale) -> Notification {
    let mut message = String::new();
    let _ = writeln!(message, "DIGITAL RECEIPT");
    let _ = writeln!(message, "Receipt: {}", sale.id);
    let _ = writeln!(message, "Issuer: {}", sale.seller_office);
    let _ = writeln!(message, "Customer: {}", sale.customer_name);
    let _ = writeln!(message, "Items:");
    for item in &sale.items {
        let _ = writeln!(
            message,
            "- {} (x{}) {}",
            item.name,
            item.quantity,
            item.subtotal()
        );
    }
    let _ = writeln!(message, "Total: {}", sale.total);
    let terms = match sale.payment_method {
        PaymentMethod::Cash => "Payment: CASH, settled".to_string(),
        PaymentMethod::Credit => {
            format!("Payment: CREDIT ({}x monthly)", sale.installments.len())
        }
    };
    let _ = write!(message, "{}", terms);

    Notification {
        phone: clean_phone(&sale.customer_phone),
        message,
    }
}

/// Executive summary for an office: revenue, costs, open balance, net.
pub fn executive_report(
    office: &str,
    sales: &[&Sale],
    expenses: &[&Expense],
    target_phone: &str,
) -> Notification {
    let revenue: Money = sales.iter().map(|s| s.total).sum();
    let costs: Money = expenses.iter().map(|e| e.amount).sum();
    let open: Money = sales.iter().map(|s| s.remaining_balance).sum();
    let net = revenue - costs - open;

    let mut message = String::new();
    let _ = writeln!(message, "EXECUTIVE SUMMARY");
    let _ = writeln!(message, "Unit: {}", office.to_uppercase());
    let _ = writeln!(message, "Gross revenue: {}", revenue);
    let _ = writeln!(message, "Total costs: {}", costs);
    let _ = writeln!(message, "Open balance: {}", open);
    let _ = writeln!(message, "Net result: {}", net);
    let _ = write!(
        message,
        "Activity: {} sales / {} expense records",
        sales.len(),
        expenses.len()
    );

    Notification {
        phone: clean_phone(target_phone),
        message,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::{PaymentStatus, SaleItem};

    fn sale() -> Sale {
        Sale {
            id: "NF-1".to_string(),
            date: Utc::now(),
            items: vec![SaleItem {
                product_id: None,
                name: "LICENSE".to_string(),
                quantity: 2,
                price: Money::from_cents(5000),
            }],
            total: Money::from_cents(10000),
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Paid,
            customer_name: "ANA".to_string(),
            customer_phone: "(11) 99999-9999".to_string(),
            seller_name: "Rui".to_string(),
            seller_office: "Alpha".to_string(),
            remaining_balance: Money::zero(),
            installments: Vec::new(),
        }
    }

    #[test]
    fn test_receipt_targets_cleaned_phone() {
        let notification = receipt_message(&sale());
        assert_eq!(notification.phone, "11999999999");
    }

    #[test]
    fn test_receipt_lists_items_and_total() {
        let notification = receipt_message(&sale());
        assert!(notification.message.contains("LICENSE (x2) R$ 100.00"));
        assert!(notification.message.contains("Total: R$ 100.00"));
        assert!(notification.message.contains("CASH"));
    }

    #[test]
    fn test_executive_report_reconciles_net() {
        let s = sale();
        let expense = Expense {
            id: "e1".to_string(),
            description: "RENT".to_string(),
            amount: Money::from_cents(3000),
            category: "fixed".to_string(),
            date: Utc::now(),
            office_name: "Alpha".to_string(),
        };

        let report = executive_report("Alpha", &[&s], &[&expense], "11988887777");
        assert!(report.message.contains("Gross revenue: R$ 100.00"));
        assert!(report.message.contains("Total costs: R$ 30.00"));
        assert!(report.message.contains("Net result: R$ 70.00"));
        assert!(report.message.contains("1 sales / 1 expense records"));
    }
}
