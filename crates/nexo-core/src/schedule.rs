//! # Installment Ledger
//!
//! Mutations on a sale's installment schedule.
//!
//! ## State Machine (per installment)
//! ```text
//! PENDING ──mark paid──► PAID        (terminal, one-way)
//! PENDING/PAID ──delete──► removed   (terminal; total reduced)
//! ```
//!
//! There is no "unpay" operation. Deleting an installment voids that share
//! of the debt: the sale total is reduced by the deleted amount so the
//! balance reconciles, and the remaining numbers keep their gaps.
//!
//! Every mutation re-derives `remaining_balance` and `payment_status` from
//! the schedule, so the reconciliation invariants hold by construction:
//! `remaining == max(0, total - paid)` and `status == Paid ⟺ remaining == 0`.

use crate::money::Money;
use crate::types::{InstallmentStatus, PaymentStatus, Sale};

impl Sale {
    /// Re-derives remaining balance and payment status from the schedule.
    pub fn recompute_balance(&mut self) {
        self.remaining_balance = self.total.saturating_sub(self.paid_amount());
        self.payment_status = if self.remaining_balance.is_zero() {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Pending
        };
    }

    /// Marks installment `number` as paid.
    ///
    /// Idempotent: already-paid and unknown numbers are silent no-ops.
    /// Returns whether anything changed.
    pub fn mark_installment_paid(&mut self, number: u32) -> bool {
        let Some(installment) = self
            .installments
            .iter_mut()
            .find(|i| i.number == number && i.status == InstallmentStatus::Pending)
        else {
            return false;
        };

        installment.status = InstallmentStatus::Paid;
        self.recompute_balance();
        true
    }

    /// Removes installment `number` from the schedule.
    ///
    /// The sale total is reduced by the deleted amount (the debt share is
    /// voided, not hidden). Remaining installments are NOT renumbered.
    /// Unknown numbers are silent no-ops. Returns the deleted amount.
    pub fn delete_installment(&mut self, number: u32) -> Option<Money> {
        let index = self.installments.iter().position(|i| i.number == number)?;
        let removed = self.installments.remove(index);

        self.total -= removed.amount;
        self.recompute_balance();
        Some(removed.amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::cart::Cart;
    use crate::settlement::{settle, SaleDraft};
    use crate::types::PaymentMethod;

    /// Credit sale of R$ 300.00 in 3 installments of R$ 100.00.
    fn credit_sale() -> Sale {
        let mut cart = Cart::new();
        cart.add_adhoc("PLAN", Money::from_cents(30000)).unwrap();
        settle(
            &SaleDraft {
                cart: &cart,
                customer_name: "Ana",
                customer_phone: "11999999999",
                payment_method: PaymentMethod::Credit,
                installment_count: 3,
                seller_name: "Rui",
                seller_office: "Alpha",
            },
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_mark_paid_reduces_remaining() {
        // Scenario: mark #1 paid → remaining 200.00, still pending
        let mut sale = credit_sale();

        assert!(sale.mark_installment_paid(1));
        assert_eq!(sale.remaining_balance.cents(), 20000);
        assert_eq!(sale.payment_status, PaymentStatus::Pending);

        // Paying #2 and #3 settles the sale
        assert!(sale.mark_installment_paid(2));
        assert!(sale.mark_installment_paid(3));
        assert_eq!(sale.remaining_balance, Money::zero());
        assert_eq!(sale.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn test_mark_paid_is_idempotent() {
        let mut sale = credit_sale();

        assert!(sale.mark_installment_paid(1));
        assert!(!sale.mark_installment_paid(1));
        assert_eq!(sale.remaining_balance.cents(), 20000);
    }

    #[test]
    fn test_mark_paid_unknown_number_is_noop() {
        let mut sale = credit_sale();
        assert!(!sale.mark_installment_paid(9));
        assert_eq!(sale.remaining_balance.cents(), 30000);
    }

    #[test]
    fn test_delete_installment_voids_debt_share() {
        // Scenario: delete #2 (100.00) before payment → total 200.00,
        // remaining 200.00, remaining numbers are 1 and 3
        let mut sale = credit_sale();

        let deleted = sale.delete_installment(2).unwrap();
        assert_eq!(deleted.cents(), 10000);
        assert_eq!(sale.total.cents(), 20000);
        assert_eq!(sale.remaining_balance.cents(), 20000);

        let numbers: Vec<u32> = sale.installments.iter().map(|i| i.number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_delete_paid_installment_keeps_balance_reconciled() {
        let mut sale = credit_sale();
        sale.mark_installment_paid(1);

        // Deleting the paid installment removes both its debt share and
        // its paid amount; remaining stays total - paid, clamped at 0.
        sale.delete_installment(1);
        assert_eq!(sale.total.cents(), 20000);
        assert_eq!(sale.paid_amount(), Money::zero());
        assert_eq!(sale.remaining_balance.cents(), 20000);
        assert_eq!(sale.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn test_delete_unknown_installment_is_noop() {
        let mut sale = credit_sale();
        assert!(sale.delete_installment(7).is_none());
        assert_eq!(sale.total.cents(), 30000);
        assert_eq!(sale.installments.len(), 3);
    }

    #[test]
    fn test_deleting_every_installment_settles_the_sale() {
        let mut sale = credit_sale();

        sale.delete_installment(1);
        sale.delete_installment(2);
        sale.delete_installment(3);

        assert_eq!(sale.total, Money::zero());
        assert_eq!(sale.remaining_balance, Money::zero());
        assert_eq!(sale.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn test_recompute_clamps_remaining_at_zero() {
        let mut sale = credit_sale();
        sale.mark_installment_paid(1);
        sale.mark_installment_paid(2);

        // Void the unpaid share; paid amount now exceeds the reduced total
        sale.delete_installment(3);
        assert_eq!(sale.remaining_balance, Money::zero());
        assert_eq!(sale.payment_status, PaymentStatus::Paid);
    }
}
