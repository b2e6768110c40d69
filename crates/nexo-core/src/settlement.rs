//! # Sale Settlement
//!
//! The transactional core: turns a validated cart plus payment terms into
//! a finalized [`Sale`].
//!
//! ## Settlement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Cart + customer + terms                                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  settle(draft, now) ← THIS MODULE (pure, all-or-nothing)            │
//! │       │                                                             │
//! │       ├── empty cart?      → CoreError::EmptyCart                   │
//! │       ├── missing phone?   → CoreError::MissingPhone                │
//! │       │                                                             │
//! │       ├── CASH   → status Paid, remaining 0, no schedule            │
//! │       └── CREDIT → status Pending, remaining = total,               │
//! │                    N installments due monthly, equal split with     │
//! │                    the remainder cents on the final installment     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Sale record (engine applies stock/customer side effects)           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock is NOT checked here: oversell is rejected at cart-build time, and
//! settlement trusts the cart it is handed.

use chrono::{DateTime, Months, Utc};
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::types::{Installment, InstallmentStatus, PaymentMethod, PaymentStatus, Sale};
use crate::validation::{validate_installment_count, validate_phone};
use crate::DEFAULT_CUSTOMER_NAME;

/// Everything the settlement computation needs, gathered by the caller.
#[derive(Debug, Clone)]
pub struct SaleDraft<'a> {
    pub cart: &'a Cart,
    pub customer_name: &'a str,
    pub customer_phone: &'a str,
    pub payment_method: PaymentMethod,
    /// Number of monthly installments; only read for credit sales.
    pub installment_count: u32,
    pub seller_name: &'a str,
    pub seller_office: &'a str,
}

/// Finalizes a sale from a draft.
///
/// Pure except for id generation; the timestamp is injected so tests are
/// deterministic. Returns the complete [`Sale`] record; applying its side
/// effects (stock debit, customer upsert, persistence, notification) is
/// the engine's job.
pub fn settle(draft: &SaleDraft<'_>, now: DateTime<Utc>) -> CoreResult<Sale> {
    if draft.cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    if draft.customer_phone.trim().is_empty() {
        return Err(CoreError::MissingPhone);
    }
    validate_phone(draft.customer_phone)?;

    let total = draft.cart.total();

    let (payment_status, remaining_balance, installments) = match draft.payment_method {
        PaymentMethod::Cash => (PaymentStatus::Paid, crate::money::Money::zero(), Vec::new()),
        PaymentMethod::Credit => {
            validate_installment_count(draft.installment_count)?;
            let schedule = build_schedule(total, draft.installment_count, now);
            (PaymentStatus::Pending, total, schedule)
        }
    };

    let customer_name = if draft.customer_name.trim().is_empty() {
        DEFAULT_CUSTOMER_NAME.to_string()
    } else {
        draft.customer_name.trim().to_string()
    };

    Ok(Sale {
        id: Uuid::new_v4().to_string(),
        date: now,
        items: draft.cart.to_sale_items(),
        total,
        payment_method: draft.payment_method,
        payment_status,
        customer_name,
        customer_phone: draft.customer_phone.trim().to_string(),
        seller_name: draft.seller_name.to_string(),
        seller_office: draft.seller_office.to_string(),
        remaining_balance,
        installments,
    })
}

/// Builds the monthly installment schedule.
///
/// Equal split via [`crate::money::Money::split`]: the integer-division
/// remainder lands on the final installment so the schedule sums back to
/// the total exactly. Due dates are `now + i months` for i = 1..=n.
fn build_schedule(total: crate::money::Money, count: u32, now: DateTime<Utc>) -> Vec<Installment> {
    total
        .split(count)
        .into_iter()
        .enumerate()
        .map(|(i, amount)| {
            let number = (i + 1) as u32;
            Installment {
                number,
                amount,
                due_date: now
                    .checked_add_months(Months::new(number))
                    .unwrap_or(now),
                status: InstallmentStatus::Pending,
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
