//! # Voice Command Dispatch
//!
//! Routes a decoded voice intent to the matching operation. The decoding
//! itself lives in the core ([`nexo_core::decode_intent`]); by the time a
//! payload reaches here it is well-formed, however sparse.

use tracing::info;

use nexo_core::{Cart, Expense, IntentKind, ParsedIntent, PaymentMethod, Sale};

use crate::context::Engine;
use crate::error::EngineResult;

/// What a dispatched intent produced.
#[derive(Debug)]
pub enum IntentOutcome {
    /// A cash sale was settled from the spoken amount.
    SaleRecorded(Sale),
    /// An expense record was created.
    ExpenseRecorded(Expense),
    /// Scheduling is not an engine concern; returned to the caller.
    Schedule(ParsedIntent),
}

impl Engine {
    /// Executes a decoded voice command.
    ///
    /// Sale intents become a single-line ad-hoc cash settlement and flow
    /// through the full checkout path (stock is untouched, the line has no
    /// product reference). Missing required fields fail the same way the
    /// manual operation would.
    pub fn dispatch_intent(&mut self, parsed: ParsedIntent) -> EngineResult<IntentOutcome> {
        info!(kind = ?parsed.kind, amount = %parsed.amount, "voice intent");

        match parsed.kind {
            IntentKind::Sale => {
                let mut cart = Cart::new();
                cart.add_adhoc("VOICE ORDER", parsed.amount)?;

                let sale = self.settle_sale(
                    &cart,
                    &parsed.customer_name,
                    &parsed.phone,
                    PaymentMethod::Cash,
                    1,
                )?;
                Ok(IntentOutcome::SaleRecorded(sale))
            }
            IntentKind::Expense => {
                // The wire contract has no description field; the category
                // doubles as one.
                let expense =
                    self.create_expense("VOICE ENTRY", parsed.amount, &parsed.category)?;
                Ok(IntentOutcome::ExpenseRecorded(expense))
            }
            IntentKind::Schedule => Ok(IntentOutcome::Schedule(parsed)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
