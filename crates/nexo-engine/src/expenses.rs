//! # Expenses
//!
//! Operating-cost records, stamped with the acting office and read back
//! through the tenant filter like everything else.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use nexo_core::validation::{validate_name, validate_price};
use nexo_core::{executive_report, observes, Expense, Money, DEFAULT_CATEGORY};

use crate::context::Engine;
use crate::error::EngineResult;

impl Engine {
    /// Records an expense for the acting office.
    pub fn create_expense(
        &mut self,
        description: &str,
        amount: Money,
        category: &str,
    ) -> EngineResult<Expense> {
        let office = self.require_actor()?.office_name.clone();

        validate_name("description", description)?;
        validate_price(amount.cents())?;

        let category = category.trim();
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            description: description.trim().to_uppercase(),
            amount,
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category.to_string()
            },
            date: Utc::now(),
            office_name: office,
        };

        debug!(expense_id = %expense.id, amount = %expense.amount, "expense recorded");

        self.expenses.push(expense.clone());
        self.persist_expenses();
        Ok(expense)
    }

    /// Removes an expense. Absent ids, and expenses outside the acting
    /// office, are a silent no-op.
    pub fn delete_expense(&mut self, id: &str) -> EngineResult<()> {
        let actor = self.require_actor()?.clone();
        let before = self.expenses.len();
        self.expenses
            .retain(|e| e.id != id || !observes(&actor, e));

        if self.expenses.len() != before {
            debug!(expense_id = %id, "expense deleted");
            self.persist_expenses();
        }
        Ok(())
    }

    /// Builds and dispatches the executive summary for the acting office.
    pub fn send_executive_report(&self, target_phone: &str) -> EngineResult<()> {
        let actor = self.require_actor()?;

        let sales: Vec<_> = self.sales()?;
        let expenses: Vec<_> = self.expenses()?;
        let report = executive_report(&actor.office_name, &sales, &expenses, target_phone);

        self.notify(&report);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
