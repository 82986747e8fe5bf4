//! Allocation snapshot
//!
//! The output of the allocation engine. Derived on demand and never persisted.

use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::money::Money;
use super::strategy::BudgetStrategy;

/// How the balance splits up until the next payday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub current_balance: Money,
    /// Day of month of the next payday
    pub next_payday: u8,
    /// True when the next payday falls in the following month
    pub payday_next_month: bool,
    /// Bills due before the next payday, in profile order
    pub bills_upcoming: Vec<Expense>,
    /// Upcoming priority-1 bills
    pub critical_total: Money,
    /// Upcoming debt bills. Informational.
    pub debt_total: Money,
    pub extra_debt_payment: Money,
    pub savings_contribution: Money,
    pub safe_to_spend: Money,
    pub strategy: BudgetStrategy,
}

impl AllocationResult {
    /// Amount the strategy held back without assigning it
    pub fn buffer(&self) -> Money {
        let assigned = self.critical_total
            + self.extra_debt_payment
            + self.savings_contribution
            + self.safe_to_spend;
        (self.current_balance - assigned).floor_zero()
    }

    /// Whether critical bills alone exceed the balance
    pub fn is_short(&self) -> bool {
        self.critical_total > self.current_balance
    }

    /// How far critical bills exceed the balance, zero when covered
    pub fn shortfall(&self) -> Money {
        (self.critical_total - self.current_balance).floor_zero()
    }
}
