//! Finance profile model
//!
//! The profile is the whole of a user's recurring picture: income sources,
//! bills, current balance and chosen strategy. It only ever grows; entries are
//! appended, never removed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::expense::Expense;
use super::income::IncomeSource;
use super::money::Money;
use super::strategy::BudgetStrategy;

/// A user's financial profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FinanceProfile {
    #[serde(default)]
    pub income_sources: Vec<IncomeSource>,

    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// Current cash on hand
    #[serde(default)]
    pub balance: Money,

    /// Informational only; allocation never reads it
    #[serde(default)]
    pub savings_goal: Money,

    #[serde(default)]
    pub target_strategy: BudgetStrategy,
}

impl FinanceProfile {
    /// Create an empty profile with the given strategy
    pub fn with_strategy(strategy: BudgetStrategy) -> Self {
        Self {
            target_strategy: strategy,
            ..Self::default()
        }
    }

    pub fn add_income(&mut self, income: IncomeSource) {
        self.income_sources.push(income);
    }

    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Every distinct pay day across all income sources, ascending
    pub fn pay_days(&self) -> BTreeSet<u8> {
        self.income_sources
            .iter()
            .flat_map(|source| source.pay_days.iter().copied())
            .collect()
    }

    /// Total of one occurrence of every income source
    pub fn monthly_income(&self) -> Money {
        self.income_sources.iter().map(|s| s.amount).sum()
    }

    /// Total of one occurrence of every expense
    pub fn monthly_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Find an income source by name (case-insensitive)
    pub fn find_income(&self, name: &str) -> Option<&IncomeSource> {
        self.income_sources
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Find an expense by name (case-insensitive)
    pub fn find_expense(&self, name: &str) -> Option<&Expense> {
        self.expenses
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Validate every entry, reporting the first problem found
    pub fn validate(&self) -> Result<(), String> {
        if !self.balance.in_range() || !self.savings_goal.in_range() {
            return Err(format!("Balance and savings goal cannot exceed {}", Money::MAX));
        }
        for source in &self.income_sources {
            source
                .validate()
                .map_err(|e| format!("Income '{}': {}", source.name, e))?;
        }
        for expense in &self.expenses {
            expense
                .validate()
                .map_err(|e| format!("Expense '{}': {}", expense.name, e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> FinanceProfile {
        let mut profile = FinanceProfile::default();
        profile.add_income(IncomeSource::new("Job", Money::from_units(2000), [15, 28]));
        profile.add_income(IncomeSource::new("Side", Money::from_units(300), [1, 15]));
        profile.add_expense(Expense::new("Rent", Money::from_units(900), 1));
        profile.add_expense(Expense::new("Phone", Money::from_units(20), 12).with_priority(2));
        profile
    }

    #[test]
    fn test_default_profile() {
        let profile = FinanceProfile::default();
        assert!(profile.income_sources.is_empty());
        assert!(profile.expenses.is_empty());
        assert!(profile.balance.is_zero());
        assert_eq!(profile.target_strategy, BudgetStrategy::Balanced);
    }

    #[test]
    fn test_pay_days_union() {
        let profile = sample_profile();
        assert_eq!(profile.pay_days().into_iter().collect::<Vec<_>>(), vec![1, 15, 28]);
    }

    #[test]
    fn test_totals() {
        let profile = sample_profile();
        assert_eq!(profile.monthly_income(), Money::from_units(2300));
        assert_eq!(profile.monthly_expenses(), Money::from_units(920));
    }

    #[test]
    fn test_find() {
        let profile = sample_profile();
        assert!(profile.find_expense("rent").is_some());
        assert!(profile.find_income("JOB").is_some());
        assert!(profile.find_expense("Gym").is_none());
    }

    #[test]
    fn test_validate_reports_entry() {
        let mut profile = sample_profile();
        assert!(profile.validate().is_ok());

        profile.add_expense(Expense::new("Broken", Money::from_units(1), 40));
        let err = profile.validate().unwrap_err();
        assert!(err.contains("Broken"));
    }

    #[test]
    fn test_validate_rejects_oversized_balance() {
        let mut profile = sample_profile();
        profile.balance = Money::from_cents(i64::MAX);
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_document() {
        let profile: FinanceProfile =
            serde_json::from_str(r#"{"balance": 12345, "target_strategy": "Safe Savings"}"#)
                .unwrap();
        assert_eq!(profile.balance.cents(), 12345);
        assert_eq!(profile.target_strategy, BudgetStrategy::SafeSavings);
        assert!(profile.expenses.is_empty());
    }
}
