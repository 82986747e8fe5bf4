//! Profile service
//!
//! The only place the finance profile is changed. Every mutation validates its
//! input, applies it through the repository, and persists immediately.
//! Allocation is computed from a snapshot of the current profile.

use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::info;

use crate::error::{FinflowError, FinflowResult};
use crate::models::{AllocationResult, BudgetStrategy, Expense, FinanceProfile, IncomeSource, Money};
use crate::services::AllocationEngine;
use crate::storage::Storage;

/// Service for profile management
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Write an empty profile if none exists yet
    ///
    /// Returns true when a new profile was created.
    pub fn initialize(&self, strategy: BudgetStrategy) -> FinflowResult<bool> {
        if self.storage.is_initialized() {
            return Ok(false);
        }

        self.storage
            .profile
            .replace(FinanceProfile::with_strategy(strategy))?;
        self.storage.profile.save()?;

        info!(strategy = %strategy, "created new profile");
        Ok(true)
    }

    /// Snapshot of the current profile
    pub fn current(&self) -> FinflowResult<FinanceProfile> {
        self.storage.profile.get()
    }

    /// Append a recurring income source
    pub fn add_income(
        &self,
        name: &str,
        amount: Money,
        pay_days: BTreeSet<u8>,
    ) -> FinflowResult<IncomeSource> {
        let income = IncomeSource::new(name.trim(), amount, pay_days);
        income
            .validate()
            .map_err(|e| FinflowError::Validation(e.to_string()))?;
        ensure_unused(self.find_income(&income.name), "income source", &income.name)?;

        self.storage
            .profile
            .update(|profile| profile.add_income(income.clone()))?;
        self.storage.profile.save()?;

        info!(name = %income.name, amount = income.amount.cents(), "added income source");
        Ok(income)
    }

    /// Append an expense
    pub fn add_expense(&self, expense: Expense) -> FinflowResult<Expense> {
        let mut expense = expense;
        expense.name = expense.name.trim().to_string();
        expense
            .validate()
            .map_err(|e| FinflowError::Validation(e.to_string()))?;
        ensure_unused(self.find_expense(&expense.name), "expense", &expense.name)?;

        self.storage
            .profile
            .update(|profile| profile.add_expense(expense.clone()))?;
        self.storage.profile.save()?;

        info!(
            name = %expense.name,
            amount = expense.amount.cents(),
            due_day = expense.due_day,
            priority = expense.priority,
            "added expense"
        );
        Ok(expense)
    }

    /// Change the budgeting strategy
    pub fn set_strategy(&self, strategy: BudgetStrategy) -> FinflowResult<BudgetStrategy> {
        let previous = self
            .storage
            .profile
            .update(|profile| std::mem::replace(&mut profile.target_strategy, strategy))?;
        self.storage.profile.save()?;

        info!(from = %previous, to = %strategy, "changed strategy");
        Ok(previous)
    }

    /// Record the current cash balance
    pub fn set_balance(&self, balance: Money) -> FinflowResult<Money> {
        if !balance.in_range() {
            return Err(FinflowError::Validation(format!(
                "Balance cannot exceed {}",
                Money::MAX
            )));
        }

        let previous = self
            .storage
            .profile
            .update(|profile| std::mem::replace(&mut profile.balance, balance))?;
        self.storage.profile.save()?;

        info!(balance = balance.cents(), "updated balance");
        Ok(previous)
    }

    /// Record the savings goal
    pub fn set_savings_goal(&self, goal: Money) -> FinflowResult<Money> {
        if goal.is_negative() || !goal.in_range() {
            return Err(FinflowError::Validation(
                format!("Savings goal must be between {} and {}", Money::zero(), Money::MAX),
            ));
        }

        let previous = self
            .storage
            .profile
            .update(|profile| std::mem::replace(&mut profile.savings_goal, goal))?;
        self.storage.profile.save()?;

        info!(goal = goal.cents(), "updated savings goal");
        Ok(previous)
    }

    /// Swap in a whole profile (e.g. from an export)
    pub fn replace(&self, profile: FinanceProfile) -> FinflowResult<()> {
        profile.validate().map_err(FinflowError::Validation)?;

        info!(
            income_sources = profile.income_sources.len(),
            expenses = profile.expenses.len(),
            "replacing profile"
        );
        self.storage.profile.replace(profile)?;
        self.storage.profile.save()
    }

    /// Look up an income source by name
    pub fn find_income(&self, name: &str) -> FinflowResult<IncomeSource> {
        self.current()?
            .find_income(name)
            .cloned()
            .ok_or_else(|| FinflowError::income_not_found(name))
    }

    /// Look up an expense by name
    pub fn find_expense(&self, name: &str) -> FinflowResult<Expense> {
        self.current()?
            .find_expense(name)
            .cloned()
            .ok_or_else(|| FinflowError::expense_not_found(name))
    }

    /// Allocation for the current profile as of `date`
    pub fn allocation(&self, date: NaiveDate) -> FinflowResult<AllocationResult> {
        let profile = self.current()?;
        Ok(AllocationEngine::compute(&profile, date))
    }
}

/// Names identify entries in listings, so they must be unique (ignoring case)
fn ensure_unused<T>(lookup: FinflowResult<T>, kind: &str, name: &str) -> FinflowResult<()> {
    match lookup {
        Ok(_) => Err(FinflowError::Validation(format!(
            "An {} named '{}' already exists",
            kind, name
        ))),
        Err(e) if e.is_not_found() => Ok(()),
        Err(e) => Err(e),
    }
}
