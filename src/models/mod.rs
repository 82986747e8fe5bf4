//! Core data models for FinFlow
//!
//! This module contains the data structures of the payday budgeting domain:
//! income sources, expenses, the finance profile, strategies, allocation
//! snapshots and statement transactions.

pub mod allocation;
pub mod expense;
pub mod income;
pub mod money;
pub mod profile;
pub mod statement;
pub mod strategy;

pub use allocation::AllocationResult;
pub use expense::{Expense, ExpenseValidationError, CRITICAL_PRIORITY};
pub use income::{IncomeSource, IncomeValidationError};
pub use money::{Money, MoneyParseError};
pub use profile::FinanceProfile;
pub use statement::{StatementTransaction, UNCATEGORIZED};
pub use strategy::{BudgetStrategy, Destination, StrategyRule};
