//! FinFlow - Terminal-based payday budgeting
//!
//! This library provides the core functionality for the FinFlow application.
//! Given a profile of income sources, monthly bills, a current balance and a
//! budgeting strategy, it works out what must be held back for bills due
//! before the next payday, how much goes to debt or savings, and what is safe
//! to spend. It also categorizes bank statements into a spending summary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, income, expenses, strategies, etc.)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer, including the allocation engine
//! - `export`: JSON and YAML profile export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finflow_cli::models::{BudgetStrategy, Expense, FinanceProfile, IncomeSource, Money};
//! use finflow_cli::services::AllocationEngine;
//!
//! let mut profile = FinanceProfile::with_strategy(BudgetStrategy::Balanced);
//! profile.add_income(IncomeSource::new("Job", Money::from_units(2000), [15]));
//! profile.add_expense(Expense::new("Rent", Money::from_units(200), 12));
//! profile.balance = Money::from_units(1000);
//!
//! let today = chrono::NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
//! let result = AllocationEngine::compute(&profile, today);
//! assert_eq!(result.safe_to_spend, Money::from_units(640));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::FinflowError;
