//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod balance;
pub mod expense;
pub mod export;
pub mod income;
pub mod statement;
pub mod status;
pub mod strategy;

pub use balance::{handle_balance_command, BalanceCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, handle_import_command, ExportFormat};
pub use income::{handle_income_command, IncomeCommands};
pub use statement::{handle_statement_command, StatementCommands};
pub use status::handle_status_command;
pub use strategy::{handle_strategy_command, StrategyCommands};

use crate::error::{FinflowError, FinflowResult};
use crate::models::Money;

/// Parse a user-entered amount such as "1,250.40" or "£12"
pub(crate) fn parse_money(input: &str) -> FinflowResult<Money> {
    Money::parse(input).map_err(|e| {
        FinflowError::Validation(format!(
            "Invalid amount '{}'. Use a format like '1000.00' or '1000'. Error: {}",
            input, e
        ))
    })
}
