//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display:
//! the allocation dashboard, profile lists and statement insights.

pub mod allocation;
pub mod profile;
pub mod report;
pub mod statement;

pub use allocation::{format_allocation, format_bills};
pub use profile::{format_expense_list, format_income_list, format_profile_summary};
pub use statement::{
    format_insights, format_row_errors, format_spending_tip, format_transactions,
};
