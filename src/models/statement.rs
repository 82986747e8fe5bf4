//! Statement transaction model
//!
//! A single categorized line from an imported bank statement.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Category assigned when no rule matches
pub const UNCATEGORIZED: &str = "Other";

/// A categorized statement line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementTransaction {
    /// Posting date, when the statement has a date column
    pub date: Option<NaiveDate>,
    pub description: String,
    pub amount: Money,
    pub category: String,
}

impl StatementTransaction {
    pub fn new(description: impl Into<String>, amount: Money, category: impl Into<String>) -> Self {
        Self {
            date: None,
            description: description.into(),
            amount,
            category: category.into(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn is_uncategorized(&self) -> bool {
        self.category == UNCATEGORIZED
    }
}
