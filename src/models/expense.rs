//! Expense model
//!
//! A recurring bill due on a fixed day of the month. Priority 1 marks a
//! critical bill whose amount is reserved before anything else.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::income::{MAX_DAY, MIN_DAY};
use super::money::Money;

/// Priority of a must-pay bill
pub const CRITICAL_PRIORITY: u8 = 1;

/// Category used when none is given
pub const DEFAULT_EXPENSE_CATEGORY: &str = "Other";

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NegativeAmount,
    AmountTooLarge,
    DueDayOutOfRange(u8),
    ZeroPriority,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
            Self::AmountTooLarge => write!(f, "Expense amount cannot exceed {}", Money::MAX),
            Self::DueDayOutOfRange(day) => {
                write!(f, "Due day {} is outside {}-{}", day, MIN_DAY, MAX_DAY)
            }
            Self::ZeroPriority => write!(f, "Priority starts at 1 (critical)"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A recurring bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,
    pub amount: Money,
    pub due_day: u8,
    #[serde(default = "default_category")]
    pub category: String,
    /// 1 = critical, higher = discretionary
    #[serde(default = "default_priority")]
    pub priority: u8,
    #[serde(default)]
    pub is_debt: bool,
}

fn default_category() -> String {
    DEFAULT_EXPENSE_CATEGORY.to_string()
}

fn default_priority() -> u8 {
    CRITICAL_PRIORITY
}

impl Expense {
    /// Create a critical, non-debt expense in the default category
    pub fn new(name: impl Into<String>, amount: Money, due_day: u8) -> Self {
        Self {
            name: name.into(),
            amount,
            due_day,
            category: default_category(),
            priority: CRITICAL_PRIORITY,
            is_debt: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    pub fn as_debt(mut self) -> Self {
        self.is_debt = true;
        self
    }

    /// Whether this bill must be reserved for
    pub fn is_critical(&self) -> bool {
        self.priority == CRITICAL_PRIORITY
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }

        if !self.amount.in_range() {
            return Err(ExpenseValidationError::AmountTooLarge);
        }

        if !(MIN_DAY..=MAX_DAY).contains(&self.due_day) {
            return Err(ExpenseValidationError::DueDayOutOfRange(self.due_day));
        }

        if self.priority == 0 {
            return Err(ExpenseValidationError::ZeroPriority);
        }

        Ok(())
    }
}
