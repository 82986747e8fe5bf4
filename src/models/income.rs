//! Income source model
//!
//! An income source recurs on one or more fixed days of the month. The union
//! of all pay days across sources determines the next payday.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::money::Money;

/// Smallest valid day of month
pub const MIN_DAY: u8 = 1;
/// Largest valid day of month (no calendar awareness)
pub const MAX_DAY: u8 = 31;

/// Validation errors for income sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    EmptyName,
    NegativeAmount,
    AmountTooLarge,
    NoPayDays,
    PayDayOutOfRange(u8),
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Income source name cannot be empty"),
            Self::NegativeAmount => write!(f, "Income amount cannot be negative"),
            Self::AmountTooLarge => write!(f, "Income amount cannot exceed {}", Money::MAX),
            Self::NoPayDays => write!(f, "Recurring income needs at least one pay day"),
            Self::PayDayOutOfRange(day) => {
                write!(f, "Pay day {} is outside {}-{}", day, MIN_DAY, MAX_DAY)
            }
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// A recurring source of income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub name: String,
    pub amount: Money,
    /// Days of the month this income lands on
    pub pay_days: BTreeSet<u8>,
    #[serde(default = "default_recurring")]
    pub recurring: bool,
}

fn default_recurring() -> bool {
    true
}

impl IncomeSource {
    /// Create a new recurring income source
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        pay_days: impl IntoIterator<Item = u8>,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            pay_days: pay_days.into_iter().collect(),
            recurring: true,
        }
    }

    /// Validate the income source
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.name.trim().is_empty() {
            return Err(IncomeValidationError::EmptyName);
        }

        if self.amount.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }

        if !self.amount.in_range() {
            return Err(IncomeValidationError::AmountTooLarge);
        }

        if self.recurring && self.pay_days.is_empty() {
            return Err(IncomeValidationError::NoPayDays);
        }

        if let Some(&day) = self
            .pay_days
            .iter()
            .find(|d| !(MIN_DAY..=MAX_DAY).contains(*d))
        {
            return Err(IncomeValidationError::PayDayOutOfRange(day));
        }

        Ok(())
    }
}

/// Parse a comma-separated list of days ("15, 28")
pub fn parse_days(s: &str) -> Result<BTreeSet<u8>, String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u8>()
                .map_err(|_| format!("'{}' is not a day of the month", part))
        })
        .collect()
}
