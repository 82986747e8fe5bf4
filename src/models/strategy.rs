//! Budgeting strategies
//!
//! A strategy decides how much of the non-critical balance is diverted to
//! extra debt repayment or savings instead of staying spendable until the next
//! payday. The set of strategies is closed; each one maps to exactly one
//! [`StrategyRule`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinflowError;

/// Where a strategy sends the amount it withholds from safe-to-spend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Withheld as a buffer, not assigned anywhere
    Buffer,
    /// Paid towards debt on top of scheduled payments
    Debt,
    /// Moved to savings
    Savings,
}

/// Withholding rule for a strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyRule {
    /// Whole percentage of the base taken out of safe-to-spend
    pub percent: u8,
    pub destination: Destination,
}

/// Budgeting strategy for a finance profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BudgetStrategy {
    /// Keep a 20% buffer, no extra payments
    #[default]
    #[serde(rename = "Balanced")]
    Balanced,
    /// Send 70% to debt
    #[serde(rename = "Aggressive Debt")]
    AggressiveDebt,
    /// Send 70% to savings
    #[serde(rename = "Aggressive Savings")]
    AggressiveSavings,
    /// Send 30% to debt
    #[serde(rename = "Safe Debt")]
    SafeDebt,
    /// Send 30% to savings
    #[serde(rename = "Safe Savings")]
    SafeSavings,
    /// Send 90% to savings
    #[serde(rename = "FIRE (Extreme Frugality)")]
    Fire,
}

impl BudgetStrategy {
    /// All strategies in presentation order
    pub const ALL: [BudgetStrategy; 6] = [
        Self::Balanced,
        Self::AggressiveDebt,
        Self::AggressiveSavings,
        Self::SafeDebt,
        Self::SafeSavings,
        Self::Fire,
    ];

    /// The withholding rule for this strategy
    pub const fn rule(&self) -> StrategyRule {
        let (percent, destination) = match self {
            Self::Balanced => (20, Destination::Buffer),
            Self::AggressiveDebt => (70, Destination::Debt),
            Self::SafeDebt => (30, Destination::Debt),
            Self::AggressiveSavings => (70, Destination::Savings),
            Self::SafeSavings => (30, Destination::Savings),
            Self::Fire => (90, Destination::Savings),
        };
        StrategyRule {
            percent,
            destination,
        }
    }

    /// Human-readable label, also used as the persisted form
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::AggressiveDebt => "Aggressive Debt",
            Self::AggressiveSavings => "Aggressive Savings",
            Self::SafeDebt => "Safe Debt",
            Self::SafeSavings => "Safe Savings",
            Self::Fire => "FIRE (Extreme Frugality)",
        }
    }

    /// Short description for listings
    pub fn describe(&self) -> String {
        let rule = self.rule();
        match rule.destination {
            Destination::Buffer => format!("Withhold {}% as a buffer", rule.percent),
            Destination::Debt => format!("Put {}% towards extra debt payments", rule.percent),
            Destination::Savings => format!("Put {}% into savings", rule.percent),
        }
    }
}

impl fmt::Display for BudgetStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for BudgetStrategy {
    type Err = FinflowError;

    /// Accepts the display label or a snake/kebab-case name
    /// ("Aggressive Debt", "aggressive-debt", "AGGRESSIVE_DEBT", "fire")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect();

        match key.as_str() {
            "balanced" => Ok(Self::Balanced),
            "aggressive_debt" => Ok(Self::AggressiveDebt),
            "aggressive_savings" => Ok(Self::AggressiveSavings),
            "safe_debt" => Ok(Self::SafeDebt),
            "safe_savings" => Ok(Self::SafeSavings),
            "fire" | "fire_(extreme_frugality)" => Ok(Self::Fire),
            _ => Err(FinflowError::InvalidStrategy(s.to_string())),
        }
    }
}
