//! Statement insights
//!
//! Summarizes categorized statement transactions: totals per category, the
//! grand total, and the category with the largest total.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Money, StatementTransaction};

/// Spending summary for one statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct StatementInsights {
    /// Summed amount per category
    pub summary: BTreeMap<String, Money>,
    /// Sum of every amount
    pub total: Money,
    /// Category with the largest summed amount
    pub highest_category: Option<String>,
    /// Number of transactions per category
    pub counts: BTreeMap<String, usize>,
}

impl StatementInsights {
    /// Aggregate a list of categorized transactions
    ///
    /// Ties for the highest category go to whichever tied category appears
    /// first in the input.
    pub fn from_transactions(transactions: &[StatementTransaction]) -> Self {
        let mut insights = Self::default();
        let mut first_seen: Vec<&str> = Vec::new();

        for txn in transactions {
            let category = txn.category.as_str();
            if !insights.summary.contains_key(category) {
                first_seen.push(category);
            }
            *insights
                .summary
                .entry(category.to_string())
                .or_insert_with(Money::zero) += txn.amount;
            *insights.counts.entry(category.to_string()).or_insert(0) += 1;
            insights.total += txn.amount;
        }

        let mut highest: Option<(&str, Money)> = None;
        for category in first_seen {
            let amount = insights.summary[category];
            match highest {
                Some((_, best)) if amount <= best => {}
                _ => highest = Some((category, amount)),
            }
        }
        insights.highest_category = highest.map(|(category, _)| category.to_string());

        insights
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }

    /// Categories sorted by absolute amount, largest first
    pub fn ranked(&self) -> Vec<(&str, Money)> {
        let mut ranked: Vec<(&str, Money)> = self
            .summary
            .iter()
            .map(|(category, amount)| (category.as_str(), *amount))
            .collect();
        ranked.sort_by(|a, b| b.1.abs().cmp(&a.1.abs()).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// Share of the absolute total taken by a category, as a percentage
    pub fn share(&self, category: &str) -> f64 {
        let total_abs: i64 = self.summary.values().map(|m| m.cents().abs()).sum();
        match self.summary.get(category) {
            Some(amount) if total_abs > 0 => {
                amount.cents().abs() as f64 / total_abs as f64 * 100.0
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(category: &str, cents: i64) -> StatementTransaction {
        StatementTransaction::new(format!("{} purchase", category), Money::from_cents(cents), category)
    }

    #[test]
    fn test_empty_input() {
        let insights = StatementInsights::from_transactions(&[]);

        assert!(insights.summary.is_empty());
        assert!(insights.is_empty());
        assert_eq!(insights.total, Money::zero());
        assert_eq!(insights.highest_category, None);
    }

    #[test]
    fn test_summary_and_total() {
        let insights = StatementInsights::from_transactions(&[
            txn("Groceries", 2500),
            txn("Dining", 1200),
            txn("Groceries", 1500),
        ]);

        assert_eq!(insights.summary["Groceries"], Money::from_cents(4000));
        assert_eq!(insights.summary["Dining"], Money::from_cents(1200));
        assert_eq!(insights.total, Money::from_cents(5200));
        assert_eq!(insights.counts["Groceries"], 2);
        assert_eq!(insights.highest_category.as_deref(), Some("Groceries"));
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let insights = StatementInsights::from_transactions(&[
            txn("Transport", 1000),
            txn("Dining", 1000),
        ]);
        assert_eq!(insights.highest_category.as_deref(), Some("Transport"));
    }

    #[test]
    fn test_highest_is_largest_signed_sum() {
        // Outflows are negative on most statements; the largest sum wins
        let insights = StatementInsights::from_transactions(&[
            txn("Shopping", -5000),
            txn("Other", 200_000),
            txn("Dining", -300),
        ]);
        assert_eq!(insights.highest_category.as_deref(), Some("Other"));
        assert_eq!(insights.total, Money::from_cents(194_700));
    }

    #[test]
    fn test_ranked_and_share() {
        let insights = StatementInsights::from_transactions(&[
            txn("Dining", 1000),
            txn("Groceries", 3000),
        ]);

        let ranked = insights.ranked();
        assert_eq!(ranked[0].0, "Groceries");
        assert_eq!(ranked[1].0, "Dining");
        assert!((insights.share("Groceries") - 75.0).abs() < f64::EPSILON);
        assert_eq!(insights.share("Missing"), 0.0);
    }
}
