//! Statement transaction and insight formatting

use super::report::{format_bar, format_percentage, separator, truncate};
use crate::models::StatementTransaction;
use crate::services::{RowError, StatementInsights};

const BAR_WIDTH: usize = 20;

/// Format imported statement transactions as a table
pub fn format_transactions(
    transactions: &[StatementTransaction],
    date_format: &str,
    symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<36}  {:>12}  {}\n",
        "Date", "Description", "Amount", "Category"
    ));
    output.push_str(&format!(
        "{:-<10}  {:-<36}  {:->12}  {:-<14}\n",
        "", "", "", ""
    ));

    for txn in transactions {
        let date = txn
            .date
            .map(|d| d.format(date_format).to_string())
            .unwrap_or_default();
        output.push_str(&format!(
            "{:<10}  {:<36}  {:>12}  {}\n",
            date,
            truncate(&txn.description, 36),
            txn.amount.format_with_symbol(symbol),
            txn.category
        ));
    }

    output
}

/// Format the per-category breakdown
pub fn format_insights(insights: &StatementInsights, symbol: &str) -> String {
    if insights.is_empty() {
        return "No spending to summarise.\n".to_string();
    }

    let ranked = insights.ranked();
    let width = ranked
        .iter()
        .map(|(c, _)| c.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);
    let largest = ranked
        .first()
        .map(|(_, m)| m.cents().abs() as f64)
        .unwrap_or(0.0);

    let mut output = String::new();
    output.push_str("Spending by category\n");
    output.push_str(&separator(width + BAR_WIDTH + 28));
    output.push('\n');

    for (category, amount) in &ranked {
        let count = insights.counts.get(*category).copied().unwrap_or(0);
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>5}  {}  ({})\n",
            category,
            amount.format_with_symbol(symbol),
            format_percentage(insights.share(category)),
            format_bar(amount.cents().abs() as f64, largest, BAR_WIDTH),
            count,
            width = width
        ));
    }

    output.push_str(&separator(width + BAR_WIDTH + 28));
    output.push('\n');
    output.push_str(&format!(
        "{:<width$}  {:>12}\n",
        "Total",
        insights.total.format_with_symbol(symbol),
        width = width
    ));

    if let Some(highest) = &insights.highest_category {
        output.push_str(&format!("\nHighest category: {}\n", highest));
    }

    output
}

/// Suggestion shown under the breakdown when one category dominates
pub fn format_spending_tip(insights: &StatementInsights) -> Option<String> {
    insights.highest_category.as_ref().map(|highest| {
        format!(
            "Found high spending in: {}\nSwitching to 'FIRE' or an 'Aggressive' strategy is recommended.\n",
            highest
        )
    })
}

/// Format rows that could not be parsed
pub fn format_row_errors(errors: &[RowError]) -> String {
    let mut output = String::new();
    for error in errors {
        output.push_str(&format!("  line {}: {}\n", error.line, error.message));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample() -> Vec<StatementTransaction> {
        vec![
            StatementTransaction::new("TESCO STORES", Money::from_cents(4520), "Groceries")
                .with_date(NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()),
            StatementTransaction::new("NETFLIX", Money::from_cents(1099), "Subscriptions"),
            StatementTransaction::new("ALDI", Money::from_cents(1480), "Groceries"),
        ]
    }

    #[test]
    fn test_transactions_table() {
        let text = format_transactions(&sample(), "%d/%m/%Y", "£");
        assert!(text.contains("02/03/2025"));
        assert!(text.contains("£45.20"));
        assert!(text.contains("Subscriptions"));
    }

    #[test]
    fn test_insights_ranked_and_highest() {
        let insights = StatementInsights::from_transactions(&sample());
        let text = format_insights(&insights, "£");

        let groceries = text.find("Groceries").unwrap();
        let subs = text.find("Subscriptions").unwrap();
        assert!(groceries < subs);
        assert!(text.contains("£60.00"));
        assert!(text.contains("Highest category: Groceries"));
    }

    #[test]
    fn test_empty_insights() {
        let insights = StatementInsights::from_transactions(&[]);
        assert_eq!(format_insights(&insights, "£"), "No spending to summarise.\n");
    }

    #[test]
    fn test_spending_tip() {
        let insights = StatementInsights::from_transactions(&sample());
        let tip = format_spending_tip(&insights).unwrap();
        assert!(tip.starts_with("Found high spending in: Groceries"));
        assert!(tip.contains("'FIRE'"));

        assert_eq!(format_spending_tip(&StatementInsights::default()), None);
    }

    #[test]
    fn test_row_errors() {
        let errors = vec![RowError {
            line: 4,
            message: "invalid amount 'abc'".into(),
        }];
        assert_eq!(format_row_errors(&errors), "  line 4: invalid amount 'abc'\n");
    }
}
