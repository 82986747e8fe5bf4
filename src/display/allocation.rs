//! Allocation dashboard formatting

use chrono::NaiveDate;

use super::report::{double_separator, ordinal, separator, truncate};
use crate::models::{AllocationResult, Expense};

const WIDTH: usize = 52;

/// Format the allocation as a text dashboard
pub fn format_allocation(result: &AllocationResult, today: NaiveDate, symbol: &str) -> String {
    let money = |m: crate::models::Money| m.format_with_symbol(symbol);
    let mut output = String::new();

    output.push_str(&format!("FinFlow: {} ({})\n", today.format("%Y-%m-%d"), result.strategy));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    let payday = if result.payday_next_month {
        format!("{} (next month)", ordinal(result.next_payday))
    } else {
        ordinal(result.next_payday)
    };

    let rows = [
        ("Balance", money(result.current_balance)),
        ("Next payday", payday),
        ("Critical bills", money(result.critical_total)),
        ("Debt bills", money(result.debt_total)),
        ("Extra debt payment", money(result.extra_debt_payment)),
        ("Savings contribution", money(result.savings_contribution)),
        ("Buffer", money(result.buffer())),
    ];
    for (label, value) in rows {
        output.push_str(&format!("{:<24}{:>28}\n", label, value));
    }

    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<24}{:>28}\n",
        "Safe to spend",
        money(result.safe_to_spend)
    ));

    if result.is_short() {
        output.push('\n');
        output.push_str(&format!(
            "Warning: critical bills exceed your balance by {}\n",
            money(result.shortfall())
        ));
    }

    output.push('\n');
    output.push_str(&format_bills(&result.bills_upcoming, symbol));
    output
}

/// Format the upcoming bills table
pub fn format_bills(bills: &[Expense], symbol: &str) -> String {
    if bills.is_empty() {
        return "No bills due before the next payday.\n".to_string();
    }

    let name_width = bills
        .iter()
        .map(|b| b.name.chars().count())
        .max()
        .unwrap_or(4)
        .clamp(4, 24);

    let mut output = String::new();
    output.push_str("Upcoming bills\n");
    output.push_str(&format!(
        "{:<name_width$}  {:>5}  {:>12}  {}\n",
        "Name",
        "Due",
        "Amount",
        "Flags",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->5}  {:->12}  {:-<10}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for bill in bills {
        let mut flags = Vec::new();
        if bill.is_critical() {
            flags.push("critical");
        }
        if bill.is_debt {
            flags.push("debt");
        }

        output.push_str(&format!(
            "{:<name_width$}  {:>5}  {:>12}  {}\n",
            truncate(&bill.name, name_width),
            ordinal(bill.due_day),
            bill.amount.format_with_symbol(symbol),
            flags.join(", "),
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetStrategy, FinanceProfile, IncomeSource, Money};
    use crate::services::AllocationEngine;

    #[test]
    fn test_format_allocation() {
        let mut profile = FinanceProfile::with_strategy(BudgetStrategy::Balanced);
        profile.add_income(IncomeSource::new("Job", Money::from_units(2000), [15]));
        profile.add_expense(Expense::new("Rent", Money::from_units(200), 12));
        profile.balance = Money::from_units(1000);
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let result = AllocationEngine::compute(&profile, today);

        let text = format_allocation(&result, today, "£");

        assert!(text.contains("2025-01-10 (Balanced)"));
        assert!(text.contains("15th"));
        assert!(text.contains("£640.00"));
        assert!(text.contains("Rent"));
        assert!(text.contains("critical"));
        assert!(!text.contains("Warning"));
    }

    #[test]
    fn test_shortfall_warning() {
        let mut profile = FinanceProfile::default();
        profile.add_expense(Expense::new("Rent", Money::from_units(900), 20));
        profile.balance = Money::from_units(100);
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let result = AllocationEngine::compute(&profile, today);

        let text = format_allocation(&result, today, "$");
        assert!(text.contains("Warning: critical bills exceed your balance by $800.00"));
        assert!(text.contains("(next month)"));
    }

    #[test]
    fn test_no_bills() {
        assert_eq!(
            format_bills(&[], "£"),
            "No bills due before the next payday.\n"
        );
    }
}
