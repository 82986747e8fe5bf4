//! Income and expense list formatting

use super::report::{ordinal, truncate};
use crate::models::{Expense, FinanceProfile, IncomeSource};

const MAX_NAME_WIDTH: usize = 30;

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(4)
        .clamp(4, MAX_NAME_WIDTH)
}

fn format_days(income: &IncomeSource) -> String {
    income
        .pay_days
        .iter()
        .map(|d| ordinal(*d))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format the income source list
pub fn format_income_list(incomes: &[IncomeSource], symbol: &str) -> String {
    if incomes.is_empty() {
        return "No income sources. Add one with 'finflow income add'.\n".to_string();
    }

    let width = name_width(incomes.iter().map(|i| i.name.as_str()));
    let mut output = String::new();

    output.push_str(&format!(
        "{:<width$}  {:>12}  {}\n",
        "Name",
        "Amount",
        "Pay days",
        width = width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:-<12}\n",
        "",
        "",
        "",
        width = width
    ));

    for income in incomes {
        let recurring = if income.recurring { "" } else { " (one-off)" };
        output.push_str(&format!(
            "{:<width$}  {:>12}  {}{}\n",
            truncate(&income.name, width),
            income.amount.format_with_symbol(symbol),
            format_days(income),
            recurring,
            width = width
        ));
    }

    output
}

/// Format the expense list
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses. Add one with 'finflow expense add'.\n".to_string();
    }

    let width = name_width(expenses.iter().map(|e| e.name.as_str()));
    let mut output = String::new();

    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>5}  {:>3}  {:<14}  {}\n",
        "Name",
        "Amount",
        "Due",
        "Pri",
        "Category",
        "Debt",
        width = width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->5}  {:->3}  {:-<14}  {:-<4}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        width = width
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>5}  {:>3}  {:<14}  {}\n",
            truncate(&expense.name, width),
            expense.amount.format_with_symbol(symbol),
            ordinal(expense.due_day),
            expense.priority,
            truncate(&expense.category, 14),
            if expense.is_debt { "yes" } else { "" },
            width = width
        ));
    }

    output
}

/// Short profile summary shown after `init` and by `strategy show`
pub fn format_profile_summary(profile: &FinanceProfile, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Strategy:        {}\n", profile.target_strategy));
    output.push_str(&format!(
        "Balance:         {}\n",
        profile.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Savings goal:    {}\n",
        profile.savings_goal.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Monthly income:  {} ({} sources)\n",
        profile.monthly_income().format_with_symbol(symbol),
        profile.income_sources.len()
    ));
    output.push_str(&format!(
        "Monthly bills:   {} ({} expenses)\n",
        profile.monthly_expenses().format_with_symbol(symbol),
        profile.expenses.len()
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_income_list() {
        let incomes = vec![IncomeSource::new("Salary", Money::from_units(2500), [1, 15])];
        let text = format_income_list(&incomes, "£");
        assert!(text.contains("Salary"));
        assert!(text.contains("£2500.00"));
        assert!(text.contains("1st, 15th"));
    }

    #[test]
    fn test_expense_list_flags_debt() {
        let expenses = vec![
            Expense::new("Card", Money::from_units(50), 3).as_debt(),
            Expense::new("Gym", Money::from_units(20), 9).with_priority(3),
        ];
        let text = format_expense_list(&expenses, "£");
        let card = text.lines().find(|l| l.starts_with("Card")).unwrap();
        assert!(card.ends_with("yes"));
        let gym = text.lines().find(|l| l.starts_with("Gym")).unwrap();
        assert!(gym.contains(" 3 "));
    }

    #[test]
    fn test_empty_lists() {
        assert!(format_income_list(&[], "£").starts_with("No income sources"));
        assert!(format_expense_list(&[], "£").starts_with("No expenses"));
    }
}
