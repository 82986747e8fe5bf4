//! Allocation engine
//!
//! Works out, for a profile and a reference date, when the next payday is,
//! which bills land before it, and how the rest of the balance is split under
//! the profile's strategy.
//!
//! Days are plain day-of-month numbers (1-31). There is no calendar
//! awareness: a pay day of 31 is treated as day 31 even in a 30-day month.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use tracing::debug;

use crate::models::{AllocationResult, Destination, Expense, FinanceProfile, Money};

/// Pure allocation calculator
pub struct AllocationEngine;

impl AllocationEngine {
    /// Compute the allocation for `profile` as of `reference_date`
    ///
    /// Pure and idempotent: the profile is only read, and identical inputs
    /// always produce identical results.
    pub fn compute(profile: &FinanceProfile, reference_date: NaiveDate) -> AllocationResult {
        let today = reference_date.day() as u8;
        let next_payday = next_payday(&profile.pay_days(), today);

        let bills_upcoming: Vec<Expense> = profile
            .expenses
            .iter()
            .filter(|expense| is_upcoming(expense.due_day, today, next_payday))
            .cloned()
            .collect();

        let critical_total: Money = bills_upcoming
            .iter()
            .filter(|bill| bill.is_critical())
            .map(|bill| bill.amount)
            .sum();
        let debt_total: Money = bills_upcoming
            .iter()
            .filter(|bill| bill.is_debt)
            .map(|bill| bill.amount)
            .sum();

        let strategy = profile.target_strategy;
        let rule = strategy.rule();

        // The withheld share comes off the unfloored base; only the spendable
        // figure is clamped at the end.
        let base = profile.balance - critical_total;
        let extra = base.percent(rule.percent).floor_zero();
        let remaining = base - extra;

        let (extra_debt_payment, savings_contribution) = match rule.destination {
            Destination::Buffer => (Money::zero(), Money::zero()),
            Destination::Debt => (extra, Money::zero()),
            Destination::Savings => (Money::zero(), extra),
        };

        let safe_to_spend = remaining.floor_zero();

        debug!(
            today,
            next_payday,
            bills = bills_upcoming.len(),
            critical = critical_total.cents(),
            base = base.cents(),
            strategy = %strategy,
            safe = safe_to_spend.cents(),
            "computed allocation"
        );

        AllocationResult {
            current_balance: profile.balance,
            next_payday,
            payday_next_month: next_payday <= today,
            bills_upcoming,
            critical_total,
            debt_total,
            extra_debt_payment,
            savings_contribution,
            safe_to_spend,
            strategy,
        }
    }
}

/// First pay day strictly after `today`, wrapping to the earliest pay day of
/// next month. With no pay days at all, today is returned.
pub fn next_payday(pay_days: &BTreeSet<u8>, today: u8) -> u8 {
    pay_days
        .range(today.saturating_add(1)..)
        .next()
        .or_else(|| pay_days.iter().next())
        .copied()
        .unwrap_or(today)
}

/// Whether a bill due on `due_day` falls in `(today, next_payday]`, reading
/// the window across the month end when the payday is next month.
pub fn is_upcoming(due_day: u8, today: u8, next_payday: u8) -> bool {
    if next_payday > today {
        today < due_day && due_day <= next_payday
    } else {
        due_day > today || due_day <= next_payday
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetStrategy, IncomeSource};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn profile_with(
        pay_days: &[u8],
        expenses: Vec<Expense>,
        balance: i64,
        strategy: BudgetStrategy,
    ) -> FinanceProfile {
        let mut profile = FinanceProfile::with_strategy(strategy);
        if !pay_days.is_empty() {
            profile.add_income(IncomeSource::new(
                "Job",
                Money::from_units(2000),
                pay_days.iter().copied(),
            ));
        }
        for expense in expenses {
            profile.add_expense(expense);
        }
        profile.balance = Money::from_units(balance);
        profile
    }

    #[test]
    fn test_next_payday_rules() {
        let days: BTreeSet<u8> = [1, 15, 28].into_iter().collect();
        assert_eq!(next_payday(&days, 10), 15);
        assert_eq!(next_payday(&days, 15), 28);
        assert_eq!(next_payday(&days, 28), 1);
        assert_eq!(next_payday(&days, 31), 1);
        assert_eq!(next_payday(&BTreeSet::new(), 9), 9);
    }

    #[test]
    fn test_no_income_uses_reference_day() {
        for day in [1, 14, 31] {
            let profile = profile_with(&[], vec![], 100, BudgetStrategy::Balanced);
            let result = AllocationEngine::compute(&profile, date(day));
            assert_eq!(result.next_payday, day as u8);
        }
    }

    #[test]
    fn test_no_income_window_spans_whole_month() {
        // Degenerate wrap: payday == today, so everything after today counts,
        // as does everything up to and including today.
        let profile = profile_with(
            &[],
            vec![
                Expense::new("Early", Money::from_units(10), 3),
                Expense::new("Late", Money::from_units(20), 25),
            ],
            100,
            BudgetStrategy::Balanced,
        );
        let result = AllocationEngine::compute(&profile, date(10));
        assert_eq!(result.bills_upcoming.len(), 2);
        assert!(result.payday_next_month);
    }

    #[test]
    fn test_scenario_bill_after_payday_not_upcoming() {
        let profile = profile_with(
            &[15],
            vec![Expense::new("Rent", Money::from_units(100), 20)],
            1000,
            BudgetStrategy::Balanced,
        );
        let result = AllocationEngine::compute(&profile, date(10));

        assert_eq!(result.next_payday, 15);
        assert!(!result.payday_next_month);
        assert!(result.bills_upcoming.is_empty());
        assert_eq!(result.critical_total, Money::zero());
        assert_eq!(result.safe_to_spend, Money::from_units(800));
        assert_eq!(result.buffer(), Money::from_units(200));
    }

    #[test]
    fn test_scenario_critical_bill_reserved() {
        let rent = Expense::new("Rent", Money::from_units(200), 12);
        let profile = profile_with(&[15], vec![rent.clone()], 1000, BudgetStrategy::Balanced);
        let result = AllocationEngine::compute(&profile, date(10));

        assert_eq!(result.bills_upcoming, vec![rent]);
        assert_eq!(result.critical_total, Money::from_units(200));
        assert_eq!(result.safe_to_spend, Money::from_units(640));
        assert_eq!(result.extra_debt_payment, Money::zero());
        assert_eq!(result.savings_contribution, Money::zero());
    }

    #[test]
    fn test_scenario_wrap_window() {
        let profile = profile_with(
            &[15],
            vec![
                Expense::new("Early", Money::from_units(30), 3),
                Expense::new("Mid", Money::from_units(40), 20),
                Expense::new("Last", Money::from_units(50), 30),
            ],
            1000,
            BudgetStrategy::Balanced,
        );
        let result = AllocationEngine::compute(&profile, date(28));

        assert_eq!(result.next_payday, 15);
        assert!(result.payday_next_month);
        let names: Vec<_> = result.bills_upcoming.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Early", "Last"]);
    }

    #[test]
    fn test_window_boundaries() {
        // Due today is excluded, due on payday is included
        assert!(!is_upcoming(10, 10, 15));
        assert!(is_upcoming(15, 10, 15));
        assert!(!is_upcoming(16, 10, 15));
        // Wrap: due on today excluded, due on next month's payday included
        assert!(!is_upcoming(28, 28, 15));
        assert!(is_upcoming(15, 28, 15));
        assert!(!is_upcoming(16, 28, 15));
    }

    #[test]
    fn test_scenario_fire() {
        let profile = profile_with(&[15], vec![], 500, BudgetStrategy::Fire);
        let result = AllocationEngine::compute(&profile, date(10));

        assert_eq!(result.savings_contribution, Money::from_units(450));
        assert_eq!(result.safe_to_spend, Money::from_units(50));
        assert_eq!(result.extra_debt_payment, Money::zero());
    }

    #[test]
    fn test_strategy_table() {
        let cases = [
            (BudgetStrategy::AggressiveDebt, 700, 0, 300),
            (BudgetStrategy::SafeDebt, 300, 0, 700),
            (BudgetStrategy::AggressiveSavings, 0, 700, 300),
            (BudgetStrategy::SafeSavings, 0, 300, 700),
            (BudgetStrategy::Fire, 0, 900, 100),
            (BudgetStrategy::Balanced, 0, 0, 800),
        ];

        for (strategy, debt, savings, safe) in cases {
            let profile = profile_with(&[15], vec![], 1000, strategy);
            let result = AllocationEngine::compute(&profile, date(10));
            assert_eq!(result.extra_debt_payment, Money::from_units(debt), "{}", strategy);
            assert_eq!(result.savings_contribution, Money::from_units(savings), "{}", strategy);
            assert_eq!(result.safe_to_spend, Money::from_units(safe), "{}", strategy);
        }
    }

    #[test]
    fn test_exactly_one_destination_when_base_positive() {
        for strategy in BudgetStrategy::ALL {
            if strategy == BudgetStrategy::Balanced {
                continue;
            }
            let profile = profile_with(&[15], vec![], 250, strategy);
            let result = AllocationEngine::compute(&profile, date(3));
            assert!(
                result.extra_debt_payment.is_positive() ^ result.savings_contribution.is_positive(),
                "{}",
                strategy
            );
        }
    }

    #[test]
    fn test_negative_base_floors_everything() {
        for strategy in BudgetStrategy::ALL {
            let profile = profile_with(
                &[15],
                vec![Expense::new("Rent", Money::from_units(900), 12)],
                500,
                strategy,
            );
            let result = AllocationEngine::compute(&profile, date(10));

            assert_eq!(result.critical_total, Money::from_units(900));
            assert_eq!(result.extra_debt_payment, Money::zero());
            assert_eq!(result.savings_contribution, Money::zero());
            assert_eq!(result.safe_to_spend, Money::zero());
            assert!(result.is_short());
            assert_eq!(result.shortfall(), Money::from_units(400));
        }
    }

    #[test]
    fn test_negative_balance() {
        let profile = profile_with(&[15], vec![], -50, BudgetStrategy::SafeDebt);
        let result = AllocationEngine::compute(&profile, date(10));
        assert_eq!(result.current_balance, Money::from_units(-50));
        assert_eq!(result.safe_to_spend, Money::zero());
        assert_eq!(result.extra_debt_payment, Money::zero());
    }

    #[test]
    fn test_discretionary_and_debt_bills() {
        let profile = profile_with(
            &[15],
            vec![
                Expense::new("Card", Money::from_units(100), 12).as_debt(),
                Expense::new("Loan", Money::from_units(60), 14)
                    .with_priority(2)
                    .as_debt(),
                Expense::new("Streaming", Money::from_units(10), 13).with_priority(3),
            ],
            1000,
            BudgetStrategy::Balanced,
        );
        let result = AllocationEngine::compute(&profile, date(10));

        assert_eq!(result.bills_upcoming.len(), 3);
        // Only priority 1 is reserved, debt flag does not matter
        assert_eq!(result.critical_total, Money::from_units(100));
        assert_eq!(result.debt_total, Money::from_units(160));
        assert_eq!(result.safe_to_spend, Money::from_units(720));
    }

    #[test]
    fn test_multiple_sources_share_paydays() {
        let mut profile = profile_with(&[28], vec![], 100, BudgetStrategy::Balanced);
        profile.add_income(IncomeSource::new("Side", Money::from_units(50), [5, 28]));

        let result = AllocationEngine::compute(&profile, date(2));
        assert_eq!(result.next_payday, 5);
        let result = AllocationEngine::compute(&profile, date(5));
        assert_eq!(result.next_payday, 28);
    }

    #[test]
    fn test_safe_to_spend_never_negative() {
        for balance in [-1000, -1, 0, 1, 999] {
            for strategy in BudgetStrategy::ALL {
                let profile = profile_with(
                    &[20],
                    vec![Expense::new("Bill", Money::from_units(300), 15)],
                    balance,
                    strategy,
                );
                let result = AllocationEngine::compute(&profile, date(10));
                assert!(!result.safe_to_spend.is_negative());
            }
        }
    }

    #[test]
    fn test_idempotent_and_pure() {
        let profile = profile_with(
            &[1, 15],
            vec![Expense::new("Rent", Money::from_units(700), 1)],
            1234,
            BudgetStrategy::SafeSavings,
        );
        let before = profile.clone();

        let first = AllocationEngine::compute(&profile, date(20));
        let second = AllocationEngine::compute(&profile, date(20));

        assert_eq!(first, second);
        assert_eq!(profile, before);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
