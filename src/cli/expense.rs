//! Expense CLI commands

use clap::Subcommand;

use super::parse_money;
use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::display::report::ordinal;
use crate::error::FinflowResult;
use crate::models::expense::{CRITICAL_PRIORITY, DEFAULT_EXPENSE_CATEGORY};
use crate::models::Expense;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a monthly bill or expense
    Add {
        /// Expense name (e.g., "Rent")
        name: String,

        /// Amount due each month
        amount: String,

        /// Day of the month the bill is due (1-31)
        #[arg(long)]
        due: u8,

        /// Category label
        #[arg(short, long, default_value = DEFAULT_EXPENSE_CATEGORY)]
        category: String,

        /// Priority, 1 = critical must-pay
        #[arg(short, long, default_value_t = CRITICAL_PRIORITY)]
        priority: u8,

        /// Mark as a debt payment
        #[arg(long)]
        debt: bool,
    },

    /// List expenses
    List,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> FinflowResult<()> {
    let service = ProfileService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            due,
            category,
            priority,
            debt,
        } => {
            let mut expense = Expense::new(name, parse_money(&amount)?, due)
                .with_category(category)
                .with_priority(priority);
            if debt {
                expense = expense.as_debt();
            }

            let expense = service.add_expense(expense)?;

            println!("Added expense: {}", expense.name);
            println!(
                "  Amount:   {}",
                expense.amount.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Due:      {}", ordinal(expense.due_day));
            println!("  Category: {}", expense.category);
            println!(
                "  Priority: {}{}",
                expense.priority,
                if expense.is_critical() { " (critical)" } else { "" }
            );
            if expense.is_debt {
                println!("  Debt:     yes");
            }
        }

        ExpenseCommands::List => {
            let profile = service.current()?;
            print!(
                "{}",
                format_expense_list(&profile.expenses, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
