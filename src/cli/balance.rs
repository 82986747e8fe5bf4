//! Balance and savings goal CLI commands

use clap::Subcommand;

use super::parse_money;
use crate::config::settings::Settings;
use crate::error::FinflowResult;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Balance subcommands
#[derive(Subcommand)]
pub enum BalanceCommands {
    /// Record the current cash balance (may be negative)
    #[command(allow_negative_numbers = true)]
    Set {
        /// Balance (e.g., "1250.40" or "-80")
        amount: String,
    },

    /// Record a savings goal
    Goal {
        /// Goal amount
        amount: String,
    },
}

/// Handle a balance command
pub fn handle_balance_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BalanceCommands,
) -> FinflowResult<()> {
    let service = ProfileService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BalanceCommands::Set { amount } => {
            let balance = parse_money(&amount)?;
            let previous = service.set_balance(balance)?;
            println!(
                "Balance set to {} (was {})",
                balance.format_with_symbol(symbol),
                previous.format_with_symbol(symbol)
            );
        }

        BalanceCommands::Goal { amount } => {
            let goal = parse_money(&amount)?;
            service.set_savings_goal(goal)?;
            println!("Savings goal set to {}", goal.format_with_symbol(symbol));
        }
    }

    Ok(())
}
