//! Income CLI commands
//!
//! Implements CLI commands for recording recurring income sources.

use clap::Subcommand;

use super::parse_money;
use crate::config::settings::Settings;
use crate::display::format_income_list;
use crate::display::report::ordinal;
use crate::error::{FinflowError, FinflowResult};
use crate::models::income::parse_days;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Add a recurring income source
    Add {
        /// Income name (e.g., "Salary")
        name: String,

        /// Amount received each pay day (e.g., "2000" or "2000.00")
        amount: String,

        /// Pay days of the month, comma separated (e.g., "15,28")
        #[arg(short, long)]
        days: String,
    },

    /// List income sources
    List,
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> FinflowResult<()> {
    let service = ProfileService::new(storage);

    match cmd {
        IncomeCommands::Add { name, amount, days } => {
            let amount = parse_money(&amount)?;
            let pay_days = parse_days(&days).map_err(FinflowError::Validation)?;

            let income = service.add_income(&name, amount, pay_days)?;

            let days: Vec<String> = income.pay_days.iter().map(|d| ordinal(*d)).collect();
            println!("Added income: {}", income.name);
            println!(
                "  Amount:   {}",
                income.amount.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Pay days: {}", days.join(", "));
        }

        IncomeCommands::List => {
            let profile = service.current()?;
            print!(
                "{}",
                format_income_list(&profile.income_sources, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
