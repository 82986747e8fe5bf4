//! Strategy CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_profile_summary;
use crate::error::FinflowResult;
use crate::models::BudgetStrategy;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Strategy subcommands
#[derive(Subcommand)]
pub enum StrategyCommands {
    /// Show the current strategy and profile totals
    Show,

    /// Change the strategy (e.g., "balanced", "aggressive-debt", "fire")
    Set {
        /// Strategy name or label
        strategy: String,
    },

    /// List the available strategies
    List,
}

/// Handle a strategy command
pub fn handle_strategy_command(
    storage: &Storage,
    settings: &Settings,
    cmd: StrategyCommands,
) -> FinflowResult<()> {
    let service = ProfileService::new(storage);

    match cmd {
        StrategyCommands::Show => {
            let profile = service.current()?;
            print!(
                "{}",
                format_profile_summary(&profile, &settings.currency_symbol)
            );
            println!();
            println!("{}", profile.target_strategy.describe());
        }

        StrategyCommands::Set { strategy } => {
            let strategy: BudgetStrategy = strategy.parse()?;
            let previous = service.set_strategy(strategy)?;

            if previous == strategy {
                println!("Strategy unchanged: {}", strategy);
            } else {
                println!("Strategy changed: {} -> {}", previous, strategy);
            }
        }

        StrategyCommands::List => {
            let current = service.current()?.target_strategy;
            for strategy in BudgetStrategy::ALL {
                let marker = if strategy == current { "*" } else { " " };
                println!("{} {:<26} {}", marker, strategy.label(), strategy.describe());
            }
        }
    }

    Ok(())
}
