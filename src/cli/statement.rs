//! Statement CLI commands
//!
//! Reads a bank statement, categorizes every row and prints a spending
//! breakdown. Nothing is written to the profile.

use clap::Subcommand;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::display::{
    format_insights, format_row_errors, format_spending_tip, format_transactions,
};
use crate::error::FinflowResult;
use crate::services::{ImportService, StatementInsights};

/// Statement subcommands
#[derive(Subcommand)]
pub enum StatementCommands {
    /// Categorize a statement and summarise spending
    Analyze {
        /// Path to the statement file (CSV or PDF)
        file: PathBuf,

        /// Only print the category summary
        #[arg(short, long)]
        summary_only: bool,
    },
}

/// Handle a statement command
pub fn handle_statement_command(settings: &Settings, cmd: StatementCommands) -> FinflowResult<()> {
    match cmd {
        StatementCommands::Analyze { file, summary_only } => {
            let service = ImportService::new(settings);
            let import = service.import_file(&file)?;
            let symbol = settings.currency_symbol.as_str();

            println!(
                "Read {} transactions from {}",
                import.transactions.len(),
                file.display()
            );
            if import.skipped > 0 {
                println!("Skipped {} rows without a description", import.skipped);
            }
            if !import.errors.is_empty() {
                println!("{} rows could not be read:", import.errors.len());
                print!("{}", format_row_errors(&import.errors));
            }
            println!();

            if !summary_only {
                print!(
                    "{}",
                    format_transactions(&import.transactions, &settings.date_format, symbol)
                );
                println!();
            }

            let insights = StatementInsights::from_transactions(&import.transactions);
            print!("{}", format_insights(&insights, symbol));
            if let Some(tip) = format_spending_tip(&insights) {
                println!();
                print!("{}", tip);
            }
        }
    }

    Ok(())
}
