use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use finflow_cli::cli::{
    handle_balance_command, handle_expense_command, handle_export_command, handle_import_command,
    handle_income_command, handle_statement_command, handle_status_command,
    handle_strategy_command, BalanceCommands, ExpenseCommands, ExportFormat, IncomeCommands,
    StatementCommands, StrategyCommands,
};
use finflow_cli::config::{paths::FinflowPaths, settings::Settings};
use finflow_cli::services::ProfileService;
use finflow_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finflow",
    version,
    about = "Terminal-based payday budgeting",
    long_about = "FinFlow works out what is safe to spend until your next payday. \
                  It holds back critical bills due before then, sends a share of \
                  the rest to debt or savings according to your strategy, and \
                  summarises spending from bank statements."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes priority)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty profile
    Init,

    /// Show current configuration and paths
    Config,

    /// Income source commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Budgeting strategy commands
    #[command(subcommand)]
    Strategy(StrategyCommands),

    /// Balance and savings goal commands
    #[command(subcommand)]
    Balance(BalanceCommands),

    /// Show what is safe to spend until the next payday
    Status {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Bank statement commands
    #[command(subcommand)]
    Statement(StatementCommands),

    /// Export the profile and current allocation
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Replace the profile with one from an export file
    Import {
        /// Export file (.json, .yaml or .yml)
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool, settings: &Settings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { settings.log_level.as_str() };
        EnvFilter::new(level)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinflowPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(cli.verbose, &settings);

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing FinFlow at: {}", paths.base_dir().display());
            let created = ProfileService::new(&storage).initialize(settings.default_strategy)?;
            settings.save(&paths)?;
            if created {
                println!("Initialization complete!");
                println!("Strategy: {}", settings.default_strategy);
                println!();
                println!("Next steps:");
                println!("  finflow income add Salary 2000 --days 15");
                println!("  finflow expense add Rent 900 --due 1");
                println!("  finflow balance set 1200");
                println!("  finflow status");
            } else {
                println!("A profile already exists; nothing changed.");
            }
        }
        Some(Commands::Config) => {
            println!("FinFlow Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Profile file:     {}", paths.profile_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Date format:           {}", settings.date_format);
            println!("  Statement date format: {}", settings.statement_date_format);
            println!("  Default strategy:      {}", settings.default_strategy);
            println!("  Log level:             {}", settings.log_level);
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Strategy(cmd)) => {
            handle_strategy_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Balance(cmd)) => {
            handle_balance_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Status { date }) => {
            handle_status_command(&storage, &settings, date)?;
        }
        Some(Commands::Statement(cmd)) => {
            handle_statement_command(&settings, cmd)?;
        }
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => {
            handle_export_command(&storage, &output, format, pretty)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&storage, &file)?;
        }
        None => {
            println!("FinFlow - Terminal-based payday budgeting");
            println!();
            println!("Run 'finflow --help' for usage information.");
            println!("Run 'finflow status' to see what is safe to spend.");
        }
    }

    Ok(())
}
