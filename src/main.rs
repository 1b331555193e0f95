use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use finance_ledger::cli::{
    handle_budget_command, handle_entry_command, handle_report_command, BudgetCommands,
    EntryCommands, ErrorMessage, ReportCommands,
};
use finance_ledger::config::{paths::LedgerPaths, settings::Settings};
use finance_ledger::export::export_ledger_csv;
use finance_ledger::models::Ledger;
use finance_ledger::storage::Storage;
use finance_ledger::LedgerError;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "LEDGER_LOG";

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal finance ledger for income, expenses and savings",
    long_about = "Records monthly income, expenses and savings in a local JSON ledger, \
                  tracks per-category budgets and produces summaries, trends and \
                  category reports from the command line."
)]
struct Cli {
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the ledger and budget files
    Init,

    /// Add, list, edit and delete ledger entries
    #[command(subcommand)]
    Entry(EntryCommands),

    /// Manage monthly budgets
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Summaries, trends and category reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export ledger entries to CSV
    Export {
        /// Ledger to export, or "all"
        #[arg(default_value = "all")]
        ledger: String,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    });

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            match error.downcast_ref::<LedgerError>() {
                Some(ledger_error) => eprintln!("{}", ErrorMessage::from_error(ledger_error)),
                None => eprintln!("Error: {:#}", error),
            }
            ExitCode::FAILURE
        }
    }
}

/// Install the tracing subscriber; `LEDGER_LOG` overrides the default level
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var(LOG_ENV).ok() {
        Some(_) => EnvFilter::from_env(LOG_ENV),
        None => EnvFilter::new(format!(
            "finance_ledger={},{}={}",
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("ledger - personal finance ledger");
        println!();
        println!("Run 'ledger init' to create your ledger.");
        println!("Run 'ledger --help' for usage information.");
        return Ok(());
    };

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match command {
        Commands::Init => {
            println!("Initializing ledger at: {}", paths.data_dir().display());
            storage.initialize()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Ledgers: Income, Expenses, Savings");
            println!("Run 'ledger entry add <ledger> <amount> <category>' to record an entry.");
        }
        Commands::Entry(cmd) => {
            storage.initialize()?;
            handle_entry_command(&storage, &settings, cmd)?;
        }
        Commands::Budget(cmd) => {
            storage.initialize()?;
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Commands::Report(cmd) => {
            storage.initialize()?;
            handle_report_command(&storage, &settings, cmd)?;
        }
        Commands::Export { ledger, output } => {
            storage.initialize()?;
            let ledger = match ledger.trim().to_lowercase().as_str() {
                "all" => None,
                other => Some(other.parse::<Ledger>()?),
            };

            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create file {}", path.display()))?;
                    let mut writer = BufWriter::new(file);
                    let count = export_ledger_csv(&storage, ledger, &mut writer)?;
                    writer.flush()?;
                    println!("Exported {} entries to: {}", count, path.display());
                }
                None => {
                    let stdout = io::stdout();
                    let mut writer = stdout.lock();
                    export_ledger_csv(&storage, ledger, &mut writer)?;
                }
            }
        }
        Commands::Config => {
            println!("Ledger Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Ledger file:      {}", paths.ledger_file().display());
            println!("Budgets file:     {}", paths.budgets_file().display());
            println!("Initialized:      {}", storage.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Trend window:           {} months", settings.trend_window_months);
            println!(
                "  Trending window:        {} months",
                settings.trending_window_months
            );
            println!("  Trending categories:    top {}", settings.trending_top_n);
        }
    }

    Ok(())
}
