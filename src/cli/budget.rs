//! Budget CLI commands
//!
//! Implements CLI commands for setting monthly budgets per category and
//! comparing them against Expenses.

use clap::Subcommand;
use std::path::PathBuf;
use tracing::info;

use super::{parse_period, require_category, require_positive_amount, write_report_csv};
use crate::config::settings::Settings;
use crate::display::format_money;
use crate::error::LedgerResult;
use crate::models::Period;
use crate::reports::{unused_budgets, BudgetStatusReport};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set (or replace) the monthly budget of a category
    Set {
        /// Category name, matched against Expenses ignoring case
        category: String,
        /// Amount (e.g., "500" or "500.00")
        amount: String,
    },

    /// Remove the budget of a category
    Remove {
        /// Category name
        category: String,
    },

    /// List all budgets
    List,

    /// Compare budgets against Expenses for a period
    Status {
        /// Budget period (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove budgets with no Expenses in the trailing window
    ClearUnused {
        /// Only show which budgets would be removed
        #[arg(long)]
        dry_run: bool,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let amount = require_positive_amount(&amount)?;
            let category = require_category(&category)?;
            storage.budgets.set(category, amount)?;
            println!(
                "Budget for '{}' set to {}",
                category,
                format_money(amount, currency)
            );
        }

        BudgetCommands::Remove { category } => {
            if storage.budgets.remove(&category)? {
                println!("Removed budget for '{}'", category);
            } else {
                println!("No budget set for '{}'", category);
            }
        }

        BudgetCommands::List => match storage.budgets.list()? {
            None => println!("No budgets set."),
            Some(budgets) => {
                println!("{:<30} {:>15}", "Category", "Budget");
                println!("{}", "-".repeat(46));
                for (category, amount) in &budgets {
                    println!("{:<30} {:>15}", category, format_money(*amount, currency));
                }
            }
        },

        BudgetCommands::Status { period, output } => {
            let period = match period {
                Some(text) => parse_period(&text)?,
                None => Period::current(),
            };

            let report = BudgetStatusReport::generate(storage, period)?;
            match output {
                Some(path) => {
                    write_report_csv(&path, |w| report.export_csv(w))?;
                    println!("Budget status exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(currency)),
            }
        }

        BudgetCommands::ClearUnused { dry_run } => {
            let window = settings.trending_window_months;
            let unused = unused_budgets(storage, window)?;
            if unused.is_empty() {
                println!("No unused budgets in the last {} months.", window);
                return Ok(());
            }

            for category in &unused {
                if dry_run {
                    println!("Would remove budget for '{}'", category);
                } else {
                    storage.budgets.remove(category)?;
                    println!("Removed budget for '{}'", category);
                }
            }

            if !dry_run {
                info!(count = unused.len(), "cleared unused budgets");
            }
        }
    }

    Ok(())
}
