//! Entry CLI commands
//!
//! Implements CLI commands for adding, browsing, editing and deleting ledger
//! records. Records are addressed by the index shown in `entry list`.

use clap::Subcommand;
use tracing::info;

use super::{parse_period, require_category, require_positive_amount};
use crate::config::settings::Settings;
use crate::display::{format_record_details, format_record_list};
use crate::error::LedgerResult;
use crate::models::Ledger;
use crate::reports::all_categories;
use crate::storage::Storage;

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Add a record to a ledger
    Add {
        /// Ledger (income, expenses, savings)
        ledger: Ledger,
        /// Amount (e.g., "1500" or "$1,500.00")
        amount: String,
        /// Category name
        category: String,
        /// Notes
        #[arg(short, long, default_value = "")]
        notes: String,
        /// Period (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },
    /// List the records of a ledger
    List {
        /// Ledger (income, expenses, savings)
        ledger: Ledger,
    },
    /// Show one record
    Show {
        /// Ledger (income, expenses, savings)
        ledger: Ledger,
        /// Entry number from `entry list`
        index: usize,
    },
    /// Replace amount, category and notes of a record
    Edit {
        /// Ledger (income, expenses, savings)
        ledger: Ledger,
        /// Entry number from `entry list`
        index: usize,
        /// New amount
        amount: String,
        /// New category
        category: String,
        /// New notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },
    /// Delete a record
    Delete {
        /// Ledger (income, expenses, savings)
        ledger: Ledger,
        /// Entry number from `entry list`
        index: usize,
    },
    /// List categories in use
    Categories {
        /// Restrict to one ledger
        ledger: Option<Ledger>,
    },
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EntryCommands,
) -> LedgerResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        EntryCommands::Add {
            ledger,
            amount,
            category,
            notes,
            period,
        } => {
            let amount = require_positive_amount(&amount)?;
            let category = require_category(&category)?;
            let period = period.as_deref().map(parse_period).transpose()?;

            let index = storage
                .records
                .append(ledger, period, amount, category, &notes)?;
            let record = storage.records.get_at(ledger, index)?;
            info!(%ledger, index, "entry added");

            println!("Added to {}:", ledger);
            print!("{}", format_record_details(ledger, index, &record, currency));
        }

        EntryCommands::List { ledger } => {
            let records = storage.records.read(ledger)?;
            print!("{}", format_record_list(ledger, &records, currency));
        }

        EntryCommands::Show { ledger, index } => {
            let record = storage.records.get_at(ledger, index)?;
            print!("{}", format_record_details(ledger, index, &record, currency));
        }

        EntryCommands::Edit {
            ledger,
            index,
            amount,
            category,
            notes,
        } => {
            let amount = require_positive_amount(&amount)?;
            let category = require_category(&category)?;

            let record = storage
                .records
                .update_at(ledger, index, amount, category, &notes)?;

            println!("Updated entry {} in {}:", index, ledger);
            print!("{}", format_record_details(ledger, index, &record, currency));
        }

        EntryCommands::Delete { ledger, index } => {
            let removed = storage.records.delete_at(ledger, index)?;
            println!(
                "Deleted entry {} from {}: {} {}",
                index, ledger, removed.period, removed.category
            );
            println!("Entries after it have moved up by one.");
        }

        EntryCommands::Categories { ledger } => {
            let categories = match ledger {
                Some(ledger) => storage.records.ledger_categories(ledger)?,
                None => all_categories(storage)?,
            };

            if categories.is_empty() {
                println!("No categories in use.");
            } else {
                for category in categories {
                    println!("{}", category);
                }
            }
        }
    }

    Ok(())
}
