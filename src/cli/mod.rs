//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the record store, budget store and reports.
//! Input checks that the engine leaves to its callers live here.

pub mod budget;
pub mod entry;
pub mod messages;
pub mod report;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub use budget::{handle_budget_command, BudgetCommands};
pub use entry::{handle_entry_command, EntryCommands};
pub use messages::ErrorMessage;
pub use report::{handle_report_command, ReportCommands};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_amount, Period};

/// Parse an amount typed by the user and require it to be positive
pub fn require_positive_amount(text: &str) -> LedgerResult<f64> {
    let amount = parse_amount(text)?;
    if amount <= 0.0 {
        return Err(LedgerError::InvalidAmount(format!(
            "{} (must be positive)",
            text.trim()
        )));
    }
    Ok(amount)
}

/// Reject blank categories; surrounding whitespace is dropped
pub fn require_category(text: &str) -> LedgerResult<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidCategory(
            "category cannot be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Parse a period typed by the user
pub fn parse_period(text: &str) -> LedgerResult<Period> {
    Ok(Period::parse(text)?)
}

/// Create `path` and let `export` write CSV into it
pub(crate) fn write_report_csv<F>(path: &Path, export: F) -> LedgerResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> LedgerResult<()>,
{
    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    export(&mut writer)
}
