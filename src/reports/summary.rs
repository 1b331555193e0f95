//! Monthly summary
//!
//! Per-ledger totals, either over one period or over all history. With no
//! period the summary covers everything ever recorded, not the current month.

use std::collections::BTreeMap;
use std::io::Write;

use crate::display::{format_money, separator};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, Period};
use crate::storage::{LedgerSet, Storage};

/// Totals per ledger
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    /// Period the totals are restricted to, `None` for all history
    pub period: Option<Period>,
    /// Sum of amounts per ledger; every ledger is present
    pub totals: BTreeMap<Ledger, f64>,
}

impl MonthlySummary {
    /// Generate a summary from current storage
    pub fn generate(storage: &Storage, period: Option<Period>) -> LedgerResult<Self> {
        let set = storage.records.read_all()?;
        Ok(Self::from_set(&set, period))
    }

    /// Compute a summary from an already loaded ledger set
    pub fn from_set(set: &LedgerSet, period: Option<Period>) -> Self {
        let totals = set
            .iter()
            .map(|(ledger, records)| {
                let total = records
                    .iter()
                    .filter(|r| period.map_or(true, |p| r.period == p))
                    .map(|r| r.amount)
                    .sum();
                (ledger, total)
            })
            .collect();

        Self { period, totals }
    }

    /// Total of one ledger
    pub fn total(&self, ledger: Ledger) -> f64 {
        self.totals.get(&ledger).copied().unwrap_or(0.0)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        match self.period {
            Some(period) => output.push_str(&format!("Summary for {}\n", period)),
            None => output.push_str("Summary (all periods)\n"),
        }
        output.push_str(&separator(30));
        output.push('\n');

        for (ledger, total) in &self.totals {
            output.push_str(&format!(
                "{:<10} {:>19}\n",
                ledger.name(),
                format_money(*total, currency)
            ));
        }

        output
    }

    /// Export the summary to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        let period = self
            .period
            .map(|p| p.to_string())
            .unwrap_or_else(|| "all".to_string());

        wtr.write_record(["Period", "Ledger", "Total"])?;
        for (ledger, total) in &self.totals {
            let total = format!("{:.2}", total);
            wtr.write_record([period.as_str(), ledger.name(), total.as_str()])?;
        }

        wtr.flush().map_err(|e| LedgerError::Export(e.to_string()))
    }
}
