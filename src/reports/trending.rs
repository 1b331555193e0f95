//! Trending categories
//!
//! For each ledger, the categories with the largest totals over the trailing
//! window of calendar months. Ties keep the order in which the categories
//! were first seen.

use std::io::Write;

use chrono::{Local, NaiveDate};

use crate::display::{format_money, separator};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, Record};
use crate::storage::{LedgerSet, Storage};

/// Sum of one category inside the window
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Top categories of one ledger
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingSection {
    pub ledger: Ledger,
    pub categories: Vec<CategoryTotal>,
}

/// Trending categories report
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingReport {
    pub window_months: u32,
    pub top_n: usize,
    pub today: NaiveDate,
    /// Ledgers with nothing inside the window are left out
    pub sections: Vec<TrendingSection>,
}

impl TrendingReport {
    /// Generate the report relative to the local date
    pub fn generate(storage: &Storage, window_months: u32, top_n: usize) -> LedgerResult<Self> {
        Self::generate_at(storage, Local::now().date_naive(), window_months, top_n)
    }

    /// Generate the report relative to a fixed date
    pub fn generate_at(
        storage: &Storage,
        today: NaiveDate,
        window_months: u32,
        top_n: usize,
    ) -> LedgerResult<Self> {
        let set = storage.records.read_all()?;
        Ok(Self::from_set(&set, today, window_months, top_n))
    }

    pub fn from_set(set: &LedgerSet, today: NaiveDate, window_months: u32, top_n: usize) -> Self {
        let sections = set
            .iter()
            .filter_map(|(ledger, records)| {
                let in_window: Vec<&Record> = records
                    .iter()
                    .filter(|r| r.period.within_trailing(today, window_months))
                    .collect();

                if in_window.is_empty() {
                    return None;
                }

                Some(TrendingSection {
                    ledger,
                    categories: top_categories(&in_window, top_n),
                })
            })
            .collect();

        Self {
            window_months,
            top_n,
            today,
            sections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Trending Categories (last {} months)\n",
            self.window_months
        ));
        output.push_str(&separator(50));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No entries in this window.\n");
            return output;
        }

        for section in &self.sections {
            output.push_str(&format!("\n{}:\n", section.ledger));
            for (rank, item) in section.categories.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {:<24} {:>15}\n",
                    rank + 1,
                    item.category,
                    format_money(item.total, currency)
                ));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["Ledger", "Rank", "Category", "Total"])?;

        for section in &self.sections {
            for (rank, item) in section.categories.iter().enumerate() {
                wtr.write_record(&[
                    section.ledger.name().to_string(),
                    (rank + 1).to_string(),
                    item.category.clone(),
                    format!("{:.2}", item.total),
                ])?;
            }
        }

        wtr.flush().map_err(|e| LedgerError::Export(e.to_string()))
    }
}

/// Group by category in first-seen order, then rank by total descending
fn top_categories(records: &[&Record], top_n: usize) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for record in records {
        if record.category.trim().is_empty() {
            continue;
        }
        match totals.iter_mut().find(|t| t.category == record.category) {
            Some(existing) => existing.total += record.amount,
            None => totals.push(CategoryTotal {
                category: record.category.clone(),
                total: record.amount,
            }),
        }
    }

    // sort_by is stable, so equal totals stay in first-seen order
    totals.sort_by(|a, b| b.total.total_cmp(&a.total));
    totals.truncate(top_n);
    totals
}
