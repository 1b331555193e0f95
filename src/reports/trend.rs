//! Monthly trend series
//!
//! Period-by-period totals per ledger for the most recent months, the data
//! behind a monthly bar chart. Failing to read storage never fails a trend:
//! the affected series comes back empty and the problem is logged.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use tracing::warn;

use crate::display::{format_bar, format_money, separator};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, Period, Record};
use crate::storage::{LedgerSet, Storage};

/// Total of one ledger in one period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub period: Period,
    pub amount: f64,
}

/// Time series of one ledger, oldest period first
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTrend {
    pub ledger: Ledger,
    pub points: Vec<TrendPoint>,
}

impl SheetTrend {
    /// Trend of a ledger over its last `window_months` recorded periods
    pub fn generate(storage: &Storage, ledger: Ledger, window_months: usize) -> Self {
        match storage.records.read(ledger) {
            Ok(records) => Self::from_records(ledger, &records, window_months),
            Err(e) => {
                warn!(%ledger, "treating unreadable ledger as empty: {}", e);
                Self::empty(ledger)
            }
        }
    }

    /// Group, sum and keep the latest `window_months` periods
    pub fn from_records(ledger: Ledger, records: &[Record], window_months: usize) -> Self {
        let mut by_period: BTreeMap<Period, f64> = BTreeMap::new();
        for record in records {
            *by_period.entry(record.period).or_insert(0.0) += record.amount;
        }

        let skip = by_period.len().saturating_sub(window_months);
        let points = by_period
            .into_iter()
            .skip(skip)
            .map(|(period, amount)| TrendPoint { period, amount })
            .collect();

        Self { ledger, points }
    }

    fn empty(ledger: Ledger) -> Self {
        Self {
            ledger,
            points: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Amount for a period, if the series has it
    pub fn amount_in(&self, period: Period) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.period == period)
            .map(|p| p.amount)
    }
}

/// Trends of all three ledgers side by side
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTrends {
    pub window_months: usize,
    pub series: Vec<SheetTrend>,
}

impl MonthlyTrends {
    /// Trends of every ledger from one read of storage
    pub fn generate(storage: &Storage, window_months: usize) -> Self {
        match storage.records.read_all() {
            Ok(set) => Self::from_set(&set, window_months),
            Err(e) => {
                warn!("treating unreadable ledgers as empty: {}", e);
                Self {
                    window_months,
                    series: Ledger::ALL.into_iter().map(SheetTrend::empty).collect(),
                }
            }
        }
    }

    pub fn from_set(set: &LedgerSet, window_months: usize) -> Self {
        let series = set
            .iter()
            .map(|(ledger, records)| SheetTrend::from_records(ledger, records, window_months))
            .collect();

        Self {
            window_months,
            series,
        }
    }

    /// Every period appearing in any series, ascending
    pub fn periods(&self) -> Vec<Period> {
        let periods: BTreeSet<Period> = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.period))
            .collect();
        periods.into_iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(SheetTrend::is_empty)
    }

    /// Format the trends as a table with one bar per ledger and period
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Monthly Financial Summary (last {} months)\n",
            self.window_months
        ));
        output.push_str(&separator(60));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No entries recorded yet.\n");
            return output;
        }

        let max = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.amount))
            .fold(0.0_f64, f64::max);

        for period in self.periods() {
            output.push_str(&format!("{}\n", period));
            for trend in &self.series {
                if let Some(amount) = trend.amount_in(period) {
                    output.push_str(&format!(
                        "  {:<9} {:>14}  {}\n",
                        trend.ledger.name(),
                        format_money(amount, currency),
                        format_bar(amount, max, 20)
                    ));
                }
            }
        }

        output
    }

    /// Export the trends to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["Period", "Ledger", "Amount"])?;

        for trend in &self.series {
            for point in &trend.points {
                let period = point.period.to_string();
                let amount = format!("{:.2}", point.amount);
                wtr.write_record([period.as_str(), trend.ledger.name(), amount.as_str()])?;
            }
        }

        wtr.flush().map_err(|e| LedgerError::Export(e.to_string()))
    }
}
