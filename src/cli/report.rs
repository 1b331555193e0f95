//! CLI commands for reports
//!
//! Provides commands for printing and exporting the aggregation reports.

use clap::Subcommand;
use std::path::PathBuf;

use super::{parse_period, write_report_csv};
use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::models::Ledger;
use crate::reports::{CategoryAnalysis, MonthlySummary, MonthlyTrends, SheetTrend, TrendingReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals per ledger, for one period or all history
    Summary {
        /// Restrict to a period (YYYY-MM); all periods when omitted
        #[arg(short, long)]
        period: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Monthly totals over the most recent periods
    Trend {
        /// Single ledger; all three when omitted
        ledger: Option<Ledger>,

        /// Number of periods to show
        #[arg(short, long)]
        months: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Totals and averages of one category per ledger
    Category {
        /// Category name (exact match)
        name: String,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Top categories over the trailing months
    Trending {
        /// Window in calendar months
        #[arg(short, long)]
        months: Option<u32>,

        /// Show top N categories per ledger
        #[arg(long)]
        top: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary { period, output } => {
            let period = period.as_deref().map(parse_period).transpose()?;
            let report = MonthlySummary::generate(storage, period)?;
            match output {
                Some(path) => {
                    write_report_csv(&path, |w| report.export_csv(w))?;
                    println!("Summary exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(currency)),
            }
        }

        ReportCommands::Trend {
            ledger,
            months,
            output,
        } => {
            let months = months.unwrap_or(settings.trend_window_months);
            let report = match ledger {
                Some(ledger) => MonthlyTrends {
                    window_months: months,
                    series: vec![SheetTrend::generate(storage, ledger, months)],
                },
                None => MonthlyTrends::generate(storage, months),
            };
            match output {
                Some(path) => {
                    write_report_csv(&path, |w| report.export_csv(w))?;
                    println!("Trend exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(currency)),
            }
        }

        ReportCommands::Category { name, output } => {
            let report = CategoryAnalysis::generate(storage, &name)?;
            match output {
                Some(path) => {
                    write_report_csv(&path, |w| report.export_csv(w))?;
                    println!("Category analysis exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(currency)),
            }
        }

        ReportCommands::Trending {
            months,
            top,
            output,
        } => {
            let months = months.unwrap_or(settings.trending_window_months);
            let top = top.unwrap_or(settings.trending_top_n);
            let report = TrendingReport::generate(storage, months, top)?;
            match output {
                Some(path) => {
                    write_report_csv(&path, |w| report.export_csv(w))?;
                    println!("Trending categories exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(currency)),
            }
        }
    }

    Ok(())
}
