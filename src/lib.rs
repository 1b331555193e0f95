//! finance-ledger - personal income, expense and savings ledger
//!
//! This library provides the engine behind the `ledger` command: three
//! ordered ledgers of monthly records, per-category budgets, and read-only
//! reports computed from them. Everything is persisted as JSON documents
//! that are rewritten in full on every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path and settings management
//! - `error`: Error taxonomy shared by every operation
//! - `models`: Periods, ledgers, records and amount parsing
//! - `storage`: Record store and budget store on top of JSON files
//! - `reports`: Summaries, trends, category and budget reports
//! - `display`: Terminal formatting helpers
//! - `export`: CSV export of raw records
//! - `cli`: Command handlers used by the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_ledger::config::paths::LedgerPaths;
//! use finance_ledger::models::Ledger;
//! use finance_ledger::reports::MonthlySummary;
//! use finance_ledger::storage::Storage;
//!
//! let storage = Storage::new(LedgerPaths::new()?)?;
//! storage.initialize()?;
//! storage.records.append(Ledger::Income, None, 5000.0, "Salary", "")?;
//! let summary = MonthlySummary::generate(&storage, None)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
