//! Export module
//!
//! Writes ledger records in spreadsheet-compatible CSV.

pub mod csv;

pub use csv::export_ledger_csv;
