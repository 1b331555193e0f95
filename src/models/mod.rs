//! Core data models for the ledger
//!
//! Ledgers, calendar periods, transaction records and amount coercion.

pub mod amount;
pub mod ledger;
pub mod period;
pub mod record;

pub use amount::{ensure_finite, parse_amount};
pub use ledger::Ledger;
pub use period::{Period, PeriodParseError};
pub use record::{normalize_category, Record};
