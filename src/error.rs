//! Custom error types for the ledger engine
//!
//! This module defines the error taxonomy for the application using thiserror.
//! The shell maps each [`ErrorKind`] to its own message template; the engine
//! itself only reports structured errors.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Storage could not be created or repaired to hold every ledger
    #[error("Storage initialization failed: {0}")]
    StorageInit(String),

    /// Ledger name is not one of Income, Expenses, Savings
    #[error("Invalid ledger: {0}")]
    InvalidLedger(String),

    /// Amount is not numeric (or, for budgets, not positive)
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Category is empty where one is required
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Period text could not be normalized to YYYY-MM
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Positional address missed the ledger
    #[error("Index {index} out of range for {ledger} ({len} records)")]
    IndexOutOfRange {
        ledger: String,
        index: usize,
        len: usize,
    },

    /// Underlying read/write failure: missing file, permissions, corrupt content
    #[error("Storage error: {0}")]
    StorageAccess(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

/// Discriminant of [`LedgerError`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    StorageInit,
    InvalidLedger,
    InvalidAmount,
    InvalidCategory,
    InvalidPeriod,
    IndexOutOfRange,
    StorageAccess,
    Config,
    Export,
}

impl LedgerError {
    /// Create an out-of-range error for a ledger position
    pub fn index_out_of_range(ledger: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            ledger: ledger.into(),
            index,
            len,
        }
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::StorageInit(_) => ErrorKind::StorageInit,
            Self::InvalidLedger(_) => ErrorKind::InvalidLedger,
            Self::InvalidAmount(_) => ErrorKind::InvalidAmount,
            Self::InvalidCategory(_) => ErrorKind::InvalidCategory,
            Self::InvalidPeriod(_) => ErrorKind::InvalidPeriod,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::StorageAccess(_) => ErrorKind::StorageAccess,
            Self::Config(_) => ErrorKind::Config,
            Self::Export(_) => ErrorKind::Export,
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageAccess(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::StorageAccess(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
