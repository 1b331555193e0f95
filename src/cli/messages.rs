//! User-facing error messages
//!
//! Maps each error kind to a title, a fixed message and recovery hints. The
//! engine's own error text is shown underneath as technical detail.

use std::fmt;

use crate::error::{ErrorKind, LedgerError};

/// A rendered error for the terminal
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorMessage {
    pub title: &'static str,
    pub message: &'static str,
    pub suggestions: &'static [&'static str],
    /// `Display` of the underlying error
    pub technical: String,
}

/// Title and message for an error kind
pub fn template(kind: ErrorKind) -> (&'static str, &'static str) {
    match kind {
        ErrorKind::InvalidAmount => ("Input Error", "Please enter a valid number for the amount."),
        ErrorKind::InvalidCategory => ("Input Error", "Category cannot be empty."),
        ErrorKind::InvalidLedger => ("Input Error", "Please select a valid entry type."),
        ErrorKind::InvalidPeriod => ("Input Error", "Please enter the period as YYYY-MM."),
        ErrorKind::IndexOutOfRange => ("Input Error", "Please select an existing entry."),
        ErrorKind::StorageInit => ("File Error", "The ledger file could not be created."),
        ErrorKind::StorageAccess => ("File Error", "Unable to access the ledger file."),
        ErrorKind::Config => ("Configuration Error", "The settings file could not be read."),
        ErrorKind::Export => ("Operation Error", "The export could not be completed."),
    }
}

/// Recovery hints for an error kind
pub fn suggestions(kind: ErrorKind) -> &'static [&'static str] {
    match kind {
        ErrorKind::InvalidAmount => &["Amounts must be positive numbers, e.g. 500 or 1,250.00"],
        ErrorKind::InvalidLedger => &["Valid types are Income, Expenses and Savings"],
        ErrorKind::IndexOutOfRange => &["Use 'ledger entry list <ledger>' to see entry numbers"],
        ErrorKind::StorageInit => &[
            "Check that you have write permissions to the data directory",
            "If the file is corrupted, move it aside and run 'ledger init'",
        ],
        ErrorKind::StorageAccess => &[
            "Run 'ledger init' if you have not done so yet",
            "Check if the file is open in another program",
        ],
        ErrorKind::Config => &["Check your settings file for syntax errors"],
        ErrorKind::Export => &["Check that the output location is writable"],
        ErrorKind::InvalidCategory | ErrorKind::InvalidPeriod => &[],
    }
}

impl ErrorMessage {
    /// Build the message for an engine error
    pub fn from_error(error: &LedgerError) -> Self {
        let (title, message) = template(error.kind());
        Self {
            title,
            message,
            suggestions: suggestions(error.kind()),
            technical: error.to_string(),
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.title, self.message)?;
        for suggestion in self.suggestions {
            writeln!(f, "  - {}", suggestion)?;
        }
        write!(f, "\nTechnical details:\n{}", self.technical)
    }
}
