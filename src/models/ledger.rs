//! The three fixed ledgers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// One of the three transaction ledgers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ledger {
    Income,
    Expenses,
    Savings,
}

impl Ledger {
    /// Every ledger, in storage and report order
    pub const ALL: [Ledger; 3] = [Ledger::Income, Ledger::Expenses, Ledger::Savings];

    /// Canonical name, also the table name in storage
    pub const fn name(&self) -> &'static str {
        match self {
            Ledger::Income => "Income",
            Ledger::Expenses => "Expenses",
            Ledger::Savings => "Savings",
        }
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ledger {
    type Err = LedgerError;

    /// Parse a ledger name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Ledger::ALL
            .into_iter()
            .find(|ledger| ledger.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                LedgerError::InvalidLedger(format!(
                    "'{}' (expected one of Income, Expenses, Savings)",
                    wanted
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_names() {
        assert_eq!("Income".parse::<Ledger>().unwrap(), Ledger::Income);
        assert_eq!(" expenses ".parse::<Ledger>().unwrap(), Ledger::Expenses);
        assert_eq!("SAVINGS".parse::<Ledger>().unwrap(), Ledger::Savings);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Assets".parse::<Ledger>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLedger);
    }

    #[test]
    fn test_display_matches_table_name() {
        let names: Vec<_> = Ledger::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(names, vec!["Income", "Expenses", "Savings"]);
    }
}
