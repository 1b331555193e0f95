//! Transaction record model
//!
//! A record has no identifier of its own. It is addressed by its position in
//! its ledger, and that position shifts whenever an earlier record is deleted.

use serde::{Deserialize, Serialize};

use super::period::Period;

/// One row of a ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Month the record is filed under
    pub period: Period,

    /// Signed amount; the store does not require it to be positive
    pub amount: f64,

    /// Display category, case preserved
    #[serde(default)]
    pub category: String,

    /// Free text
    #[serde(default)]
    pub notes: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        period: Period,
        amount: f64,
        category: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            period,
            amount,
            category: category.into(),
            notes: notes.into(),
        }
    }

    /// Loose category match: trimmed and case-insensitive
    pub fn matches_category(&self, category: &str) -> bool {
        normalize_category(&self.category) == normalize_category(category)
    }
}

/// Normalized form of a category used for loose matching
pub fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}
