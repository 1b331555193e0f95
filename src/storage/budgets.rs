//! Budget repository for JSON storage
//!
//! Budgets live in `budgets.json` as a flat map of category name to amount.
//! Category names are stored exactly as given; loose matching against
//! transactions happens in the budget status report.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};

use super::file_io::{read_json_required, write_json_atomic};

/// Category name to budget amount
pub type BudgetMap = BTreeMap<String, f64>;

/// Repository for category budgets
pub struct BudgetStore {
    path: PathBuf,
}

impl BudgetStore {
    /// Create a new budget repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty budget document if none exists
    pub fn initialize(&self) -> LedgerResult<()> {
        if self.path.exists() {
            // Validate only; an existing mapping is never rewritten here
            let _: BudgetMap = read_json_required(&self.path)?;
            return Ok(());
        }

        info!("creating budget storage at {}", self.path.display());
        write_json_atomic(&self.path, &BudgetMap::new())
    }

    /// Insert or overwrite the budget for a category
    pub fn set(&self, category: &str, amount: f64) -> LedgerResult<()> {
        if category.trim().is_empty() {
            return Err(LedgerError::InvalidCategory(
                "budget category cannot be empty".into(),
            ));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(format!(
                "budget must be a positive number, got {}",
                amount
            )));
        }

        let mut budgets = self.load()?;
        budgets.insert(category.to_string(), amount);
        write_json_atomic(&self.path, &budgets)?;

        debug!(category, amount, "set budget");
        Ok(())
    }

    /// Remove the budget for a category
    ///
    /// Removing a category without a budget is not an error. Returns whether
    /// an entry was actually removed.
    pub fn remove(&self, category: &str) -> LedgerResult<bool> {
        let mut budgets = self.load()?;
        let removed = budgets.remove(category).is_some();
        write_json_atomic(&self.path, &budgets)?;

        debug!(category, removed, "removed budget");
        Ok(removed)
    }

    /// All budgets, or `None` when no budget has been set
    pub fn list(&self) -> LedgerResult<Option<BudgetMap>> {
        let budgets = self.load()?;
        Ok(if budgets.is_empty() { None } else { Some(budgets) })
    }

    fn load(&self) -> LedgerResult<BudgetMap> {
        read_json_required(&self.path)
    }
}
