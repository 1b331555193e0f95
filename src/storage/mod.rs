//! Storage layer for the ledger
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. There is no internal locking: callers must serialize their own
//! calls, and two processes writing the same files race with last-writer-wins
//! at the granularity of a whole document.

pub mod budgets;
pub mod file_io;
pub mod records;

pub use budgets::{BudgetMap, BudgetStore};
pub use file_io::{json_file_valid, read_json_required, write_json_atomic};
pub use records::{LedgerSet, RecordStore};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: LedgerPaths,
    pub records: RecordStore,
    pub budgets: BudgetStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            records: RecordStore::new(paths.ledger_file()),
            budgets: BudgetStore::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Create or repair both documents
    pub fn initialize(&self) -> Result<(), LedgerError> {
        self.records.initialize()?;
        self.budgets.initialize()?;
        Ok(())
    }

    /// Check if the ledger document exists and parses
    pub fn is_initialized(&self) -> bool {
        json_file_valid(self.paths.ledger_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());

        storage.initialize().unwrap();
        assert!(storage.is_initialized());
        assert!(storage.paths().budgets_file().exists());
    }
}
