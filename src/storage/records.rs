//! Record repository for JSON storage
//!
//! All three ledgers live together in `ledger.json`:
//!
//! ```json
//! { "Income": [ {"period": "2025-01", "amount": 5000.0, "category": "Salary", "notes": ""} ],
//!   "Expenses": [], "Savings": [] }
//! ```
//!
//! Nothing is cached. Every call reads the document, and every mutation loads
//! the whole document, changes one ledger in memory and writes all of it back.
//! Records are addressed by position only; an index taken before a delete on
//! the same ledger may point at a different record afterwards.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ensure_finite, Ledger, Period, Record};

use super::file_io::{read_json_required, write_json_atomic};

/// On-disk layout of ledger.json
///
/// Tables that are not one of the three ledgers are carried through rewrites
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LedgerDocument {
    #[serde(rename = "Income", default, skip_serializing_if = "Option::is_none")]
    income: Option<Vec<Record>>,

    #[serde(rename = "Expenses", default, skip_serializing_if = "Option::is_none")]
    expenses: Option<Vec<Record>>,

    #[serde(rename = "Savings", default, skip_serializing_if = "Option::is_none")]
    savings: Option<Vec<Record>>,

    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

impl LedgerDocument {
    fn empty() -> Self {
        Self {
            income: Some(Vec::new()),
            expenses: Some(Vec::new()),
            savings: Some(Vec::new()),
            other: serde_json::Map::new(),
        }
    }

    fn table(&self, ledger: Ledger) -> Option<&Vec<Record>> {
        match ledger {
            Ledger::Income => self.income.as_ref(),
            Ledger::Expenses => self.expenses.as_ref(),
            Ledger::Savings => self.savings.as_ref(),
        }
    }

    fn table_slot(&mut self, ledger: Ledger) -> &mut Option<Vec<Record>> {
        match ledger {
            Ledger::Income => &mut self.income,
            Ledger::Expenses => &mut self.expenses,
            Ledger::Savings => &mut self.savings,
        }
    }

    fn missing(&self) -> Vec<Ledger> {
        Ledger::ALL
            .into_iter()
            .filter(|ledger| self.table(*ledger).is_none())
            .collect()
    }

    fn records(&self, ledger: Ledger) -> LedgerResult<&Vec<Record>> {
        self.table(ledger).ok_or_else(|| missing_table(ledger))
    }

    fn records_mut(&mut self, ledger: Ledger) -> LedgerResult<&mut Vec<Record>> {
        self.table_slot(ledger)
            .as_mut()
            .ok_or_else(|| missing_table(ledger))
    }

    fn into_set(self) -> LedgerResult<LedgerSet> {
        Ok(LedgerSet {
            income: self.income.ok_or_else(|| missing_table(Ledger::Income))?,
            expenses: self.expenses.ok_or_else(|| missing_table(Ledger::Expenses))?,
            savings: self.savings.ok_or_else(|| missing_table(Ledger::Savings))?,
        })
    }
}

fn missing_table(ledger: Ledger) -> LedgerError {
    LedgerError::StorageAccess(format!(
        "Ledger table '{}' is missing from storage; run init to repair it",
        ledger
    ))
}

/// A snapshot of all three ledgers read in one go
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSet {
    income: Vec<Record>,
    expenses: Vec<Record>,
    savings: Vec<Record>,
}

impl LedgerSet {
    /// Records of one ledger in insertion order
    pub fn get(&self, ledger: Ledger) -> &[Record] {
        match ledger {
            Ledger::Income => &self.income,
            Ledger::Expenses => &self.expenses,
            Ledger::Savings => &self.savings,
        }
    }

    /// Iterate ledgers in Income, Expenses, Savings order
    pub fn iter(&self) -> impl Iterator<Item = (Ledger, &[Record])> + '_ {
        Ledger::ALL.into_iter().map(move |ledger| (ledger, self.get(ledger)))
    }

    /// Total number of records across all ledgers
    pub fn len(&self) -> usize {
        self.income.len() + self.expenses.len() + self.savings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Repository for the three ledgers
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a new record repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure all three ledgers exist on disk
    ///
    /// Creates the document when absent and adds any missing ledger as an
    /// empty table, leaving every other table as it was. A document that
    /// cannot be parsed is reported rather than overwritten.
    pub fn initialize(&self) -> LedgerResult<()> {
        if !self.path.exists() {
            info!("creating ledger storage at {}", self.path.display());
            write_json_atomic(&self.path, &LedgerDocument::empty())
                .map_err(|e| LedgerError::StorageInit(e.to_string()))?;
        } else {
            let mut document: LedgerDocument = read_json_required(&self.path)
                .map_err(|e| LedgerError::StorageInit(e.to_string()))?;

            let missing = document.missing();
            if !missing.is_empty() {
                info!("adding missing ledgers {:?} to {}", missing, self.path.display());
                for ledger in missing {
                    *document.table_slot(ledger) = Some(Vec::new());
                }
                write_json_atomic(&self.path, &document)
                    .map_err(|e| LedgerError::StorageInit(e.to_string()))?;
            }
        }

        let document: LedgerDocument = read_json_required(&self.path)
            .map_err(|e| LedgerError::StorageInit(e.to_string()))?;
        let still_missing = document.missing();
        if !still_missing.is_empty() {
            return Err(LedgerError::StorageInit(format!(
                "Failed to create ledgers {:?}",
                still_missing
            )));
        }

        Ok(())
    }

    /// Append a record to the end of a ledger
    ///
    /// `period` defaults to the current month. Any finite amount is accepted,
    /// including zero and negatives. Returns the index of the new record.
    pub fn append(
        &self,
        ledger: Ledger,
        period: Option<Period>,
        amount: f64,
        category: &str,
        notes: &str,
    ) -> LedgerResult<usize> {
        let amount = ensure_finite(amount)?;
        let period = period.unwrap_or_else(Period::current);
        let record = Record::new(period, amount, category, notes);

        self.modify(ledger, |records| {
            records.push(record);
            let index = records.len() - 1;
            debug!(%ledger, index, %period, amount, "appended record");
            Ok(index)
        })
    }

    /// Every record of a ledger, in insertion order
    pub fn read(&self, ledger: Ledger) -> LedgerResult<Vec<Record>> {
        let document = self.load()?;
        document.records(ledger).cloned()
    }

    /// All three ledgers from a single read of the document
    pub fn read_all(&self) -> LedgerResult<LedgerSet> {
        self.load()?.into_set()
    }

    /// The record at a position
    pub fn get_at(&self, ledger: Ledger, index: usize) -> LedgerResult<Record> {
        let document = self.load()?;
        let records = document.records(ledger)?;
        records
            .get(index)
            .cloned()
            .ok_or_else(|| LedgerError::index_out_of_range(ledger.name(), index, records.len()))
    }

    /// Replace amount, category and notes at a position; the period is kept
    pub fn update_at(
        &self,
        ledger: Ledger,
        index: usize,
        amount: f64,
        category: &str,
        notes: &str,
    ) -> LedgerResult<Record> {
        let amount = ensure_finite(amount)?;

        self.modify(ledger, |records| {
            let len = records.len();
            let record = records
                .get_mut(index)
                .ok_or_else(|| LedgerError::index_out_of_range(ledger.name(), index, len))?;

            record.amount = amount;
            record.category = category.to_string();
            record.notes = notes.to_string();
            debug!(%ledger, index, amount, "updated record");
            Ok(record.clone())
        })
    }

    /// Remove the record at a position; later records shift down by one
    pub fn delete_at(&self, ledger: Ledger, index: usize) -> LedgerResult<Record> {
        self.modify(ledger, |records| {
            if index >= records.len() {
                return Err(LedgerError::index_out_of_range(
                    ledger.name(),
                    index,
                    records.len(),
                ));
            }
            let removed = records.remove(index);
            debug!(%ledger, index, "deleted record");
            Ok(removed)
        })
    }

    /// Sorted distinct non-empty categories used in one ledger
    pub fn ledger_categories(&self, ledger: Ledger) -> LedgerResult<Vec<String>> {
        let records = self.read(ledger)?;
        let categories: BTreeSet<String> = records
            .into_iter()
            .map(|r| r.category)
            .filter(|c| !c.trim().is_empty())
            .collect();
        Ok(categories.into_iter().collect())
    }

    fn load(&self) -> LedgerResult<LedgerDocument> {
        read_json_required(&self.path)
    }

    /// Load everything, apply `op` to one ledger, write everything back.
    /// Nothing is written when `op` fails.
    fn modify<T>(
        &self,
        ledger: Ledger,
        op: impl FnOnce(&mut Vec<Record>) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        let mut document = self.load()?;
        if let Some(missing) = document.missing().first() {
            return Err(missing_table(*missing));
        }

        let result = op(document.records_mut(ledger)?)?;
        write_json_atomic(&self.path, &document)?;
        Ok(result)
    }
}
