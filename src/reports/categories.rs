//! Category reports
//!
//! Lists every category in use and breaks one category down per ledger.
//! Category matching here is exact and case-sensitive.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use crate::display::{format_money, separator};
use crate::error::{LedgerError, LedgerResult};
use crate::models::Ledger;
use crate::storage::{LedgerSet, Storage};

/// Placeholder some spreadsheet exports write for an empty cell
const NULL_ARTIFACT: &str = "nan";

/// Sorted distinct categories across all three ledgers
pub fn all_categories(storage: &Storage) -> LedgerResult<Vec<String>> {
    let set = storage.records.read_all()?;
    Ok(categories_in(&set))
}

/// Sorted distinct categories of an already loaded set
pub fn categories_in(set: &LedgerSet) -> Vec<String> {
    let categories: BTreeSet<&str> = set
        .iter()
        .flat_map(|(_, records)| records.iter().map(|r| r.category.as_str()))
        .filter(|c| !c.trim().is_empty() && *c != NULL_ARTIFACT)
        .collect();

    categories.into_iter().map(String::from).collect()
}

/// Totals of one category inside one ledger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryStats {
    pub total: f64,
    pub average: f64,
    pub count: usize,
}

/// Breakdown of a single category across ledgers
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAnalysis {
    pub category: String,
    /// Only ledgers with at least one matching record
    pub ledgers: BTreeMap<Ledger, CategoryStats>,
}

impl CategoryAnalysis {
    /// Analyze a category from current storage
    pub fn generate(storage: &Storage, category: &str) -> LedgerResult<Self> {
        let set = storage.records.read_all()?;
        Ok(Self::from_set(&set, category))
    }

    pub fn from_set(set: &LedgerSet, category: &str) -> Self {
        let mut ledgers = BTreeMap::new();

        for (ledger, records) in set.iter() {
            let amounts: Vec<f64> = records
                .iter()
                .filter(|r| r.category == category)
                .map(|r| r.amount)
                .collect();

            if amounts.is_empty() {
                continue;
            }

            let total: f64 = amounts.iter().sum();
            ledgers.insert(
                ledger,
                CategoryStats {
                    total,
                    average: total / amounts.len() as f64,
                    count: amounts.len(),
                },
            );
        }

        Self {
            category: category.to_string(),
            ledgers,
        }
    }

    /// True when no ledger uses the category
    pub fn is_empty(&self) -> bool {
        self.ledgers.is_empty()
    }

    /// Format the analysis for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("Category Analysis: {}\n", self.category));
        output.push_str(&separator(50));
        output.push('\n');

        if self.is_empty() {
            output.push_str(&format!("No entries found for '{}'.\n", self.category));
            return output;
        }

        output.push_str(&format!(
            "{:<10} {:>6} {:>15} {:>15}\n",
            "Ledger", "Count", "Total", "Average"
        ));
        for (ledger, stats) in &self.ledgers {
            output.push_str(&format!(
                "{:<10} {:>6} {:>15} {:>15}\n",
                ledger.name(),
                stats.count,
                format_money(stats.total, currency),
                format_money(stats.average, currency)
            ));
        }

        output
    }

    /// Export the analysis to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["Category", "Ledger", "Count", "Total", "Average"])?;

        for (ledger, stats) in &self.ledgers {
            wtr.write_record(&[
                self.category.clone(),
                ledger.name().to_string(),
                stats.count.to_string(),
                format!("{:.2}", stats.total),
                format!("{:.2}", stats.average),
            ])?;
        }

        wtr.flush().map_err(|e| LedgerError::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::models::Period;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.initialize().unwrap();
        (temp_dir, storage)
    }

    fn add(storage: &Storage, ledger: Ledger, amount: f64, category: &str) {
        let period = Some(Period::new(2025, 1).unwrap());
        storage
            .records
            .append(ledger, period, amount, category, "")
            .unwrap();
    }

    #[test]
    fn test_all_categories_sorted_and_distinct() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, Ledger::Expenses, 10.0, "Rent");
        add(&storage, Ledger::Expenses, 10.0, "Groceries");
        add(&storage, Ledger::Income, 10.0, "Salary");
        add(&storage, Ledger::Savings, 10.0, "Rent");
        add(&storage, Ledger::Savings, 10.0, "rent");
        add(&storage, Ledger::Savings, 10.0, "  ");
        add(&storage, Ledger::Savings, 10.0, "nan");

        let categories = all_categories(&storage).unwrap();
        assert_eq!(categories, vec!["Groceries", "Rent", "Salary", "rent"]);
    }

    #[test]
    fn test_all_categories_empty_storage() {
        let (_temp_dir, storage) = create_test_storage();
        assert!(all_categories(&storage).unwrap().is_empty());
    }

    #[test]
    fn test_analysis_per_ledger() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, Ledger::Expenses, 100.0, "Gifts");
        add(&storage, Ledger::Expenses, 50.0, "Gifts");
        add(&storage, Ledger::Income, 20.0, "Gifts");
        add(&storage, Ledger::Income, 999.0, "gifts");

        let analysis = CategoryAnalysis::generate(&storage, "Gifts").unwrap();
        assert_eq!(analysis.ledgers.len(), 2);

        let expenses = analysis.ledgers[&Ledger::Expenses];
        assert_eq!(expenses.total, 150.0);
        assert_eq!(expenses.average, 75.0);
        assert_eq!(expenses.count, 2);
        assert_eq!(analysis.ledgers[&Ledger::Income].total, 20.0);
        assert!(!analysis.ledgers.contains_key(&Ledger::Savings));
    }

    #[test]
    fn test_analysis_no_match() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, Ledger::Expenses, 100.0, "Rent");

        let analysis = CategoryAnalysis::generate(&storage, "Travel").unwrap();
        assert!(analysis.is_empty());
        assert!(analysis
            .format_terminal("$")
            .contains("No entries found for 'Travel'."));
    }

    #[test]
    fn test_analysis_export() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, Ledger::Expenses, 30.0, "Fuel");
        add(&storage, Ledger::Expenses, 15.0, "Fuel");

        let analysis = CategoryAnalysis::generate(&storage, "Fuel").unwrap();
        let mut out = Vec::new();
        analysis.export_csv(&mut out).unwrap();
        let csv_text = String::from_utf8(out).unwrap();
        assert!(csv_text.contains("Fuel,Expenses,2,45.00,22.50"));
    }
}
