//! Budget status report
//!
//! Compares each budget against the Expenses filed under one period. A
//! budget applies to every Expenses record whose category matches it after
//! trimming and ignoring case.

use std::collections::BTreeSet;
use std::io::Write;

use chrono::{Local, NaiveDate};

use crate::display::{format_money, separator};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{normalize_category, Ledger, Period, Record};
use crate::storage::{BudgetMap, Storage};

/// One budget compared to its spending
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLine {
    pub category: String,
    pub budget: f64,
    pub spent: f64,
    pub remaining: f64,
    pub over_budget: bool,
}

impl BudgetLine {
    fn new(category: &str, budget: f64, spent: f64) -> Self {
        let remaining = budget - spent;
        Self {
            category: category.to_string(),
            budget,
            spent,
            remaining,
            over_budget: remaining < 0.0,
        }
    }
}

/// Budget status for one period
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatusReport {
    pub period: Period,
    /// One line per budget, in budget order
    pub lines: Vec<BudgetLine>,
}

impl BudgetStatusReport {
    /// Generate the status of every budget for a period
    pub fn generate(storage: &Storage, period: Period) -> LedgerResult<Self> {
        let budgets = storage.budgets.list()?.unwrap_or_default();
        let expenses = storage.records.read(Ledger::Expenses)?;
        Ok(Self::from_parts(&budgets, &expenses, period))
    }

    pub fn from_parts(budgets: &BudgetMap, expenses: &[Record], period: Period) -> Self {
        let lines = budgets
            .iter()
            .map(|(category, budget)| {
                let spent = expenses
                    .iter()
                    .filter(|r| r.period == period && r.matches_category(category))
                    .map(|r| r.amount)
                    .sum();
                BudgetLine::new(category, *budget, spent)
            })
            .collect();

        Self { period, lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_budget(&self) -> f64 {
        self.lines.iter().map(|l| l.budget).sum()
    }

    pub fn total_spent(&self) -> f64 {
        self.lines.iter().map(|l| l.spent).sum()
    }

    /// Categories that went over budget
    pub fn over_budget(&self) -> Vec<&BudgetLine> {
        self.lines.iter().filter(|l| l.over_budget).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("Budget Status for {}\n", self.period));
        output.push_str(&separator(50));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No budgets set.\n");
            return output;
        }

        for line in &self.lines {
            output.push_str(&format!("{}\n", line.category));
            output.push_str(&format!(
                "  Budget:    {:>15}\n",
                format_money(line.budget, currency)
            ));
            output.push_str(&format!(
                "  Spent:     {:>15}\n",
                format_money(line.spent, currency)
            ));
            output.push_str(&format!(
                "  Remaining: {:>15}\n",
                format_money(line.remaining, currency)
            ));
            if line.over_budget {
                output.push_str("  WARNING: Over budget!\n");
            }
        }

        output.push_str(&separator(50));
        output.push('\n');
        output.push_str(&format!(
            "Total: {} of {} spent\n",
            format_money(self.total_spent(), currency),
            format_money(self.total_budget(), currency)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record([
            "Period",
            "Category",
            "Budget",
            "Spent",
            "Remaining",
            "Over Budget",
        ])?;

        let period = self.period.to_string();
        for line in &self.lines {
            wtr.write_record(&[
                period.clone(),
                line.category.clone(),
                format!("{:.2}", line.budget),
                format!("{:.2}", line.spent),
                format!("{:.2}", line.remaining),
                line.over_budget.to_string(),
            ])?;
        }

        wtr.flush().map_err(|e| LedgerError::Export(e.to_string()))
    }
}

/// Budgets with no Expenses record inside the trailing window
pub fn unused_budgets(storage: &Storage, window_months: u32) -> LedgerResult<Vec<String>> {
    unused_budgets_at(storage, Local::now().date_naive(), window_months)
}

/// [`unused_budgets`] relative to a fixed date
pub fn unused_budgets_at(
    storage: &Storage,
    today: NaiveDate,
    window_months: u32,
) -> LedgerResult<Vec<String>> {
    let Some(budgets) = storage.budgets.list()? else {
        return Ok(Vec::new());
    };
    let expenses = storage.records.read(Ledger::Expenses)?;

    let active: BTreeSet<String> = expenses
        .iter()
        .filter(|r| r.period.within_trailing(today, window_months))
        .map(|r| normalize_category(&r.category))
        .collect();

    Ok(budgets
        .into_keys()
        .filter(|category| !active.contains(&normalize_category(category)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.initialize().unwrap();
        (temp_dir, storage)
    }

    fn spend(storage: &Storage, period: Period, amount: f64, category: &str) {
        storage
            .records
            .append(Ledger::Expenses, Some(period), amount, category, "")
            .unwrap();
    }

    #[test]
    fn test_rent_budget_goes_over() {
        let (_temp_dir, storage) = create_test_storage();
        let current = Period::new(2025, 6).unwrap();
        let other = Period::new(2025, 5).unwrap();

        storage.budgets.set("Rent", 500.0).unwrap();
        spend(&storage, current, 300.0, "Rent");
        spend(&storage, current, 100.0, " rent ");
        spend(&storage, other, 1000.0, "Rent");

        let report = BudgetStatusReport::generate(&storage, current).unwrap();
        let line = &report.lines[0];
        assert_eq!(line.spent, 400.0);
        assert_eq!(line.remaining, 100.0);
        assert!(!line.over_budget);

        spend(&storage, current, 200.0, "RENT");
        let report = BudgetStatusReport::generate(&storage, current).unwrap();
        let line = &report.lines[0];
        assert_eq!(line.remaining, -100.0);
        assert!(line.over_budget);
        assert!(report.format_terminal("$").contains("WARNING: Over budget!"));
    }

    #[test]
    fn test_unmatched_budget_reports_zero() {
        let (_temp_dir, storage) = create_test_storage();
        storage.budgets.set("Travel", 250.0).unwrap();

        let report = BudgetStatusReport::generate(&storage, Period::new(2025, 6).unwrap()).unwrap();
        assert_eq!(report.lines.len(), 1);
        assert_eq!(report.lines[0].spent, 0.0);
        assert_eq!(report.lines[0].remaining, 250.0);
        assert!(report.over_budget().is_empty());
    }

    #[test]
    fn test_no_budgets() {
        let (_temp_dir, storage) = create_test_storage();
        let report = BudgetStatusReport::generate(&storage, Period::new(2025, 6).unwrap()).unwrap();
        assert!(report.is_empty());
        assert!(report.format_terminal("$").contains("No budgets set."));
    }

    #[test]
    fn test_export_csv() {
        let (_temp_dir, storage) = create_test_storage();
        let period = Period::new(2025, 6).unwrap();
        storage.budgets.set("Food", 100.0).unwrap();
        spend(&storage, period, 120.0, "Food");

        let report = BudgetStatusReport::generate(&storage, period).unwrap();
        let mut out = Vec::new();
        report.export_csv(&mut out).unwrap();
        let csv_text = String::from_utf8(out).unwrap();
        assert!(csv_text.contains("2025-06,Food,100.00,120.00,-20.00,true"));
    }

    #[test]
    fn test_unused_budgets() {
        let (_temp_dir, storage) = create_test_storage();
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        storage.budgets.set("Rent", 500.0).unwrap();
        storage.budgets.set("Gym", 40.0).unwrap();
        storage.budgets.set("Travel", 300.0).unwrap();
        spend(&storage, Period::new(2025, 5).unwrap(), 500.0, "rent");
        spend(&storage, Period::new(2024, 1).unwrap(), 40.0, "Gym");

        let unused = unused_budgets_at(&storage, today, 3).unwrap();
        assert_eq!(unused, vec!["Gym", "Travel"]);
    }

    #[test]
    fn test_unused_budgets_without_budgets() {
        let (_temp_dir, storage) = create_test_storage();
        assert!(unused_budgets(&storage, 3).unwrap().is_empty());
    }
}
