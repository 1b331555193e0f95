//! Record display formatting
//!
//! Formats ledger records for terminal output. The index column is the
//! position used by `entry show`, `entry edit` and `entry delete`.

use super::report::{format_money, truncate};
use crate::models::{Ledger, Record};

/// Format a ledger as a table of indexed rows
pub fn format_record_list(ledger: Ledger, records: &[Record], currency: &str) -> String {
    if records.is_empty() {
        return format!("No entries in {}.\n", ledger);
    }

    let category_width = records
        .iter()
        .map(|r| r.category.chars().count())
        .max()
        .unwrap_or(8)
        .clamp(8, 24);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:<7}  {:>14}  {:<category_width$}  {}\n",
        "#",
        "Period",
        "Amount",
        "Category",
        "Notes",
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:->5}  {:-<7}  {:->14}  {:-<category_width$}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        category_width = category_width,
    ));

    for (index, record) in records.iter().enumerate() {
        output.push_str(&format!(
            "{:>5}  {:<7}  {:>14}  {:<category_width$}  {}\n",
            index,
            record.period,
            format_money(record.amount, currency),
            truncate(&record.category, category_width),
            truncate(&record.notes, 40),
            category_width = category_width,
        ));
    }

    let total: f64 = records.iter().map(|r| r.amount).sum();
    output.push_str(&format!(
        "\n{} entries, total {}\n",
        records.len(),
        format_money(total, currency)
    ));

    output
}

/// Format a single record for the detail view
pub fn format_record_details(
    ledger: Ledger,
    index: usize,
    record: &Record,
    currency: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Ledger:   {}\n", ledger));
    output.push_str(&format!("Index:    {}\n", index));
    output.push_str(&format!("Period:   {}\n", record.period));
    output.push_str(&format!("Amount:   {}\n", format_money(record.amount, currency)));
    output.push_str(&format!("Category: {}\n", record.category));
    if !record.notes.is_empty() {
        output.push_str(&format!("Notes:    {}\n", record.notes));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Period;

    fn record(amount: f64, category: &str) -> Record {
        Record::new(Period::new(2025, 3).unwrap(), amount, category, "")
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_record_list(Ledger::Savings, &[], "$"),
            "No entries in Savings.\n"
        );
    }

    #[test]
    fn test_list_shows_indexes_and_total() {
        let records = vec![record(1500.0, "Rent"), record(500.0, "Groceries")];
        let output = format_record_list(Ledger::Expenses, &records, "$");

        assert!(output.contains("    0  2025-03"));
        assert!(output.contains("    1  2025-03"));
        assert!(output.contains("$1,500.00"));
        assert!(output.contains("2 entries, total $2,000.00"));
    }

    #[test]
    fn test_details_skip_empty_notes() {
        let output = format_record_details(Ledger::Income, 3, &record(10.0, "Gift"), "$");
        assert!(output.contains("Index:    3"));
        assert!(!output.contains("Notes:"));
    }
}
