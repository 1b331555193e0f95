//! CSV export of ledger records
//!
//! Writes raw rows, one CSV row per record, with the position each record has
//! in its ledger at the time of export.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, Record};
use crate::storage::Storage;

/// Export one ledger, or all three when `ledger` is `None`
pub fn export_ledger_csv<W: Write>(
    storage: &Storage,
    ledger: Option<Ledger>,
    writer: &mut W,
) -> LedgerResult<usize> {
    let set = storage.records.read_all()?;

    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(["Ledger", "Index", "Period", "Amount", "Category", "Notes"])?;

    let mut written = 0;
    for (current, records) in set.iter() {
        if ledger.is_some_and(|l| l != current) {
            continue;
        }
        written += write_records(&mut wtr, current, records)?;
    }

    wtr.flush().map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(written)
}

fn write_records<W: Write>(
    wtr: &mut ::csv::Writer<W>,
    ledger: Ledger,
    records: &[Record],
) -> LedgerResult<usize> {
    for (index, record) in records.iter().enumerate() {
        wtr.write_record(&[
            ledger.name().to_string(),
            index.to_string(),
            record.period.to_string(),
            format!("{:.2}", record.amount),
            record.category.clone(),
            record.notes.clone(),
        ])?;
    }
    Ok(records.len())
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

    #[test]
    fn test_export_all_ledgers() {
        let (_temp_dir, storage) = create_test_storage();
        let period = Some(Period::new(2025, 1).unwrap());
        storage
            .records
            .append(Ledger::Income, period, 5000.0, "Salary", "")
            .unwrap();
        storage
            .records
            .append(Ledger::Expenses, period, 42.5, "Food, drinks", "said \"hi\"")
            .unwrap();

        let mut out = Vec::new();
        let count = export_ledger_csv(&storage, None, &mut out).unwrap();
        assert_eq!(count, 2);

        let csv_string = String::from_utf8(out).unwrap();
        assert!(csv_string.starts_with("Ledger,Index,Period,Amount,Category,Notes\n"));
        assert!(csv_string.contains("Income,0,2025-01,5000.00,Salary,\n"));
        assert!(csv_string.contains("Expenses,0,2025-01,42.50,\"Food, drinks\",\"said \"\"hi\"\"\"\n"));
    }

    #[test]
    fn test_export_single_ledger() {
        let (_temp_dir, storage) = create_test_storage();
        let period = Some(Period::new(2025, 1).unwrap());
        storage
            .records
            .append(Ledger::Income, period, 5000.0, "Salary", "")
            .unwrap();
        storage
            .records
            .append(Ledger::Savings, period, 1000.0, "Emergency Fund", "")
            .unwrap();

        let mut out = Vec::new();
        let count = export_ledger_csv(&storage, Some(Ledger::Savings), &mut out).unwrap();
        assert_eq!(count, 1);

        let csv_string = String::from_utf8(out).unwrap();
        assert!(csv_string.contains("Savings,0,2025-01,1000.00,Emergency Fund,"));
        assert!(!csv_string.contains("Salary"));
    }

    #[test]
    fn test_notes_with_line_breaks_stay_in_one_row() {
        let (_temp_dir, storage) = create_test_storage();
        let period = Some(Period::new(2025, 1).unwrap());
        let notes = "line1\rline2, \"quoted\"\nline3";
        storage
            .records
            .append(Ledger::Expenses, period, 1.0, "Food", notes)
            .unwrap();

        let mut out = Vec::new();
        export_ledger_csv(&storage, None, &mut out).unwrap();

        let mut reader = ::csv::Reader::from_reader(out.as_slice());
        let rows: Vec<::csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "Expenses");
        assert_eq!(&rows[0][4], "Food");
        assert_eq!(&rows[0][5], notes);
    }
}
