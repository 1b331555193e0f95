use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "ledger";

fn ledger_command(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("LEDGER_DATA_DIR", dir.path());
    cmd.env_remove("LEDGER_LOG");
    cmd
}

fn add(dir: &TempDir, ledger: &str, amount: &str, category: &str) {
    ledger_command(dir)
        .args(["entry", "add", ledger, amount, category])
        .assert()
        .success();
}

#[test]
fn init_creates_ledger_files() {
    let dir = TempDir::new().unwrap();
    ledger_command(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete!"));

    assert!(dir.path().join("data").join("ledger.json").exists());
    assert!(dir.path().join("data").join("budgets.json").exists());
}

#[test]
fn summary_after_adding_entries() {
    let dir = TempDir::new().unwrap();
    add(&dir, "income", "5000", "Salary");
    add(&dir, "Expenses", "1500", "Rent");
    add(&dir, "expenses", "$500.00", "Groceries");
    add(&dir, "savings", "1000", "Emergency Fund");

    ledger_command(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(contains("Summary (all periods)"))
        .stdout(contains("$5,000.00"))
        .stdout(contains("$2,000.00"))
        .stdout(contains("$1,000.00"));
}

#[test]
fn list_edit_and_delete_by_index() {
    let dir = TempDir::new().unwrap();
    add(&dir, "expenses", "12", "Coffee");
    add(&dir, "expenses", "40", "Books");

    ledger_command(&dir)
        .args(["entry", "edit", "expenses", "1", "45", "Books", "--notes", "paperbacks"])
        .assert()
        .success()
        .stdout(contains("paperbacks"));

    ledger_command(&dir)
        .args(["entry", "delete", "expenses", "0"])
        .assert()
        .success()
        .stdout(contains("Coffee"));

    ledger_command(&dir)
        .args(["entry", "list", "expenses"])
        .assert()
        .success()
        .stdout(contains("1 entries, total $45.00"));
}

#[test]
fn rejects_non_positive_amount() {
    let dir = TempDir::new().unwrap();
    ledger_command(&dir)
        .args(["entry", "add", "income", "0", "Salary"])
        .assert()
        .failure()
        .stderr(contains("Input Error").and(contains("valid number")));
}

#[test]
fn rejects_blank_category() {
    let dir = TempDir::new().unwrap();
    ledger_command(&dir)
        .args(["budget", "set", "  ", "100"])
        .assert()
        .failure()
        .stderr(contains("Category cannot be empty."));
}

#[test]
fn out_of_range_index_is_reported() {
    let dir = TempDir::new().unwrap();
    ledger_command(&dir)
        .args(["entry", "show", "savings", "3"])
        .assert()
        .failure()
        .stderr(contains("Index 3 out of range for Savings (0 records)"));
}

#[test]
fn budget_status_flags_overspending() {
    let dir = TempDir::new().unwrap();
    ledger_command(&dir)
        .args(["budget", "set", "Rent", "500"])
        .assert()
        .success();
    add(&dir, "expenses", "650", "rent");

    ledger_command(&dir)
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(contains("WARNING: Over budget!"))
        .stdout(contains("-$150.00"));
}

#[test]
fn export_all_to_stdout() {
    let dir = TempDir::new().unwrap();
    add(&dir, "income", "5000", "Salary");

    ledger_command(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(contains("Ledger,Index,Period,Amount,Category,Notes"))
        .stdout(contains("Income,0,"))
        .stdout(contains("5000.00,Salary"));
}

#[test]
fn export_rejects_unknown_ledger() {
    let dir = TempDir::new().unwrap();
    ledger_command(&dir)
        .args(["export", "loans"])
        .assert()
        .failure()
        .stderr(contains("Please select a valid entry type."));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();
    ledger_command(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("ledger.json"))
        .stdout(contains("Currency symbol"));
}

#[test]
fn bare_invocation_writes_nothing() {
    let dir = TempDir::new().unwrap();
    ledger_command(&dir)
        .assert()
        .success()
        .stdout(contains("Run 'ledger init'"));

    assert!(!dir.path().join("config.json").exists());
    assert!(!dir.path().join("data").exists());
}
