//! Demonstration walkthrough of the ledger API.
//!
//! A consumer of the library surface, not part of it: builds sample data,
//! exercises every operation, and prints human-readable results.

use colored::Colorize;

use crate::errors::LedgerError;
use crate::ledger::{Account, AccountManager, Transaction, TransactionKind};

fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold());
}

/// Runs the sample walkthrough against a fresh manager.
pub fn run_demo() -> Result<(), LedgerError> {
    let mut manager = AccountManager::new();

    let mut account = Account::new(1, "Main account");
    let now = chrono::Utc::now();
    let sample = [
        (1, 50_000.0, TransactionKind::Income, "Salary"),
        (2, 15_000.0, TransactionKind::Expense, "Rent"),
        (3, 5_000.0, TransactionKind::Expense, "Groceries"),
        (4, 10_000.0, TransactionKind::Income, "Freelance"),
    ];
    for (id, amount, kind, description) in sample {
        account.add_transaction(Transaction::new(id, amount, kind, now, description))?;
    }
    manager.add_account(account)?;

    section("Accounts");
    for account in manager.accounts() {
        println!(
            "#{} {} ({} transactions)",
            account.id,
            account.name,
            account.transaction_count()
        );
    }

    section("Lookup by id");
    match manager.account_by_id(1) {
        Some(account) => println!("found account: {}", account.name.green()),
        None => println!("{}", "account not found".red()),
    }

    section("Summary");
    let summary = manager.summary(1)?;
    println!("{summary}");

    section("Remove transaction 2 (rent)");
    let removed = manager
        .account_by_id_mut(1)
        .map(|account| account.remove_transaction_by_id(2))
        .unwrap_or(false);
    println!("removed: {removed}");
    println!("updated summary: {}", manager.summary(1)?);

    section("Remove account 1");
    let removed = manager.remove_account_by_id(1);
    println!("removed: {removed}");
    println!("accounts left: {}", manager.accounts().len());
    match manager.summary(1) {
        Ok(_) => println!("{}", "summary unexpectedly still available".red()),
        Err(err) => println!("summary now fails: {}", err.to_string().yellow()),
    }

    section("Final state");
    println!("{}", serde_json::to_string_pretty(&manager)?);

    Ok(())
}
