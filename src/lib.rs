#![doc(test(attr(deny(warnings))))]

//! Ledgerbook offers a minimal in-memory personal-finance ledger: named
//! accounts holding dated income/expense transactions, with per-account
//! income, expense, and balance summaries computed on demand.

pub mod cli;
pub mod errors;
pub mod ledger;
pub mod utils;

pub use errors::LedgerError;
pub use ledger::{Account, AccountManager, Summary, Transaction, TransactionKind};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledgerbook tracing initialized.");
    });
}
