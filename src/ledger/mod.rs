//! Ledger domain models: accounts, transactions, and derived summaries.

pub mod account;
pub mod manager;
pub mod summary;
pub mod transaction;

pub use account::Account;
pub use manager::AccountManager;
pub use summary::Summary;
pub use transaction::{Transaction, TransactionKind};
