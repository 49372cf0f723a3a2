use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("transaction with id {0} already exists")]
    DuplicateTransaction(u64),
    #[error("account with id {0} already exists")]
    DuplicateAccount(u64),
    #[error("account with id {0} not found")]
    AccountNotFound(u64),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
