use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

use super::transaction::Transaction;

/// A financial account that owns an ordered list of transactions.
///
/// The transaction list is private; all mutation goes through
/// [`add_transaction`](Account::add_transaction) and
/// [`remove_transaction_by_id`](Account::remove_transaction_by_id), which keep
/// transaction IDs unique within the account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl Account {
    /// Creates a new account with no transactions.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            transactions: Vec::new(),
        }
    }

    /// Appends a transaction, rejecting duplicate transaction IDs.
    ///
    /// On error the transaction list is left untouched.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        if self.transactions.iter().any(|t| t.id == transaction.id) {
            return Err(LedgerError::DuplicateTransaction(transaction.id));
        }
        tracing::debug!(
            account = self.id,
            transaction = transaction.id,
            "transaction added"
        );
        self.transactions.push(transaction);
        Ok(())
    }

    /// Removes the transaction with the given ID.
    ///
    /// Returns `true` if a removal occurred, `false` when no transaction had
    /// that ID. Absence is a normal outcome, not an error.
    pub fn remove_transaction_by_id(&mut self, id: u64) -> bool {
        match self.transactions.iter().position(|t| t.id == id) {
            Some(index) => {
                self.transactions.remove(index);
                tracing::debug!(account = self.id, transaction = id, "transaction removed");
                true
            }
            None => false,
        }
    }

    /// Returns a copy of the transactions in insertion order.
    ///
    /// Mutating the returned vector has no effect on the account.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}
