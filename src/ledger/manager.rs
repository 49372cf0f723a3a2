use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

use super::account::Account;
use super::summary::Summary;

/// Registry owning all accounts; source of lookups and summaries.
///
/// Account IDs are unique within one manager. Multiple independent managers
/// may coexist; there is no process-wide state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountManager {
    #[serde(default)]
    accounts: Vec<Account>,
}

impl AccountManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account, rejecting duplicate account IDs.
    ///
    /// On error the registry is left untouched.
    pub fn add_account(&mut self, account: Account) -> Result<(), LedgerError> {
        if self.accounts.iter().any(|a| a.id == account.id) {
            return Err(LedgerError::DuplicateAccount(account.id));
        }
        tracing::debug!(account = account.id, name = %account.name, "account registered");
        self.accounts.push(account);
        Ok(())
    }

    /// Removes the account with the given ID, discarding its transactions.
    ///
    /// Returns `true` if a removal occurred, `false` when no account had that
    /// ID.
    pub fn remove_account_by_id(&mut self, id: u64) -> bool {
        match self.accounts.iter().position(|a| a.id == id) {
            Some(index) => {
                self.accounts.remove(index);
                tracing::debug!(account = id, "account removed");
                true
            }
            None => false,
        }
    }

    /// Returns a copy of the registered accounts in registration order.
    ///
    /// Mutating the returned vector or its accounts has no effect on the
    /// manager; to mutate a registered account, use
    /// [`account_by_id_mut`](AccountManager::account_by_id_mut).
    pub fn accounts(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    /// Linear search by ID; `None` when no account matches.
    pub fn account_by_id(&self, id: u64) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn account_by_id_mut(&mut self, id: u64) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    /// Computes the income/expense/balance summary for one account.
    ///
    /// Recomputed from scratch on every call, so the result is always
    /// consistent with the account's current transaction list. Unlike the
    /// removal and lookup operations, a missing account here is an error.
    pub fn summary(&self, account_id: u64) -> Result<Summary, LedgerError> {
        let account = self
            .account_by_id(account_id)
            .ok_or(LedgerError::AccountNotFound(account_id))?;
        Ok(Summary::from_transactions(&account.transactions()))
    }
}
