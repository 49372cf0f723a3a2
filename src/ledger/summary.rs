use std::fmt;

use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TransactionKind};

/// Derived income/expense/balance aggregate for one account at query time.
///
/// Never stored or cached; recomputed from the transaction list on every
/// query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

impl Summary {
    /// Computes the aggregate in a single pass over the transactions.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut income = 0.0;
        let mut expenses = 0.0;
        for transaction in transactions {
            match transaction.kind {
                TransactionKind::Income => income += transaction.amount,
                TransactionKind::Expense => expenses += transaction.amount,
            }
        }
        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "income {:.2}, expenses {:.2}, balance {:.2}",
            self.income, self.expenses, self.balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn transaction(id: u64, amount: f64, kind: TransactionKind) -> Transaction {
        Transaction::new(id, amount, kind, Utc::now(), "test")
    }

    #[test]
    fn empty_transaction_list_sums_to_zero() {
        let summary = Summary::from_transactions(&[]);
        assert_eq!(
            summary,
            Summary {
                income: 0.0,
                expenses: 0.0,
                balance: 0.0
            }
        );
    }

    // The category enum is closed, so the match above is exhaustive: a new
    // kind fails compilation here instead of silently contributing zero.
    #[test]
    fn every_kind_lands_in_exactly_one_bucket() {
        let transactions = vec![
            transaction(1, 30.0, TransactionKind::Income),
            transaction(2, 10.0, TransactionKind::Expense),
        ];
        let summary = Summary::from_transactions(&transactions);
        assert_eq!(summary.income, 30.0);
        assert_eq!(summary.expenses, 10.0);
        assert_eq!(summary.balance, 20.0);
    }
}
