use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single dated money movement, tagged as income or expense.
///
/// Transactions are plain values: created by the caller, added to exactly one
/// [`Account`](super::Account), and never mutated in place. The `amount` is a
/// magnitude; the direction of the movement lives in `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub amount: f64,
    pub kind: TransactionKind,
    pub date: DateTime<Utc>,
    pub description: String,
}

impl Transaction {
    pub fn new(
        id: u64,
        amount: f64,
        kind: TransactionKind,
        date: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            kind,
            date,
            description: description.into(),
        }
    }
}

/// Closed set of transaction categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_as_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Income).unwrap(),
            "\"income\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Expense).unwrap(),
            "\"expense\""
        );
    }

    #[test]
    fn kind_deserializes_from_wire_strings() {
        let kind: TransactionKind = serde_json::from_str("\"expense\"").unwrap();
        assert_eq!(kind, TransactionKind::Expense);
    }
}
