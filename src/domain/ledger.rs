//! Ledger snapshot: a collective, the viewing user and its transactions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Collective, LedgerError, LoggedInUser, RefundReference, Transaction};

/// Everything the viewer browses in one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    pub collective: Collective,
    #[serde(default)]
    pub logged_in_user: Option<LoggedInUser>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    /// Parses a ledger from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Parse`] if the JSON is malformed or a required
    /// field (transaction type, amount, currency, uuid) is missing.
    pub fn from_json(content: &str) -> Result<Self, LedgerError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Finds a transaction by full UUID or by a unique UUID prefix.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidInput`] for an empty or ambiguous prefix
    /// and [`LedgerError::NotFound`] when nothing matches.
    pub fn find(&self, id: &str) -> Result<&Transaction, LedgerError> {
        let needle = id.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return Err(LedgerError::invalid_input("empty transaction id"));
        }

        if let Ok(uuid) = Uuid::parse_str(&needle) {
            return self
                .transactions
                .iter()
                .find(|txn| txn.uuid == uuid)
                .ok_or_else(|| LedgerError::not_found("transaction", id));
        }

        let mut matches = self
            .transactions
            .iter()
            .filter(|txn| txn.uuid.to_string().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn),
            (Some(_), Some(_)) => Err(LedgerError::invalid_input(format!(
                "transaction id '{id}' is ambiguous"
            ))),
            (None, _) => Err(LedgerError::not_found("transaction", id)),
        }
    }

    /// Records a refund back-reference on the transaction `uuid`.
    ///
    /// Returns `false` if the transaction is unknown or already refunded.
    pub fn mark_refunded(&mut self, uuid: Uuid, refund_uuid: Uuid) -> bool {
        match self.transactions.iter_mut().find(|txn| txn.uuid == uuid) {
            Some(txn) if !txn.is_refunded() => {
                txn.refund_transaction = Some(RefundReference {
                    uuid: Some(refund_uuid),
                });
                true
            }
            _ => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::LedgerMother;

    #[test]
    fn test_find_by_full_uuid_and_prefix() {
        let ledger = LedgerMother::sample();
        let first = &ledger.transactions[0];
        let full = first.uuid.to_string();

        assert_eq!(ledger.find(&full).unwrap().uuid, first.uuid);
        assert_eq!(ledger.find(&full[..8]).unwrap().uuid, first.uuid);
        assert_eq!(ledger.find(&full.to_uppercase()).unwrap().uuid, first.uuid);
    }

    #[test]
    fn test_find_errors() {
        let ledger = LedgerMother::sample();
        assert!(matches!(
            ledger.find("  "),
            Err(LedgerError::InvalidInput(_))
        ));
        assert!(matches!(
            ledger.find("ffffffff"),
            Err(LedgerError::NotFound { .. })
        ));
    }

    #[test]
    fn test_mark_refunded_only_once() {
        let mut ledger = LedgerMother::sample();
        let uuid = ledger.transactions[0].uuid;

        assert!(ledger.mark_refunded(uuid, Uuid::new_v4()));
        assert!(ledger.transactions[0].is_refunded());
        assert!(!ledger.mark_refunded(uuid, Uuid::new_v4()));
        assert!(!ledger.mark_refunded(Uuid::nil(), Uuid::new_v4()));
    }

    #[test]
    fn test_from_json_requires_collective() {
        assert!(Ledger::from_json(r#"{ "transactions": [] }"#).is_err());
        let ledger =
            Ledger::from_json(r#"{ "collective": { "id": 1, "slug": "webpack" } }"#).unwrap();
        assert!(ledger.transactions.is_empty());
        assert!(ledger.logged_in_user.is_none());
    }
}
