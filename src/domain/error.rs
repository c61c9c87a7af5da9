//! Error types for ledger operations.
//!
//! Loading a ledger snapshot and requesting refunds are the only fallible
//! operations in the crate; rendering a transaction never fails.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Why a ledger could not be loaded or a refund not requested.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Reading a ledger file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fetching a remote ledger failed.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The snapshot is not a valid ledger document.
    #[error("Parse error: {message}")]
    Parse {
        /// Position and reason, as reported by the JSON parser.
        message: String,
    },

    /// A lookup by id matched nothing.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// What was looked up, e.g. `transaction`.
        entity: &'static str,
        id: String,
    },

    /// A command-line argument or id that cannot be used.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A refund could not be requested.
    #[error("Refund failed: {0}")]
    Refund(String),
}

impl LedgerError {
    /// Parse failure with `message`.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Lookup failure for `entity` with identifier `id`.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    #[must_use]
    pub fn refund(message: impl Into<String>) -> Self {
        Self::Refund(message.into())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_error_display() {
        let parse_err = LedgerError::parse("unexpected token");
        assert_eq!(format!("{parse_err}"), "Parse error: unexpected token");

        let not_found_err = LedgerError::not_found("transaction", "abc123");
        assert_eq!(
            format!("{not_found_err}"),
            "transaction 'abc123' not found"
        );

        let invalid_err = LedgerError::invalid_input("empty uuid");
        assert_eq!(format!("{invalid_err}"), "Invalid input: empty uuid");

        let refund_err = LedgerError::refund("already refunded");
        assert_eq!(format!("{refund_err}"), "Refund failed: already refunded");
    }

    #[test]
    fn test_not_found_error_creation() {
        let err = LedgerError::not_found("collective", "webpack");
        match err {
            LedgerError::NotFound { entity, id } => {
                assert_eq!(entity, "collective");
                assert_eq!(id, "webpack");
            }
            _ => panic!("Expected NotFound variant"),
        }
    }

    #[test]
    fn test_serde_error_becomes_parse_error() {
        let err: LedgerError = serde_json::from_str::<u32>("nope")
            .expect_err("invalid json")
            .into();
        assert!(matches!(err, LedgerError::Parse { .. }));
    }
}
