//! Transaction types as delivered by the platform API.
//!
//! All monetary fields are integers in minor currency units (cents). Optional
//! fields stay optional here: the detail view decides what to show from what
//! is present rather than rejecting incomplete records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::LedgerError;

// ============================================================================
// Transaction Type
// ============================================================================

/// Direction of a transaction relative to the collective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TransactionType {
    /// Money coming into the collective.
    Credit,
    /// Money leaving the collective (expenses, refunds paid out).
    Debit,
}

impl TransactionType {
    /// Returns the canonical upper-case name used by the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "CREDIT",
            Self::Debit => "DEBIT",
        }
    }
}

impl FromStr for TransactionType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            other => Err(LedgerError::parse(format!(
                "unknown transaction type '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for TransactionType {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TransactionType> for String {
    fn from(value: TransactionType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Nested Records
// ============================================================================

/// The fiscal host holding funds on behalf of the collective.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Percentage the host keeps, e.g. `5.0` for 5%.
    #[serde(default)]
    pub host_fee_percent: Option<f64>,
}

/// Payment method used to settle the transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    /// Payment service, e.g. `stripe` or `paypal`.
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub method_type: Option<String>,
}

/// Back-reference to the transaction that refunded this one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundReference {
    #[serde(default)]
    pub uuid: Option<Uuid>,
}

// ============================================================================
// Transaction
// ============================================================================

/// A single ledger entry of a collective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub uuid: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Gross amount in minor units of `currency`.
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub host_currency: Option<String>,
    #[serde(default)]
    pub host_currency_fx_rate: Option<f64>,
    #[serde(default)]
    pub host_fee_in_host_currency: Option<i64>,
    #[serde(default)]
    pub platform_fee_in_host_currency: Option<i64>,
    #[serde(default)]
    pub payment_processor_fee_in_host_currency: Option<i64>,
    #[serde(default)]
    pub net_amount_in_collective_currency: Option<i64>,
    /// Receipt URL for expenses.
    #[serde(default)]
    pub attachment: Option<String>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub host: Option<Host>,
    #[serde(default)]
    pub refund_transaction: Option<RefundReference>,
}

impl Transaction {
    /// Returns `true` for outgoing transactions.
    #[must_use]
    pub fn is_debit(&self) -> bool {
        self.kind == TransactionType::Debit
    }

    /// Returns the fx rate when a conversion to the host currency happened.
    ///
    /// A missing rate or a rate of exactly 1 means no conversion.
    #[must_use]
    pub fn fx_conversion_rate(&self) -> Option<f64> {
        self.host_currency_fx_rate
            .filter(|rate| *rate != 0.0 && *rate != 1.0)
    }

    /// Returns `true` if this transaction has already been refunded.
    #[must_use]
    pub fn is_refunded(&self) -> bool {
        self.refund_transaction.is_some()
    }

    /// Currency used for fee fields; falls back to the transaction currency.
    #[must_use]
    pub fn host_currency_or_default(&self) -> &str {
        self.host_currency.as_deref().unwrap_or(&self.currency)
    }

    /// Host name, if the host record carries one.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.host
            .as_ref()
            .and_then(|host| host.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Host fee percentage, if known.
    #[must_use]
    pub fn host_fee_percent(&self) -> Option<f64> {
        self.host.as_ref().and_then(|host| host.host_fee_percent)
    }

    /// Net amount in minor units; missing values read as zero.
    #[must_use]
    pub fn net_amount(&self) -> i64 {
        self.net_amount_in_collective_currency.unwrap_or_default()
    }

    /// Payment service name, if any.
    #[must_use]
    pub fn payment_service(&self) -> Option<&str> {
        self.payment_method
            .as_ref()
            .and_then(|pm| pm.service.as_deref())
            .filter(|service| !service.is_empty())
    }

    /// Short description for list rows.
    #[must_use]
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or("(no description)")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TransactionMother;
    use rstest::rstest;

    #[rstest]
    #[case("DEBIT", TransactionType::Debit)]
    #[case("debit", TransactionType::Debit)]
    #[case("Credit", TransactionType::Credit)]
    fn test_transaction_type_parses_case_insensitively(
        #[case] raw: &str,
        #[case] expected: TransactionType,
    ) {
        assert_eq!(raw.parse::<TransactionType>().unwrap(), expected);
    }

    #[test]
    fn test_transaction_type_rejects_unknown() {
        assert!("refund".parse::<TransactionType>().is_err());
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(1.0), false)]
    #[case(Some(0.0), false)]
    #[case(Some(0.85), true)]
    fn test_fx_conversion_detection(#[case] rate: Option<f64>, #[case] converted: bool) {
        let txn = Transaction {
            host_currency_fx_rate: rate,
            ..TransactionMother::credit(1000, "USD")
        };
        assert_eq!(txn.fx_conversion_rate().is_some(), converted);
    }

    #[test]
    fn test_deserializes_api_payload() {
        let json = r#"{
            "uuid": "2b3c1f1e-6c1f-4c7e-9c59-2f5c2b7a9a10",
            "type": "DEBIT",
            "description": "Hosting",
            "createdAt": "2018-02-01T10:00:00Z",
            "amount": -2550,
            "currency": "USD",
            "hostCurrency": "EUR",
            "hostCurrencyFxRate": 0.8,
            "paymentProcessorFeeInHostCurrency": -74,
            "netAmountInCollectiveCurrency": -2624,
            "paymentMethod": { "service": "stripe" },
            "host": { "name": "Open Source Collective", "hostFeePercent": 10 },
            "refundTransaction": null
        }"#;

        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert!(txn.is_debit());
        assert_eq!(txn.amount, -2550);
        assert_eq!(txn.host_currency_or_default(), "EUR");
        assert_eq!(txn.payment_service(), Some("stripe"));
        assert_eq!(txn.host_name(), Some("Open Source Collective"));
        assert_eq!(txn.host_fee_percent(), Some(10.0));
        assert!(!txn.is_refunded());
        assert!(txn.attachment.is_none());
    }

    #[test]
    fn test_missing_net_amount_reads_as_zero() {
        let txn = Transaction {
            net_amount_in_collective_currency: None,
            ..TransactionMother::credit(1000, "USD")
        };
        assert_eq!(txn.net_amount(), 0);
    }

    #[test]
    fn test_empty_host_name_is_ignored() {
        let txn = Transaction {
            host: Some(Host {
                name: Some(String::new()),
                ..Host::default()
            }),
            ..TransactionMother::credit(1000, "USD")
        };
        assert_eq!(txn.host_name(), None);
    }
}
