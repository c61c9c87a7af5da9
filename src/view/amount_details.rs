//! Amount and fee breakdown of a transaction.
//!
//! The breakdown starts with the gross amount in the transaction currency,
//! followed by the converted amount when an fx conversion happened, then one
//! fragment per non-zero fee. A breakdown consisting of the gross amount only
//! carries no information beyond the net amount and is dropped.

use rust_decimal::Decimal;

use crate::domain::Transaction;
use crate::intl::{Localizer, MessageId};

// ============================================================================
// Fee Kinds
// ============================================================================

/// Fee fields of a transaction, all expressed in the host currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeKind {
    /// Fee kept by the fiscal host.
    Host,
    /// Fee kept by the platform.
    Platform,
    /// Fee charged by the payment processor.
    PaymentProcessor,
}

impl FeeKind {
    /// Fees in the order they appear in the breakdown.
    pub const ORDERED: [Self; 3] = [Self::Host, Self::Platform, Self::PaymentProcessor];

    /// Fee amount in minor units, if present and non-zero.
    #[must_use]
    pub fn amount(&self, txn: &Transaction) -> Option<i64> {
        let value = match self {
            Self::Host => txn.host_fee_in_host_currency,
            Self::Platform => txn.platform_fee_in_host_currency,
            Self::PaymentProcessor => txn.payment_processor_fee_in_host_currency,
        };
        value.filter(|fee| *fee != 0)
    }

    /// Localized label of the fee.
    ///
    /// The host fee label embeds the host's fee percentage when it is known.
    #[must_use]
    pub fn label(&self, txn: &Transaction, intl: &dyn Localizer) -> String {
        match self {
            Self::Host => match txn.host_fee_percent() {
                Some(percent) => {
                    let percent = format!("{percent}%");
                    intl.format_message(
                        MessageId::HostFeeInHostCurrency,
                        &[("hostFeePercent", percent.as_str())],
                    )
                }
                None => intl.format_message(MessageId::HostFeeUnknownPercent, &[]),
            },
            Self::Platform => intl.format_message(MessageId::PlatformFeeInHostCurrency, &[]),
            Self::PaymentProcessor => {
                intl.format_message(MessageId::PaymentProcessorFeeInHostCurrency, &[])
            }
        }
    }
}

// ============================================================================
// Breakdown
// ============================================================================

/// Returns the individual fragments of the amount breakdown.
///
/// The first fragment is always the gross amount.
#[must_use]
pub fn amount_fragments(txn: &Transaction, intl: &dyn Localizer) -> Vec<String> {
    let mut fragments = vec![intl.format_minor_units(txn.amount, &txn.currency)];

    if let Some(converted) = converted_amount(txn) {
        fragments.push(format!(
            "({})",
            intl.format_currency(converted, txn.host_currency_or_default())
        ));
    }

    for fee in FeeKind::ORDERED {
        if let Some(amount) = fee.amount(txn) {
            fragments.push(format!(
                "{} ({})",
                intl.format_minor_units(amount, txn.host_currency_or_default()),
                fee.label(txn, intl)
            ));
        }
    }

    fragments
}

/// Returns the joined breakdown, or `None` when only the gross amount exists.
#[must_use]
pub fn amount_details(txn: &Transaction, intl: &dyn Localizer) -> Option<String> {
    let fragments = amount_fragments(txn, intl);
    (fragments.len() > 1).then(|| fragments.join(" "))
}

/// Gross amount converted to the host currency, in major units.
fn converted_amount(txn: &Transaction) -> Option<Decimal> {
    let rate = txn.fx_conversion_rate()?;
    let decimal_rate = match Decimal::try_from(rate) {
        Ok(rate) => rate,
        Err(e) => {
            tracing::debug!("Skipping conversion for {}: rate {rate} ({e})", txn.uuid);
            return None;
        }
    };
    let converted = Decimal::new(txn.amount, 2).checked_mul(decimal_rate);
    if converted.is_none() {
        tracing::debug!(
            "Skipping conversion for {}: {} x {rate} overflows",
            txn.uuid,
            txn.amount
        );
    }
    converted
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::Host;
    use crate::intl::{Intl, Locale};
    use crate::test_utils::TransactionMother;
    use rstest::{fixture, rstest};

    #[fixture]
    fn intl() -> Intl {
        Intl::new(Locale::EnUs)
    }

    #[rstest]
    fn test_gross_amount_only_has_no_details(intl: Intl) {
        let txn = TransactionMother::credit(2550, "USD");
        assert_eq!(amount_fragments(&txn, &intl), vec!["$25.50".to_string()]);
        assert_eq!(amount_details(&txn, &intl), None);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(1.0))]
    fn test_no_conversion_fragment_without_fx(intl: Intl, #[case] rate: Option<f64>) {
        let txn = Transaction {
            host_currency: Some("EUR".to_string()),
            host_currency_fx_rate: rate,
            platform_fee_in_host_currency: Some(-128),
            ..TransactionMother::credit(2550, "USD")
        };
        let details = amount_details(&txn, &intl).unwrap();
        assert_eq!(details, "$25.50 -€1.28 (5% Open Collective fee)");
        assert!(!details.contains("($"));
    }

    #[rstest]
    fn test_conversion_fragment_uses_host_currency(intl: Intl) {
        let txn = Transaction {
            host_currency: Some("EUR".to_string()),
            host_currency_fx_rate: Some(0.8571),
            ..TransactionMother::credit(2550, "USD")
        };
        assert_eq!(
            amount_details(&txn, &intl).as_deref(),
            Some("$25.50 (€21.86)")
        );
    }

    #[rstest]
    #[case::overflowing_product(1_000_000_000_000, 1e20)]
    #[case::unrepresentable_rate(2550, f64::MAX)]
    #[case::not_a_number(2550, f64::NAN)]
    fn test_unconvertible_amount_drops_conversion_fragment(
        intl: Intl,
        #[case] amount: i64,
        #[case] rate: f64,
    ) {
        let txn = Transaction {
            host_currency: Some("EUR".to_string()),
            host_currency_fx_rate: Some(rate),
            ..TransactionMother::credit(amount, "USD")
        };
        assert_eq!(amount_fragments(&txn, &intl).len(), 1);
        assert_eq!(amount_details(&txn, &intl), None);
    }

    #[rstest]
    fn test_all_fees_in_order(intl: Intl) {
        let txn = TransactionMother::with_all_fees();
        let fragments = amount_fragments(&txn, &intl);
        assert_eq!(
            fragments,
            vec![
                "$100".to_string(),
                "-$10 (10% host fee)".to_string(),
                "-$5 (5% Open Collective fee)".to_string(),
                "-$3.20 (payment processor fee)".to_string(),
            ]
        );
    }

    #[rstest]
    fn test_zero_fees_are_omitted(intl: Intl) {
        let txn = Transaction {
            host_fee_in_host_currency: Some(0),
            platform_fee_in_host_currency: Some(0),
            payment_processor_fee_in_host_currency: Some(-30),
            ..TransactionMother::credit(1000, "USD")
        };
        assert_eq!(
            amount_details(&txn, &intl).as_deref(),
            Some("$10 -$0.30 (payment processor fee)")
        );
    }

    #[rstest]
    fn test_host_fee_without_percent(intl: Intl) {
        let txn = Transaction {
            host: Some(Host {
                name: Some("Host".to_string()),
                ..Host::default()
            }),
            host_fee_in_host_currency: Some(-50),
            ..TransactionMother::credit(1000, "USD")
        };
        assert_eq!(
            amount_details(&txn, &intl).as_deref(),
            Some("$10 -$0.50 (host fee)")
        );
    }

    #[test]
    fn test_fractional_host_fee_percent() {
        let intl = Intl::new(Locale::EnUs);
        let txn = Transaction {
            host: Some(Host {
                host_fee_percent: Some(7.5),
                ..Host::default()
            }),
            ..TransactionMother::credit(1000, "USD")
        };
        assert_eq!(FeeKind::Host.label(&txn, &intl), "7.5% host fee");
    }
}
