//! The transaction detail view model.
//!
//! [`TransactionDetails::build`] turns a transaction, its collective and the
//! viewing user into the sections shown below a ledger row. Building never
//! fails: optional data that is missing removes the corresponding section.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

use crate::constants::RECEIPT_PLACEHOLDER_SRC;
use crate::domain::{Collective, LedgerError, Permissions, Transaction, TransactionType};
use crate::intl::{Localizer, MessageId};
use crate::utils::{ImagePreview, capitalize, invoice_path};

use super::amount_details::amount_details;

// ============================================================================
// Display Mode
// ============================================================================

/// Whether the details are expanded below their row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailsMode {
    #[default]
    Open,
    Closed,
}

impl DetailsMode {
    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl FromStr for DetailsMode {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            other => Err(LedgerError::invalid_input(format!(
                "unknown display mode '{other}'"
            ))),
        }
    }
}

impl fmt::Display for DetailsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "open",
            Self::Closed => "closed",
        })
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Receipt frame shown for expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReceiptFrame {
    /// An uploaded receipt, opened in a new browser context.
    Attachment {
        href: String,
        preview_src: String,
        title: String,
    },
    /// No receipt uploaded.
    Placeholder { src: String, caption: String },
}

/// Fiscal host name and currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostSection {
    pub label: String,
    pub name: String,
    pub currency: Option<String>,
}

impl HostSection {
    /// `Name (CUR)` as displayed.
    #[must_use]
    pub fn value(&self) -> String {
        match &self.currency {
            Some(currency) => format!("{} ({currency})", self.name),
            None => self.name.clone(),
        }
    }
}

/// Payment method column; the value is empty when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethodSection {
    pub label: String,
    pub service: Option<String>,
}

/// Raw fx rate, shown only when a conversion happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FxRateSection {
    pub label: String,
    pub rate: f64,
}

/// Breakdown and net amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmountSection {
    pub label: String,
    /// Joined gross/conversion/fee fragments, absent when there is nothing
    /// beyond the gross amount.
    pub details: Option<String>,
    pub net_amount: String,
    pub net_description: String,
}

/// Invoice download link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceLink {
    pub label: String,
    pub text: String,
    /// Site-relative path to the PDF.
    pub path: String,
}

/// Refund action for root users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefundControl {
    pub transaction_uuid: Uuid,
    pub refunded: bool,
    pub label: String,
}

// ============================================================================
// Render Context
// ============================================================================

/// Services the view consults while building.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub intl: &'a dyn Localizer,
    pub previews: &'a ImagePreview,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub fn new(intl: &'a dyn Localizer, previews: &'a ImagePreview) -> Self {
        Self { intl, previews }
    }
}

// ============================================================================
// TransactionDetails
// ============================================================================

/// Formatted, locale-aware breakdown of one transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionDetails {
    pub uuid: Uuid,
    pub kind: TransactionType,
    pub mode: DetailsMode,
    pub receipt: Option<ReceiptFrame>,
    pub host: Option<HostSection>,
    pub payment_method: PaymentMethodSection,
    pub fx_rate: Option<FxRateSection>,
    pub amount: AmountSection,
    pub invoice: Option<InvoiceLink>,
    pub refund: Option<RefundControl>,
}

impl TransactionDetails {
    /// Builds the detail view of `txn` for `viewer`.
    ///
    /// # Arguments
    ///
    /// * `txn` - The transaction to describe
    /// * `collective` - The collective owning the ledger (invoice links)
    /// * `viewer` - The logged-in user, if any
    /// * `mode` - Open or closed, passed through to the renderer
    /// * `ctx` - Localization and image preview services
    #[must_use]
    pub fn build(
        txn: &Transaction,
        collective: &Collective,
        viewer: Option<&dyn Permissions>,
        mode: DetailsMode,
        ctx: RenderContext<'_>,
    ) -> Self {
        let intl = ctx.intl;

        Self {
            uuid: txn.uuid,
            kind: txn.kind,
            mode,
            receipt: receipt_frame(txn, ctx),
            host: txn.host_name().map(|name| HostSection {
                label: intl.format_message(MessageId::Host, &[]),
                name: name.to_string(),
                currency: txn.host_currency.clone(),
            }),
            payment_method: PaymentMethodSection {
                label: intl.format_message(MessageId::PaymentMethod, &[]),
                service: txn.payment_service().map(capitalize),
            },
            fx_rate: txn.fx_conversion_rate().map(|rate| FxRateSection {
                label: intl.format_message(MessageId::FxRate, &[]),
                rate,
            }),
            amount: AmountSection {
                label: intl.format_message(MessageId::AmountDetails, &[]),
                details: amount_details(txn, intl),
                net_amount: intl.format_minor_units(txn.net_amount(), &txn.currency),
                net_description: intl.format_message(MessageId::NetAmountDescription, &[]),
            },
            invoice: can_download_invoice(txn, collective, viewer).then(|| InvoiceLink {
                label: intl.format_message(MessageId::Invoice, &[]),
                text: intl.format_message(MessageId::DownloadPdf, &[]),
                path: invoice_path(&collective.slug, txn.uuid),
            }),
            refund: viewer
                .is_some_and(|v| v.is_root())
                .then(|| RefundControl {
                    transaction_uuid: txn.uuid,
                    refunded: txn.is_refunded(),
                    label: intl.format_message(
                        if txn.is_refunded() {
                            MessageId::Refunded
                        } else {
                            MessageId::Refund
                        },
                        &[],
                    ),
                }),
        }
    }
}

fn receipt_frame(txn: &Transaction, ctx: RenderContext<'_>) -> Option<ReceiptFrame> {
    if !txn.is_debit() {
        return None;
    }
    let frame = match txn.attachment.as_deref().filter(|a| !a.is_empty()) {
        Some(attachment) => ReceiptFrame::Attachment {
            href: attachment.to_string(),
            preview_src: ctx.previews.preview(attachment),
            title: ctx.intl.format_message(MessageId::OpenReceipt, &[]),
        },
        None => ReceiptFrame::Placeholder {
            src: RECEIPT_PLACEHOLDER_SRC.to_string(),
            caption: ctx.intl.format_message(MessageId::NoReceipt, &[]),
        },
    };
    Some(frame)
}

/// Invoices exist for expenses that were not refunded, and only editors of
/// the collective or root users may download them.
fn can_download_invoice(
    txn: &Transaction,
    collective: &Collective,
    viewer: Option<&dyn Permissions>,
) -> bool {
    let Some(viewer) = viewer else {
        return false;
    };
    txn.is_debit()
        && (viewer.can_edit_collective(collective) || viewer.is_root())
        && !txn.is_refunded()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MemberRole;
    use crate::domain::{LoggedInUser, RefundReference};
    use crate::intl::{Intl, Locale};
    use crate::test_utils::{CollectiveMother, TransactionMother, UserMother};
    use rstest::rstest;

    fn build(txn: &Transaction, viewer: Option<&LoggedInUser>) -> TransactionDetails {
        let intl = Intl::new(Locale::EnUs);
        let previews = ImagePreview::new("https://images.example.com");
        TransactionDetails::build(
            txn,
            &CollectiveMother::webpack(),
            viewer.map(|v| v as &dyn Permissions),
            DetailsMode::Open,
            RenderContext::new(&intl, &previews),
        )
    }

    /// Permission stub answering fixed values.
    struct FixedPermissions {
        can_edit: bool,
        root: bool,
    }

    impl Permissions for FixedPermissions {
        fn can_edit_collective(&self, _collective: &Collective) -> bool {
            self.can_edit
        }

        fn is_root(&self) -> bool {
            self.root
        }
    }

    #[test]
    fn test_credit_has_no_receipt() {
        let details = build(&TransactionMother::credit(2550, "USD"), None);
        assert_eq!(details.receipt, None);
    }

    #[test]
    fn test_debit_without_attachment_uses_placeholder() {
        let details = build(&TransactionMother::expense(-2550, "USD"), None);
        match details.receipt {
            Some(ReceiptFrame::Placeholder { src, .. }) => {
                assert_eq!(src, "/static/images/receipt.svg");
            }
            other => panic!("Expected placeholder, got {other:?}"),
        }
    }

    #[test]
    fn test_debit_with_attachment_uses_preview_helper() {
        let txn = Transaction {
            attachment: Some("https://s3.example.com/receipt.png".to_string()),
            ..TransactionMother::expense(-2550, "USD")
        };
        let expected_preview =
            ImagePreview::new("https://images.example.com").preview("https://s3.example.com/receipt.png");

        match build(&txn, None).receipt {
            Some(ReceiptFrame::Attachment {
                href, preview_src, ..
            }) => {
                assert_eq!(href, "https://s3.example.com/receipt.png");
                assert_eq!(preview_src, expected_preview);
            }
            other => panic!("Expected attachment, got {other:?}"),
        }
    }

    #[test]
    fn test_net_amount_divided_by_hundred() {
        let txn = Transaction {
            net_amount_in_collective_currency: Some(2550),
            ..TransactionMother::credit(2550, "USD")
        };
        let details = build(&txn, None);
        assert_eq!(details.amount.net_amount, "$25.50");
        assert_eq!(details.amount.details, None);
    }

    #[test]
    fn test_host_section_requires_name() {
        let with_host = build(&TransactionMother::with_all_fees(), None);
        let host = with_host.host.expect("host section");
        assert_eq!(host.value(), "Open Source Collective (USD)");

        let without_host = build(&TransactionMother::credit(100, "USD"), None);
        assert!(without_host.host.is_none());
    }

    #[test]
    fn test_payment_method_is_capitalized() {
        let details = build(&TransactionMother::with_all_fees(), None);
        assert_eq!(details.payment_method.service.as_deref(), Some("Stripe"));

        let details = build(&TransactionMother::credit(100, "USD"), None);
        assert_eq!(details.payment_method.service, None);
        assert_eq!(details.payment_method.label, "payment method");
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(1.0), false)]
    #[case(Some(1.1), true)]
    fn test_fx_rate_section(#[case] rate: Option<f64>, #[case] shown: bool) {
        let txn = Transaction {
            host_currency: Some("EUR".to_string()),
            host_currency_fx_rate: rate,
            ..TransactionMother::credit(100, "USD")
        };
        let details = build(&txn, None);
        assert_eq!(details.fx_rate.is_some(), shown);
        assert_eq!(details.amount.details.is_some(), shown);
    }

    #[rstest]
    #[case::debit_editor(TransactionType::Debit, true, false, false, true)]
    #[case::debit_root(TransactionType::Debit, false, true, false, true)]
    #[case::debit_viewer(TransactionType::Debit, false, false, false, false)]
    #[case::debit_refunded(TransactionType::Debit, true, true, true, false)]
    #[case::credit_editor(TransactionType::Credit, true, true, false, false)]
    fn test_invoice_visibility(
        #[case] kind: TransactionType,
        #[case] can_edit: bool,
        #[case] root: bool,
        #[case] refunded: bool,
        #[case] expected: bool,
    ) {
        let txn = Transaction {
            kind,
            refund_transaction: refunded.then(RefundReference::default),
            ..TransactionMother::expense(-2550, "USD")
        };
        let viewer = FixedPermissions { can_edit, root };
        let intl = Intl::new(Locale::EnUs);
        let previews = ImagePreview::new("https://images.example.com");

        let details = TransactionDetails::build(
            &txn,
            &CollectiveMother::webpack(),
            Some(&viewer),
            DetailsMode::Closed,
            RenderContext::new(&intl, &previews),
        );

        assert_eq!(details.invoice.is_some(), expected);
        assert_eq!(details.mode, DetailsMode::Closed);
    }

    #[test]
    fn test_invoice_hidden_without_viewer() {
        let details = build(&TransactionMother::expense(-2550, "USD"), None);
        assert!(details.invoice.is_none());
        assert!(details.refund.is_none());
    }

    #[test]
    fn test_invoice_path_uses_collective_slug_and_uuid() {
        let txn = TransactionMother::expense(-2550, "USD");
        let admin = UserMother::with_role("webpack", MemberRole::Admin);
        let invoice = build(&txn, Some(&admin)).invoice.expect("invoice link");
        assert_eq!(
            invoice.path,
            format!("/webpack/transactions/{}/invoice.pdf", txn.uuid)
        );
        assert_eq!(invoice.text, "Download (pdf)");
    }

    #[rstest]
    #[case::root(UserMother::root(), true)]
    #[case::admin(UserMother::with_role("webpack", MemberRole::Admin), false)]
    fn test_refund_control_only_for_root(#[case] user: LoggedInUser, #[case] shown: bool) {
        for txn in [
            TransactionMother::credit(2550, "USD"),
            TransactionMother::expense(-2550, "USD"),
        ] {
            assert_eq!(build(&txn, Some(&user)).refund.is_some(), shown);
        }
    }

    #[test]
    fn test_refund_control_reflects_refunded_state() {
        let txn = Transaction {
            refund_transaction: Some(RefundReference::default()),
            ..TransactionMother::credit(2550, "USD")
        };
        let refund = build(&txn, Some(&UserMother::root()))
            .refund
            .expect("refund control");
        assert!(refund.refunded);
        assert_eq!(refund.label, "Refunded");
    }

    #[rstest]
    #[case("open", DetailsMode::Open)]
    #[case("CLOSED", DetailsMode::Closed)]
    fn test_details_mode_parsing(#[case] raw: &str, #[case] expected: DetailsMode) {
        assert_eq!(raw.parse::<DetailsMode>().unwrap(), expected);
        assert_eq!(expected.toggled().toggled(), expected);
    }
}
