//! Message catalog for the transaction detail view.
//!
//! Every message has a stable id and an English default. Built-in French and
//! German catalogs translate them; templates use `{name}` placeholders.

use super::Locale;

// ============================================================================
// Message Ids
// ============================================================================

/// Identifier of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    HostFeeInHostCurrency,
    HostFeeUnknownPercent,
    PlatformFeeInHostCurrency,
    PaymentProcessorFeeInHostCurrency,
    Host,
    PaymentMethod,
    FxRate,
    AmountDetails,
    NetAmountDescription,
    Invoice,
    DownloadPdf,
    Receipt,
    OpenReceipt,
    NoReceipt,
    Refund,
    Refunded,
    RefundConfirm,
    DetailsHidden,
    InvoiceLinkCopied,
    NoInvoice,
    OpenedInBrowser,
    BrowserFailed,
    TransactionsTitle,
    NoTransactions,
}

impl MessageId {
    /// All message ids, in declaration order.
    pub const ALL: [Self; 24] = [
        Self::HostFeeInHostCurrency,
        Self::HostFeeUnknownPercent,
        Self::PlatformFeeInHostCurrency,
        Self::PaymentProcessorFeeInHostCurrency,
        Self::Host,
        Self::PaymentMethod,
        Self::FxRate,
        Self::AmountDetails,
        Self::NetAmountDescription,
        Self::Invoice,
        Self::DownloadPdf,
        Self::Receipt,
        Self::OpenReceipt,
        Self::NoReceipt,
        Self::Refund,
        Self::Refunded,
        Self::RefundConfirm,
        Self::DetailsHidden,
        Self::InvoiceLinkCopied,
        Self::NoInvoice,
        Self::OpenedInBrowser,
        Self::BrowserFailed,
        Self::TransactionsTitle,
        Self::NoTransactions,
    ];

    /// Stable id used by catalogs and config overrides.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::HostFeeInHostCurrency => "transaction.hostFeeInHostCurrency",
            Self::HostFeeUnknownPercent => "transaction.hostFee",
            Self::PlatformFeeInHostCurrency => "transaction.platformFeeInHostCurrency",
            Self::PaymentProcessorFeeInHostCurrency => {
                "transaction.paymentProcessorFeeInHostCurrency"
            }
            Self::Host => "transaction.host",
            Self::PaymentMethod => "transaction.paymentMethod",
            Self::FxRate => "transaction.fxrate",
            Self::AmountDetails => "transaction.amountDetails",
            Self::NetAmountDescription => "transaction.netAmountInCollectiveCurrency.description",
            Self::Invoice => "transaction.invoice",
            Self::DownloadPdf => "transaction.downloadPDF",
            Self::Receipt => "transaction.receipt",
            Self::OpenReceipt => "transaction.receipt.open",
            Self::NoReceipt => "transaction.receipt.none",
            Self::Refund => "transaction.refund.btn",
            Self::Refunded => "transaction.refunded",
            Self::RefundConfirm => "transaction.refund.confirm",
            Self::DetailsHidden => "ui.details.hidden",
            Self::InvoiceLinkCopied => "ui.invoice.copied",
            Self::NoInvoice => "ui.invoice.none",
            Self::OpenedInBrowser => "ui.browser.opened",
            Self::BrowserFailed => "ui.browser.failed",
            Self::TransactionsTitle => "ui.transactions.title",
            Self::NoTransactions => "ui.transactions.none",
        }
    }

    /// English default template.
    #[must_use]
    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::HostFeeInHostCurrency => "{hostFeePercent} host fee",
            Self::HostFeeUnknownPercent => "host fee",
            Self::PlatformFeeInHostCurrency => "5% Open Collective fee",
            Self::PaymentProcessorFeeInHostCurrency => "payment processor fee",
            Self::Host => "host",
            Self::PaymentMethod => "payment method",
            Self::FxRate => "fx rate",
            Self::AmountDetails => "amount details",
            Self::NetAmountDescription => "net amount added to your collective's balance",
            Self::Invoice => "invoice",
            Self::DownloadPdf => "Download (pdf)",
            Self::Receipt => "receipt",
            Self::OpenReceipt => "Open receipt in a new window",
            Self::NoReceipt => "no receipt",
            Self::Refund => "Refund",
            Self::Refunded => "Refunded",
            Self::RefundConfirm => "Refund {amount} to {collective}?",
            Self::DetailsHidden => "Press Enter to show the details first",
            Self::InvoiceLinkCopied => "Invoice link copied",
            Self::NoInvoice => "No invoice for this transaction",
            Self::OpenedInBrowser => "Opened in browser",
            Self::BrowserFailed => "Failed to open browser: {error}",
            Self::TransactionsTitle => "Transactions ({count})",
            Self::NoTransactions => "No transactions",
        }
    }

    /// Looks a message up by its stable id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|message| message.id() == id)
    }
}

// ============================================================================
// Built-in Catalogs
// ============================================================================

/// Returns the built-in translation of `id` for `locale`, if any.
///
/// English has no catalog: its text is the default message.
#[must_use]
pub const fn builtin_message(locale: Locale, id: MessageId) -> Option<&'static str> {
    match locale {
        Locale::EnUs => None,
        Locale::FrFr => Some(match id {
            MessageId::HostFeeInHostCurrency => "{hostFeePercent} de frais d'hôte",
            MessageId::HostFeeUnknownPercent => "frais d'hôte",
            MessageId::PlatformFeeInHostCurrency => "5% de frais Open Collective",
            MessageId::PaymentProcessorFeeInHostCurrency => "frais du processeur de paiement",
            MessageId::Host => "hôte",
            MessageId::PaymentMethod => "moyen de paiement",
            MessageId::FxRate => "taux de change",
            MessageId::AmountDetails => "détails du montant",
            MessageId::NetAmountDescription => "montant net ajouté au solde de votre collectif",
            MessageId::Invoice => "facture",
            MessageId::DownloadPdf => "Télécharger (pdf)",
            MessageId::Receipt => "reçu",
            MessageId::OpenReceipt => "Ouvrir le reçu dans une nouvelle fenêtre",
            MessageId::NoReceipt => "pas de reçu",
            MessageId::Refund => "Rembourser",
            MessageId::Refunded => "Remboursé",
            MessageId::RefundConfirm => "Rembourser {amount} à {collective} ?",
            MessageId::DetailsHidden => "Appuyez sur Entrée pour afficher les détails",
            MessageId::InvoiceLinkCopied => "Lien de la facture copié",
            MessageId::NoInvoice => "Pas de facture pour cette transaction",
            MessageId::OpenedInBrowser => "Ouvert dans le navigateur",
            MessageId::BrowserFailed => "Impossible d'ouvrir le navigateur : {error}",
            MessageId::TransactionsTitle => "Transactions ({count})",
            MessageId::NoTransactions => "Aucune transaction",
        }),
        Locale::DeDe => Some(match id {
            MessageId::HostFeeInHostCurrency => "{hostFeePercent} Host-Gebühr",
            MessageId::HostFeeUnknownPercent => "Host-Gebühr",
            MessageId::PlatformFeeInHostCurrency => "5% Open Collective Gebühr",
            MessageId::PaymentProcessorFeeInHostCurrency => "Zahlungsanbieter-Gebühr",
            MessageId::Host => "Host",
            MessageId::PaymentMethod => "Zahlungsmethode",
            MessageId::FxRate => "Wechselkurs",
            MessageId::AmountDetails => "Betragsdetails",
            MessageId::NetAmountDescription => {
                "Nettobetrag, der dem Guthaben deines Kollektivs gutgeschrieben wird"
            }
            MessageId::Invoice => "Rechnung",
            MessageId::DownloadPdf => "Herunterladen (pdf)",
            MessageId::Receipt => "Beleg",
            MessageId::OpenReceipt => "Beleg in neuem Fenster öffnen",
            MessageId::NoReceipt => "kein Beleg",
            MessageId::Refund => "Erstatten",
            MessageId::Refunded => "Erstattet",
            MessageId::RefundConfirm => "{amount} an {collective} erstatten?",
            MessageId::DetailsHidden => "Drücke Enter, um die Details anzuzeigen",
            MessageId::InvoiceLinkCopied => "Rechnungslink kopiert",
            MessageId::NoInvoice => "Keine Rechnung für diese Transaktion",
            MessageId::OpenedInBrowser => "Im Browser geöffnet",
            MessageId::BrowserFailed => "Browser konnte nicht geöffnet werden: {error}",
            MessageId::TransactionsTitle => "Transaktionen ({count})",
            MessageId::NoTransactions => "Keine Transaktionen",
        }),
    }
}

// ============================================================================
// Interpolation
// ============================================================================

/// Replaces `{name}` placeholders in `template` with matching `values`.
///
/// Placeholders without a value are left verbatim.
#[must_use]
pub fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match values.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => output.push_str(value),
                    None => {
                        output.push('{');
                        output.push_str(name);
                        output.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                output.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    output.push_str(rest);
    output
}

// ============================================================================
// Tests
// ============================================================================
