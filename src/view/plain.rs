//! Plain-text rendering of the detail view for one-shot CLI output.

use super::transaction_details::{ReceiptFrame, TransactionDetails};

/// Renders one `LABEL: value` line per visible section, in on-screen order.
#[must_use]
pub fn render_plain(details: &TransactionDetails) -> String {
    let mut lines = Vec::new();

    match &details.receipt {
        Some(ReceiptFrame::Attachment {
            href, preview_src, ..
        }) => lines.push(format!("RECEIPT: {href} (preview {preview_src})")),
        Some(ReceiptFrame::Placeholder { src, caption }) => {
            lines.push(format!("RECEIPT: {caption} ({src})"));
        }
        None => {}
    }

    if let Some(host) = &details.host {
        lines.push(line(&host.label, &host.value()));
    }

    lines.push(line(
        &details.payment_method.label,
        details.payment_method.service.as_deref().unwrap_or_default(),
    ));

    if let Some(fx) = &details.fx_rate {
        lines.push(line(&fx.label, &fx.rate.to_string()));
    }

    let amount = &details.amount;
    let net = format!("{} ({})", amount.net_amount, amount.net_description);
    let value = match &amount.details {
        Some(breakdown) => format!("{breakdown} = {net}"),
        None => net,
    };
    lines.push(line(&amount.label, &value));

    if let Some(invoice) = &details.invoice {
        lines.push(line(
            &invoice.label,
            &format!("{} {}", invoice.text, invoice.path),
        ));
    }

    if let Some(refund) = &details.refund {
        let marker = if refund.refunded { "[x]" } else { "[ ]" };
        lines.push(format!("ACTIONS: {marker} {}", refund.label));
    }

    lines.join("\n")
}

fn line(label: &str, value: &str) -> String {
    format!("{}: {value}", label.to_uppercase()).trim_end().to_string()
}

// ============================================================================
// Tests
// ============================================================================
