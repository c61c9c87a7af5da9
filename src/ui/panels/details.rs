//! Transaction details panel.
//!
//! Draws a [`TransactionDetails`] below its ledger row: the receipt frame of
//! expenses next to (or, on narrow terminals, above) the labeled columns for
//! host, payment method, fx rate, amount details, invoice and refund.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{LINK_STYLE, MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::{label_span, labeled_line};
use crate::ui::layout::{details_max_height, is_narrow};
use crate::view::TransactionDetails;
use crate::widgets::{ReceiptFrameWidget, RefundButtonWidget};

// ============================================================================
// DetailsPanel
// ============================================================================

/// The expanded details of one transaction.
#[derive(Debug, Clone)]
pub struct DetailsPanel<'a> {
    details: &'a TransactionDetails,
    receipt_title: &'a str,
    confirming_refund: bool,
}

impl<'a> DetailsPanel<'a> {
    #[must_use]
    pub const fn new(details: &'a TransactionDetails, receipt_title: &'a str) -> Self {
        Self {
            details,
            receipt_title,
            confirming_refund: false,
        }
    }

    /// Shows the refund button awaiting confirmation.
    #[must_use]
    pub const fn confirming_refund(mut self, confirming: bool) -> Self {
        self.confirming_refund = confirming;
        self
    }

    /// Rows the fully open panel takes at `width`, capped to the maximum
    /// details height.
    #[must_use]
    pub fn content_height(&self, width: u16) -> u16 {
        let info = u16::try_from(self.info_lines().len()).unwrap_or(u16::MAX);
        let receipt = if self.details.receipt.is_some() {
            ReceiptFrameWidget::HEIGHT
        } else {
            0
        };
        let full = if is_narrow(width) {
            info.saturating_add(receipt)
        } else {
            info.max(receipt)
        };
        full.min(details_max_height(width))
    }

    /// The labeled columns, one line each.
    #[must_use]
    pub fn info_lines(&self) -> Vec<Line<'static>> {
        let details = self.details;
        let mut lines = Vec::new();

        if let Some(host) = &details.host {
            lines.push(labeled_line(&host.label, Span::raw(host.value())));
        }

        lines.push(labeled_line(
            &details.payment_method.label,
            Span::raw(details.payment_method.service.clone().unwrap_or_default()),
        ));

        if let Some(fx) = &details.fx_rate {
            lines.push(labeled_line(&fx.label, Span::raw(fx.rate.to_string())));
        }

        let amount = &details.amount;
        lines.push(Line::from(label_span(&amount.label)));
        if let Some(breakdown) = &amount.details {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(breakdown.clone(), Style::default().fg(MUTED_COLOR)),
            ]));
        }
        let net_prefix = if amount.details.is_some() { "  = " } else { "  " };
        lines.push(Line::from(vec![
            Span::raw(net_prefix),
            Span::styled(
                amount.net_amount.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format!("({})", amount.net_description),
                Style::default().fg(MUTED_COLOR),
            ),
        ]));

        if let Some(invoice) = &details.invoice {
            let mut line =
                labeled_line(&invoice.label, Span::styled(invoice.text.clone(), LINK_STYLE));
            line.push_span(Span::raw(" "));
            line.push_span(Span::styled(
                "i/c",
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(line);
        }

        if let Some(control) = &details.refund {
            lines.push(
                RefundButtonWidget::new(control)
                    .confirming(self.confirming_refund)
                    .to_line(),
            );
        }

        lines
    }
}

impl Widget for DetailsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let info = Paragraph::new(self.info_lines());

        let Some(receipt) = &self.details.receipt else {
            info.render(area, buf);
            return;
        };
        let receipt = ReceiptFrameWidget::new(receipt, self.receipt_title);

        let (receipt_area, info_area) = if is_narrow(area.width) {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(ReceiptFrameWidget::HEIGHT),
                    Constraint::Min(0),
                ])
                .split(area);
            (rows[0], rows[1])
        } else {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(ReceiptFrameWidget::WIDTH),
                    Constraint::Length(2),
                    Constraint::Min(0),
                ])
                .split(area);
            let receipt_area = Rect {
                height: columns[0].height.min(ReceiptFrameWidget::HEIGHT),
                ..columns[0]
            };
            (receipt_area, columns[2])
        };

        receipt.render(receipt_area, buf);
        info.render(info_area, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Permissions, Transaction};
    use crate::intl::{Intl, Locale};
    use crate::test_utils::{CollectiveMother, TransactionMother, UserMother, buffer_to_string};
    use crate::utils::ImagePreview;
    use crate::view::{DetailsMode, RenderContext};

    fn details_of(txn: &Transaction) -> TransactionDetails {
        let intl = Intl::new(Locale::EnUs);
        let previews = ImagePreview::new("https://images.example.com");
        let root = UserMother::root();
        TransactionDetails::build(
            txn,
            &CollectiveMother::webpack(),
            Some(&root as &dyn Permissions),
            DetailsMode::Open,
            RenderContext::new(&intl, &previews),
        )
    }

    fn render_panel(panel: DetailsPanel<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, panel.content_height(width));
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_info_lines_for_donation_with_fees() {
        let details = details_of(&TransactionMother::with_all_fees());
        let lines: Vec<String> = DetailsPanel::new(&details, "receipt")
            .info_lines()
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            lines,
            vec![
                "HOST  Open Source Collective (USD)",
                "PAYMENT METHOD  Stripe",
                "AMOUNT DETAILS",
                "  $100 -$10 (10% host fee) -$5 (5% Open Collective fee) -$3.20 (payment processor fee)",
                "  = $81.80 (net amount added to your collective's balance)",
                "[ Refund ] r",
            ]
        );
    }

    #[test]
    fn test_net_line_without_breakdown_has_no_equals() {
        let details = details_of(&TransactionMother::expense(-2550, "USD"));
        let lines: Vec<String> = DetailsPanel::new(&details, "receipt")
            .info_lines()
            .iter()
            .map(ToString::to_string)
            .collect();

        let net = "  -$25.50 (net amount added to your collective's balance)";
        assert!(lines.iter().any(|line| line == net));
        assert!(!lines.iter().any(|line| line.starts_with("  = ")));
    }

    #[test]
    fn test_wide_layout_puts_receipt_beside_columns() {
        let details = details_of(&TransactionMother::expense(-2550, "USD"));
        let panel = DetailsPanel::new(&details, "receipt");
        assert_eq!(panel.content_height(100), 5);

        let content = render_panel(panel, 100);
        let first = content.lines().next().unwrap_or_default();
        assert!(first.starts_with("╭ receipt "), "got: {first}");
        assert!(first.contains("PAYMENT METHOD"), "got: {first}");
        assert!(content.contains("INVOICE  Download (pdf) i/c"));
    }

    #[test]
    fn test_narrow_layout_stacks_receipt_above() {
        let details = details_of(&TransactionMother::expense(-2550, "USD"));
        let panel = DetailsPanel::new(&details, "receipt");
        assert_eq!(panel.content_height(40), 9);

        let content = render_panel(panel, 40);
        let rows: Vec<&str> = content.lines().collect();
        assert!(rows[0].starts_with("╭ receipt "));
        assert!(rows[4].starts_with("PAYMENT METHOD"));
    }

    #[test]
    fn test_content_height_is_capped() {
        let mut txn = TransactionMother::converted();
        txn.kind = crate::domain::TransactionType::Debit;
        let details = details_of(&txn);
        let panel = DetailsPanel::new(&details, "receipt");
        assert!(panel.content_height(100) <= 9);
        assert!(panel.content_height(30) <= 15);
    }

    #[test]
    fn test_confirming_refund_changes_button() {
        let details = details_of(&TransactionMother::credit(2550, "USD"));
        let lines = DetailsPanel::new(&details, "receipt")
            .confirming_refund(true)
            .info_lines();
        assert_eq!(
            lines.last().map(ToString::to_string).as_deref(),
            Some("[ Refund? ] y/n")
        );
    }
}
