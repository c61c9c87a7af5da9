//! Ledger panel: one row per transaction, details expanded below the
//! selected row.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::Transaction;
use crate::intl::{Localizer, MessageId};
use crate::state::App;
use crate::theme::{MUTED_COLOR, SELECTED_STYLE, kind_color};
use crate::ui::helpers::create_border_block;
use crate::ui::layout::list_offset;
use crate::widgets::helpers::{kind_icon, truncate_end};

use super::details::DetailsPanel;

/// Columns the details panel is indented by.
const DETAILS_INDENT: u16 = 2;

/// Renders the ledger panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let transactions = &app.data.ledger.transactions;
    let count = transactions.len().to_string();
    let title = app
        .intl()
        .format_message(MessageId::TransactionsTitle, &[("count", count.as_str())]);
    let block = create_border_block(&title, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    if transactions.is_empty() {
        let empty = Paragraph::new(app.intl().format_message(MessageId::NoTransactions, &[]))
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center);
        let y = inner.y + inner.height / 2;
        frame.render_widget(empty, Rect::new(inner.x, y, inner.width, 1));
        return;
    }

    let selected = app.data.selected_index();
    let details = app.selected_details();
    let receipt_title = app.intl().format_message(MessageId::Receipt, &[]);
    let details_width = inner.width.saturating_sub(DETAILS_INDENT);
    let panel = details.as_ref().map(|details| {
        DetailsPanel::new(details, &receipt_title).confirming_refund(app.ui.refund.is_confirming())
    });
    let full_height = panel
        .as_ref()
        .map_or(0, |panel| panel.content_height(details_width));
    let details_rows = app.ui.transition.height(full_height);

    let offset = list_offset(selected, inner.height, details_rows);
    let bottom = inner.bottom();
    let mut y = inner.y;

    for (index, txn) in transactions.iter().enumerate().skip(offset) {
        if y >= bottom {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);
        render_row(frame, row, app, txn, index == selected);
        y += 1;

        if index == selected && details_rows > 0 {
            if let Some(panel) = panel.clone() {
                let visible = details_rows.min(bottom - y);
                let details_area = Rect::new(inner.x + DETAILS_INDENT, y, details_width, visible);
                render_clipped(panel, details_area, full_height, frame.buffer_mut());
            }
            y = y.saturating_add(details_rows);
        }
    }
}

/// One ledger row: marker, date, kind, description and amount.
fn render_row(frame: &mut Frame, area: Rect, app: &App, txn: &Transaction, selected: bool) {
    let amount = app.intl().format_minor_units(txn.amount, &txn.currency);
    let date = txn
        .created_at
        .map_or_else(|| "----------".to_string(), |at| at.format("%Y-%m-%d").to_string());
    let marker = if selected { "▶" } else { " " };
    let kind_style = Style::default().fg(kind_color(txn.kind));

    let fixed = 2 + date.chars().count() + 3 + amount.chars().count() + 1;
    let description = truncate_end(
        txn.display_description(),
        usize::from(area.width).saturating_sub(fixed),
    );

    let style = if selected {
        SELECTED_STYLE.add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let left = Line::from(vec![
        Span::raw(format!("{marker} ")),
        Span::styled(date, Style::default().fg(MUTED_COLOR)),
        Span::raw(" "),
        Span::styled(kind_icon(txn.kind), kind_style),
        Span::raw(" "),
        Span::raw(description),
    ]);
    let right = Line::from(Span::styled(amount, kind_style)).alignment(Alignment::Right);

    frame.render_widget(Paragraph::new(left).style(style), area);
    frame.render_widget(
        Paragraph::new(right),
        Rect::new(area.x, area.y, area.width.saturating_sub(1), 1),
    );
}

/// Renders `panel` as if it were `full_height` rows tall but only keeps the
/// rows that fit in `area`, so the panel slides open instead of squashing.
fn render_clipped(panel: DetailsPanel<'_>, area: Rect, full_height: u16, buf: &mut Buffer) {
    let scratch_area = Rect {
        height: full_height.max(area.height),
        ..area
    };
    let mut scratch = Buffer::empty(scratch_area);
    panel.render(scratch_area, &mut scratch);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let (Some(source), Some(target)) = (scratch.cell((x, y)), buf.cell_mut((x, y))) {
                *target = source.clone();
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
