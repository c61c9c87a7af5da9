//! Refund confirmation popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

const POPUP_WIDTH: u16 = 50;
const POPUP_HEIGHT: u16 = 7;

/// Renders the centered question asked before a refund is submitted.
///
/// # Arguments
///
/// * `frame` - The Ratatui frame to render to
/// * `area` - The terminal area to center the popup in
/// * `title` - Popup title, the localized refund label
/// * `prompt` - The question, e.g. `Refund $25.50 to webpack?`
pub fn render(frame: &mut Frame, area: Rect, title: &str, prompt: &str) {
    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);
    let block = create_popup_block(title);
    let inner = block.inner(popup_area);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 3 {
        frame.render_widget(Paragraph::new(prompt).alignment(Alignment::Center), inner);
        return;
    }

    let message_area = Rect::new(inner.x, inner.y + 1, inner.width, 2);
    frame.render_widget(
        Paragraph::new(prompt)
            .style(Style::default().fg(WARNING_COLOR))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        message_area,
    );

    let separator_area = Rect::new(inner.x, inner.bottom() - 2, inner.width, 1);
    frame.render_widget(
        Paragraph::new("─".repeat(usize::from(inner.width)))
            .style(Style::default().fg(Color::DarkGray)),
        separator_area,
    );

    let key = Style::default()
        .fg(PRIMARY_COLOR)
        .add_modifier(Modifier::BOLD);
    let hint = Style::default().fg(MUTED_COLOR);
    let help = Line::from(vec![
        Span::styled("y", key),
        Span::styled("/", hint),
        Span::styled("Enter", key),
        Span::styled(":Refund  ", hint),
        Span::styled("n", key),
        Span::styled("/", hint),
        Span::styled("Esc", key),
        Span::styled(":Cancel", hint),
    ]);
    let help_area = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), help_area);
}

// ============================================================================
// Tests
// ============================================================================
