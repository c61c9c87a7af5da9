//! UI helper functions for creating styled blocks and labeled values.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE, LABEL_STYLE};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block styled by focus state.
///
/// # Arguments
///
/// * `title` - The title text to display in the block border
/// * `focused` - Whether the block should be styled as focused/active
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'static> {
    let display_title = match (title.is_empty(), focused) {
        (true, _) => String::new(),
        (false, true) => format!(" ● {title} "),
        (false, false) => format!(" {title} "),
    };

    let (border_style, border_set, title_style) = if focused {
        (FOCUSED_BORDER_STYLE, border::DOUBLE, FOCUSED_TITLE_STYLE)
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup-style block with centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(FOCUSED_BORDER_STYLE)
}

// ============================================================================
// Labeled Values
// ============================================================================

/// A detail label rendered in upper case, as section headings are.
#[must_use]
pub fn label_span(label: &str) -> Span<'static> {
    Span::styled(label.to_uppercase(), LABEL_STYLE)
}

/// `LABEL  value` on one line.
#[must_use]
pub fn labeled_line(label: &str, value: Span<'static>) -> Line<'static> {
    Line::from(vec![label_span(label), Span::raw("  "), value])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    fn render_block(block: Block<'static>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        block.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_border_block_states() {
        assert_eq!(
            render_block(create_border_block("Ledger", false), 12),
            "╭ Ledger ──╮\n│          │\n╰──────────╯"
        );
        assert_eq!(
            render_block(create_border_block("Ledger", true), 14),
            "╔ ● Ledger ══╗\n║            ║\n╚════════════╝"
        );
        assert_eq!(
            render_block(create_border_block("", false), 4),
            "╭──╮\n│  │\n╰──╯"
        );
    }

    #[test]
    fn test_popup_block_centers_title() {
        let content = render_block(create_popup_block("Refund"), 20);
        assert_eq!(content.lines().next(), Some("╭───── Refund ─────╮"));
    }

    #[test]
    fn test_labeled_line_uppercases_label() {
        let line = labeled_line("payment method", Span::raw("Stripe"));
        assert_eq!(line.to_string(), "PAYMENT METHOD  Stripe");
    }
}
