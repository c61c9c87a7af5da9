//! Receipt frame widget.
//!
//! Shows the receipt of an expense: the uploaded attachment with its preview
//! URL, or the placeholder when nothing was uploaded.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::{BORDER_STYLE, LINK_STYLE, MUTED_COLOR};
use crate::view::ReceiptFrame;

use super::helpers::truncate_middle;

// ============================================================================
// ReceiptFrameWidget
// ============================================================================

/// A bordered frame describing a receipt.
///
/// ```text
/// ╭ receipt ──────────────╮
/// │ Open receipt in a new │
/// │ https://ima…=640      │
/// ╰───────────────────────╯
/// ```
#[derive(Debug, Clone)]
pub struct ReceiptFrameWidget<'a> {
    frame: &'a ReceiptFrame,
    title: &'a str,
}

impl<'a> ReceiptFrameWidget<'a> {
    /// Rows the widget needs, borders included.
    pub const HEIGHT: u16 = 4;

    /// Preferred width next to the other detail columns.
    pub const WIDTH: u16 = 26;

    #[must_use]
    pub const fn new(frame: &'a ReceiptFrame, title: &'a str) -> Self {
        Self { frame, title }
    }

    /// Content lines for an inner width of `width` columns.
    #[must_use]
    pub fn to_lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width);
        match self.frame {
            ReceiptFrame::Attachment {
                preview_src, title, ..
            } => vec![
                Line::from(Span::styled(
                    truncate_middle(title, width),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(truncate_middle(preview_src, width), LINK_STYLE)),
            ],
            ReceiptFrame::Placeholder { src, caption } => vec![
                Line::from(Span::styled(
                    truncate_middle(caption, width),
                    Style::default()
                        .fg(MUTED_COLOR)
                        .add_modifier(Modifier::ITALIC),
                )),
                Line::from(Span::styled(
                    truncate_middle(src, width),
                    Style::default().fg(MUTED_COLOR),
                )),
            ],
        }
    }
}

impl Widget for ReceiptFrameWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(BORDER_STYLE)
            .title(format!(" {} ", self.title));
        let inner = block.inner(area);
        let lines = self.to_lines(inner.width);

        block.render(area, buf);
        Paragraph::new(lines).render(inner, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_placeholder_lines() {
        let frame = ReceiptFrame::Placeholder {
            src: "/static/images/receipt.svg".to_string(),
            caption: "no receipt".to_string(),
        };
        let lines = ReceiptFrameWidget::new(&frame, "receipt").to_lines(40);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].to_string(), "no receipt");
        assert_eq!(lines[1].to_string(), "/static/images/receipt.svg");
    }

    #[test]
    fn test_attachment_renders_in_frame() {
        let frame = ReceiptFrame::Attachment {
            href: "https://s3.example.com/r.png".to_string(),
            preview_src: "https://img.example.com/r.png".to_string(),
            title: "Open receipt".to_string(),
        };
        let area = Rect::new(0, 0, 34, ReceiptFrameWidget::HEIGHT);
        let mut buf = Buffer::empty(area);
        ReceiptFrameWidget::new(&frame, "receipt").render(area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.starts_with("╭ receipt "), "got: {content}");
        assert!(content.contains("│Open receipt"));
        assert!(content.contains("│https://img.example.com/r.png"));
    }

    #[test]
    fn test_long_preview_is_truncated() {
        let frame = ReceiptFrame::Attachment {
            href: String::new(),
            preview_src: "https://images.example.com/proxy/images?src=a&width=640".to_string(),
            title: "Open".to_string(),
        };
        let lines = ReceiptFrameWidget::new(&frame, "receipt").to_lines(20);
        assert_eq!(lines[1].to_string().chars().count(), 20);
        assert!(lines[1].to_string().contains('…'));
    }
}
