//! Refund button widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};
use crate::view::RefundControl;

/// The refund action as a one-line button.
///
/// ```text
/// [ Refund ] r
/// [ Refunded ]
/// [ Refund? ] y/n
/// ```
#[derive(Debug, Clone)]
pub struct RefundButtonWidget<'a> {
    control: &'a RefundControl,
    confirming: bool,
}

impl<'a> RefundButtonWidget<'a> {
    #[must_use]
    pub const fn new(control: &'a RefundControl) -> Self {
        Self {
            control,
            confirming: false,
        }
    }

    /// Shows the button waiting for confirmation.
    #[must_use]
    pub const fn confirming(mut self, confirming: bool) -> Self {
        self.confirming = confirming;
        self
    }

    #[must_use]
    pub fn to_line(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD);

        if self.control.refunded {
            return Line::from(Span::styled(
                format!("[ {} ]", self.control.label),
                Style::default()
                    .fg(MUTED_COLOR)
                    .add_modifier(Modifier::DIM),
            ));
        }

        let button_style = Style::default()
            .fg(WARNING_COLOR)
            .add_modifier(Modifier::BOLD);
        if self.confirming {
            Line::from(vec![
                Span::styled(
                    format!("[ {}? ]", self.control.label),
                    button_style.add_modifier(Modifier::REVERSED),
                ),
                Span::raw(" "),
                Span::styled("y/n", key_style),
            ])
        } else {
            Line::from(vec![
                Span::styled(format!("[ {} ]", self.control.label), button_style),
                Span::raw(" "),
                Span::styled("r", key_style),
            ])
        }
    }
}

impl Widget for RefundButtonWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.to_line().render(area, buf);
    }
}
