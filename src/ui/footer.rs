//! Footer bar with the keybindings of the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the footer bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(hints(app.input_context(), app.ui.mode.is_open()))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Key hints for `context`. Detail actions are only listed while the details
/// are open.
#[must_use]
pub fn hints(context: InputContext, details_open: bool) -> &'static str {
    match (context, details_open) {
        (InputContext::RefundConfirm, _) => "y:Refund  n:Cancel",
        (InputContext::Main, true) => {
            "q:Quit  ↑↓:Move  Enter:Hide  o:Receipt  i:Invoice  c:Copy link  r:Refund"
        }
        (InputContext::Main, false) => "q:Quit  ↑↓:Move  Enter:Details",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppConfig;
    use crate::test_utils::{LedgerMother, buffer_to_string};
    use crate::view::DetailsMode;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case(InputContext::Main, true, "o:Receipt")]
    #[case(InputContext::Main, false, "Enter:Details")]
    #[case(InputContext::RefundConfirm, true, "y:Refund")]
    fn test_hints(#[case] context: InputContext, #[case] open: bool, #[case] expected: &str) {
        assert!(hints(context, open).contains(expected));
    }

    #[test]
    fn test_footer_is_centered() {
        let app = App::new(
            LedgerMother::sample(),
            None,
            AppConfig::default(),
            DetailsMode::Closed,
        );
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        let leading = content.len() - content.trim_start().len();
        let trailing = content.len() - content.trim_end().len();
        assert!(content.contains("q:Quit  ↑↓:Move  Enter:Details"));
        assert!(leading.abs_diff(trailing) <= 1);
    }
}
