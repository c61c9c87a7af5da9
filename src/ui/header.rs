//! Header bar: logo, collective and who is looking at it.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::domain::{Ledger, Permissions};
use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

/// Renders the application header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width < 4 {
        return;
    }

    let row = Rect::new(inner.x + 1, inner.y, inner.width - 2, 1);
    frame.render_widget(Paragraph::new(title_line(&app.data.ledger)), row);

    if inner.width > 50 {
        let viewer = Line::from(vec![
            viewer_span(&app.data.ledger),
            Span::styled(
                format!("  {}", app.intl().locale().tag()),
                Style::default().fg(MUTED_COLOR),
            ),
        ]);
        frame.render_widget(Paragraph::new(viewer).alignment(Alignment::Right), row);
    }
}

fn logo() -> Vec<Span<'static>> {
    vec![
        "[".into(),
        "ledger".green().bold(),
        "lens".cyan().bold(),
        "]".into(),
    ]
}

fn title_line(ledger: &Ledger) -> Line<'static> {
    let mut spans = logo();
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        ledger.collective.display_name().to_string(),
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD),
    ));
    if let Some(host) = ledger.collective.host_slug() {
        spans.push(Span::styled(
            format!(" @ {host}"),
            Style::default().fg(MUTED_COLOR),
        ));
    }
    Line::from(spans)
}

/// The viewer and the strongest permission they hold on this collective.
fn viewer_span(ledger: &Ledger) -> Span<'static> {
    let Some(user) = &ledger.logged_in_user else {
        return Span::styled("anonymous", Style::default().fg(MUTED_COLOR));
    };
    let (badge, color) = if user.is_root() {
        ("root", WARNING_COLOR)
    } else if user.can_edit_collective(&ledger.collective) {
        ("editor", SUCCESS_COLOR)
    } else {
        ("viewer", MUTED_COLOR)
    };
    Span::styled(
        format!("{} ({badge})", user.display_name()),
        Style::default().fg(color),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MemberRole;
    use crate::state::AppConfig;
    use crate::test_utils::{LedgerMother, UserMother, buffer_to_string};
    use crate::view::DetailsMode;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case::root(Some(UserMother::root()), "xdamman (root)")]
    #[case::admin(Some(UserMother::with_role("webpack", MemberRole::Admin)), "xdamman (editor)")]
    #[case::backer(Some(UserMother::with_role("webpack", MemberRole::Backer)), "xdamman (viewer)")]
    #[case::anonymous(None, "anonymous")]
    fn test_viewer_badge(
        #[case] user: Option<crate::domain::LoggedInUser>,
        #[case] expected: &str,
    ) {
        let ledger = Ledger {
            logged_in_user: user,
            ..LedgerMother::sample()
        };
        assert_eq!(viewer_span(&ledger).content, expected);
    }

    #[test]
    fn test_header_renders_collective_and_viewer() {
        let app = App::new(
            LedgerMother::sample(),
            None,
            AppConfig::default(),
            DetailsMode::Open,
        );
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        let row = content.lines().nth(1).unwrap_or_default();
        assert!(row.contains("[ledgerlens]  webpack @ opensource"), "got: {row}");
        assert!(row.contains("xdamman (root)  en-US"), "got: {row}");
    }
}
