//! Theme and styling constants for the ledgerlens TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::TransactionType;

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Money coming in.
pub const CREDIT_COLOR: Color = Color::Green;

/// Money going out.
pub const DEBIT_COLOR: Color = Color::LightRed;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for the selected row.
pub const SELECTED_STYLE: Style = Style::new().bg(Color::DarkGray);

/// Small caps-like section labels in the details panel.
pub const LABEL_STYLE: Style = Style::new().fg(MUTED_COLOR).add_modifier(Modifier::BOLD);

/// Clickable-looking values such as links.
pub const LINK_STYLE: Style = Style::new()
    .fg(PRIMARY_COLOR)
    .add_modifier(Modifier::UNDERLINED);

/// Color of a transaction kind.
#[must_use]
pub const fn kind_color(kind: TransactionType) -> Color {
    match kind {
        TransactionType::Credit => CREDIT_COLOR,
        TransactionType::Debit => DEBIT_COLOR,
    }
}
