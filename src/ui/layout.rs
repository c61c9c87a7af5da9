//! Layout calculations for the ledgerlens TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{
    DETAILS_MAX_HEIGHT, DETAILS_MAX_HEIGHT_NARROW, FOOTER_HEIGHT, HEADER_HEIGHT, NARROW_WIDTH,
};

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Collective and viewer.
    pub header: Rect,
    /// Transaction list with inline details.
    pub main: Rect,
    /// Keybinding hints.
    pub footer: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Splits the terminal into header, main area and footer.
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Centers a `width` x `height` popup in `parent`, clamped to fit.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(parent.width);
    let height = height.min(parent.height);
    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Detail columns stack vertically below this width.
#[must_use]
pub const fn is_narrow(width: u16) -> bool {
    width < NARROW_WIDTH
}

/// Tallest the open details panel may grow at `width`.
#[must_use]
pub const fn details_max_height(width: u16) -> u16 {
    if is_narrow(width) {
        DETAILS_MAX_HEIGHT_NARROW
    } else {
        DETAILS_MAX_HEIGHT
    }
}

/// First visible row of a list so that the selected row and the details
/// below it fit in `viewport` rows.
#[must_use]
pub fn list_offset(selected: usize, viewport: u16, details_rows: u16) -> usize {
    let needed = selected + 1 + usize::from(details_rows);
    needed.saturating_sub(usize::from(viewport)).min(selected)
}

// ============================================================================
// Tests
// ============================================================================
