//! UI rendering for the ledgerlens TUI.
//!
//! - `panels` - The ledger list and the transaction details panel
//! - `popups` - Modal dialogs (refund confirmation)
//! - `components` - Overlays (toast notifications)
//! - `layout` - Layout calculations
//! - `header` / `footer` - Top and bottom bars
//! - `helpers` - Styled blocks and labeled values

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::Frame;

use crate::intl::{Localizer, MessageId};
use crate::state::App;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draws one frame of the application.
///
/// # Arguments
///
/// * `app` - The application state to render
/// * `frame` - The ratatui frame to render to
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let layout = layout::calculate_app_layout(area);

    header::render(frame, layout.header, app);
    panels::transactions::render(frame, layout.main, app);
    footer::render(frame, layout.footer, app);

    if app.ui.has_active_popup() {
        if let Some(prompt) = app.refund_prompt() {
            let title = app.intl().format_message(MessageId::Refund, &[]);
            popups::refund_confirm::render(frame, area, &title, &prompt);
        }
    }

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, area, message);
    }
}

// ============================================================================
// Tests
// ============================================================================
