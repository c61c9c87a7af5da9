//! UI presentation state.
//!
//! Holds everything about how the ledger is shown rather than what it
//! contains: the details display mode and its transition, the refund
//! control, and toast notifications.

use std::time::Duration;

use crate::refund::RefundButton;
use crate::view::DetailsMode;

use super::transition::HeightTransition;

// ============================================================================
// UI State
// ============================================================================

/// UI state: details mode, refund prompt and toasts.
///
/// # Example
///
/// ```ignore
/// let mut ui = UiState::new(DetailsMode::Open);
/// ui.toggle_details();
/// ui.show_toast("[+] Copied", 20);
/// ```
#[derive(Debug, Clone)]
pub struct UiState {
    /// Open or closed, as last requested.
    pub mode: DetailsMode,
    /// Animated height of the details panel.
    pub transition: HeightTransition,
    /// Refund control of the selected transaction.
    pub refund: RefundButton,
    /// Toast message and remaining ticks.
    pub toast: Option<(String, u16)>,
}

impl UiState {
    #[must_use]
    pub fn new(mode: DetailsMode) -> Self {
        Self {
            mode,
            transition: HeightTransition::settled(mode.is_open()),
            refund: RefundButton::new(),
            toast: None,
        }
    }

    /// Flips the details mode and starts the height animation.
    pub fn toggle_details(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn set_mode(&mut self, mode: DetailsMode) {
        self.mode = mode;
        self.transition.animate_to(mode.is_open());
    }

    /// Returns `true` while the refund confirmation is open.
    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.refund.is_confirming()
    }

    // ========================================================================
    // Toasts
    // ========================================================================

    /// Shows a toast notification that dismisses itself after `ticks`.
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u16) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed.
    pub fn tick_toast(&mut self) -> bool {
        match self.toast {
            Some((_, ref mut ticks)) if *ticks > 1 => {
                *ticks -= 1;
                false
            }
            Some(_) => {
                self.toast = None;
                true
            }
            None => false,
        }
    }

    /// Advances animations by one tick of length `dt`.
    ///
    /// # Returns
    ///
    /// `true` if the screen needs a redraw.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let animating = self.transition.is_animating();
        self.transition.tick(dt);
        let toast_removed = self.tick_toast();
        animating || toast_removed
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(DetailsMode::default())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DETAILS_TRANSITION;

    #[test]
    fn test_toast_lifecycle() {
        let mut ui = UiState::default();
        assert!(ui.toast.is_none());

        ui.show_toast("Hello", 2);
        assert_eq!(ui.toast.as_ref().map(|(msg, _)| msg.as_str()), Some("Hello"));

        assert!(!ui.tick_toast());
        assert!(ui.tick_toast());
        assert!(ui.toast.is_none());
        assert!(!ui.tick_toast());
    }

    #[test]
    fn test_toggle_details_animates() {
        let mut ui = UiState::new(DetailsMode::Open);
        ui.toggle_details();
        assert_eq!(ui.mode, DetailsMode::Closed);
        assert!(ui.transition.is_animating());

        ui.tick(DETAILS_TRANSITION);
        assert_eq!(ui.transition.height(9), 0);
    }

    #[test]
    fn test_tick_requests_redraw_only_while_something_changes() {
        let mut ui = UiState::new(DetailsMode::Open);
        assert!(!ui.tick(DETAILS_TRANSITION));

        ui.toggle_details();
        assert!(ui.tick(DETAILS_TRANSITION));
        assert!(!ui.tick(DETAILS_TRANSITION));

        ui.show_toast("Hello", 2);
        assert!(!ui.tick(DETAILS_TRANSITION));
        assert!(ui.tick(DETAILS_TRANSITION));
        assert!(!ui.tick(DETAILS_TRANSITION));
    }

    #[test]
    fn test_closed_start_is_collapsed() {
        let ui = UiState::new(DetailsMode::Closed);
        assert_eq!(ui.transition.height(9), 0);
        assert!(!ui.has_active_popup());
    }
}
