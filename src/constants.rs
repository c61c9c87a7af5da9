//! Application constants for ledgerlens.
//!
//! Centralized values for URLs, layout dimensions and timing used across the
//! view, the TUI and the configuration defaults.

use std::time::Duration;

// ============================================================================
// Platform Constants
// ============================================================================

/// Slug of the platform collective whose admins are root users.
pub const ROOT_COLLECTIVE_SLUG: &str = "opencollective";

/// Image shown in the receipt frame when an expense has no attachment.
pub const RECEIPT_PLACEHOLDER_SRC: &str = "/static/images/receipt.svg";

/// Default public website, used to turn invoice paths into links.
pub const DEFAULT_WEBSITE_URL: &str = "https://opencollective.com";

/// Default image proxy used for receipt previews.
pub const DEFAULT_IMAGES_URL: &str = "https://images.opencollective.com";

/// Width requested from the image proxy for receipt previews.
pub const DEFAULT_PREVIEW_WIDTH: u32 = 640;

// ============================================================================
// Timing
// ============================================================================

/// Interval between redraws and animation steps.
pub const TICK_RATE: Duration = Duration::from_millis(50);

/// Duration of the open/closed height transition of the details panel.
pub const DETAILS_TRANSITION: Duration = Duration::from_millis(500);

/// Control points of the details transition easing curve.
pub const DETAILS_EASING: (f64, f64, f64, f64) = (0.25, 0.46, 0.45, 0.94);

/// How long a toast stays visible, in ticks.
pub const TOAST_TICKS: u16 = 60;

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Maximum height of the open details panel, in rows.
pub const DETAILS_MAX_HEIGHT: u16 = 9;

/// Maximum height when columns are stacked on narrow terminals.
pub const DETAILS_MAX_HEIGHT_NARROW: u16 = 15;

/// Terminal width below which detail columns stack vertically.
pub const NARROW_WIDTH: u16 = 60;

/// Height of the application header, in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer, in rows.
pub const FOOTER_HEIGHT: u16 = 1;
