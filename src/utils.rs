//! Presentation helpers shared by the view and the TUI.
//!
//! - String capitalization
//! - Receipt preview URLs through the image proxy
//! - Invoice paths and absolute links

use reqwest::Url;
use uuid::Uuid;

use crate::constants::DEFAULT_PREVIEW_WIDTH;

// ============================================================================
// Text
// ============================================================================

/// Upper-cases the first character of `s`, leaving the rest untouched.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(capitalize("stripe"), "Stripe");
/// assert_eq!(capitalize("payPal"), "PayPal");
/// ```
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Image Preview
// ============================================================================

/// Builds thumbnail URLs for receipts through the image proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    images_url: String,
    width: u32,
}

impl ImagePreview {
    /// Creates a preview helper for the proxy at `images_url`.
    #[must_use]
    pub fn new(images_url: impl Into<String>) -> Self {
        Self {
            images_url: images_url.into(),
            width: DEFAULT_PREVIEW_WIDTH,
        }
    }

    /// Returns the preview URL for `src`.
    ///
    /// SVG images are served as-is; everything else goes through
    /// `{images_url}/proxy/images`. If the proxy URL cannot be built the
    /// original source is returned.
    #[must_use]
    pub fn preview(&self, src: &str) -> String {
        if is_svg(src) {
            return src.to_string();
        }

        let base = format!("{}/proxy/images", self.images_url.trim_end_matches('/'));
        let width = self.width.to_string();
        match Url::parse_with_params(&base, &[("src", src), ("width", width.as_str())]) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::warn!("Cannot build preview URL from '{base}': {e}");
                src.to_string()
            }
        }
    }
}

fn is_svg(src: &str) -> bool {
    let path = src.split(['?', '#']).next().unwrap_or_default();
    path.to_ascii_lowercase().ends_with(".svg")
}

// ============================================================================
// Links
// ============================================================================

/// Site-relative path of a transaction's invoice PDF.
#[must_use]
pub fn invoice_path(collective_slug: &str, transaction_uuid: Uuid) -> String {
    format!("/{collective_slug}/transactions/{transaction_uuid}/invoice.pdf")
}

/// Resolves a site-relative `path` against `website_url`.
///
/// Absolute URLs are returned unchanged.
#[must_use]
pub fn absolute_url(website_url: &str, path: &str) -> String {
    if Url::parse(path).is_ok() {
        return path.to_string();
    }
    match Url::parse(website_url).and_then(|base| base.join(path)) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}{}", website_url.trim_end_matches('/'), path),
    }
}

// ============================================================================
// Tests
// ============================================================================
