//! Localization: message translation and currency formatting.
//!
//! The detail view depends on the [`Localizer`] trait only; [`Intl`] is the
//! implementation backed by the built-in catalogs and user overrides from the
//! configuration file.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::LedgerError;

pub mod messages;
pub mod number;

pub use messages::MessageId;

// ============================================================================
// Locale
// ============================================================================

/// Supported display locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    #[default]
    EnUs,
    FrFr,
    DeDe,
}

impl Locale {
    /// BCP 47 tag of the locale.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::FrFr => "fr-FR",
            Self::DeDe => "de-DE",
        }
    }

    /// Parses `tag`, falling back to English for unsupported languages.
    #[must_use]
    pub fn from_tag_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|err| {
            tracing::warn!("{err}; falling back to {}", Self::default());
            Self::default()
        })
    }
}

impl FromStr for Locale {
    type Err = LedgerError;

    /// Accepts `en`, `en-US`, `fr_FR`, `DE` and similar; only the language
    /// subtag is significant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Ok(Self::EnUs),
            "fr" => Ok(Self::FrFr),
            "de" => Ok(Self::DeDe),
            _ => Err(LedgerError::invalid_input(format!(
                "unsupported locale '{s}'"
            ))),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.tag().to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ============================================================================
// Localizer
// ============================================================================

/// Translation and number formatting as consumed by the views.
pub trait Localizer {
    /// Translates `id`, substituting `{name}` placeholders from `values`.
    fn format_message(&self, id: MessageId, values: &[(&str, &str)]) -> String;

    /// Formats a major-unit amount in `currency`.
    fn format_currency(&self, amount: Decimal, currency: &str) -> String;

    /// Formats an amount given in minor units (cents).
    fn format_minor_units(&self, minor: i64, currency: &str) -> String {
        self.format_currency(Decimal::new(minor, 2), currency)
    }
}

// ============================================================================
// Intl
// ============================================================================

/// Catalog-backed [`Localizer`].
#[derive(Debug, Clone, Default)]
pub struct Intl {
    locale: Locale,
    overrides: HashMap<String, String>,
}

impl Intl {
    /// Creates a localizer for `locale` using the built-in catalogs.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            overrides: HashMap::new(),
        }
    }

    /// Adds message overrides keyed by message id.
    ///
    /// Keys that do not name a known message are dropped with a warning.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Self {
        for (id, template) in overrides {
            if MessageId::from_id(id).is_some() {
                self.overrides.insert(id.clone(), template.clone());
            } else {
                tracing::warn!("Ignoring override for unknown message id '{id}'");
            }
        }
        self
    }

    /// The active locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    fn template(&self, id: MessageId) -> &str {
        self.overrides
            .get(id.id())
            .map(String::as_str)
            .or_else(|| messages::builtin_message(self.locale, id))
            .unwrap_or_else(|| id.default_message())
    }
}

impl Localizer for Intl {
    fn format_message(&self, id: MessageId, values: &[(&str, &str)]) -> String {
        messages::interpolate(self.template(id), values)
    }

    fn format_currency(&self, amount: Decimal, currency: &str) -> String {
        number::format_currency(self.locale, amount, currency)
    }
}

// ============================================================================
// Tests
// ============================================================================
