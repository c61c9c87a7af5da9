//! Persistent settings: locale, site URLs, message overrides and the last
//! opened ledger.
//!
//! Stored as JSON at:
//! - Linux: `~/.config/ledgerlens/config.json`
//! - macOS: `~/Library/Application Support/ledgerlens/config.json`
//! - Windows: `%APPDATA%/ledgerlens/config.json`
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.locale = Locale::FrFr;
//! config.save()?;
//! ```

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use serde::{Deserialize, Serialize};

use crate::client::HttpConfig;
use crate::constants::{DEFAULT_IMAGES_URL, DEFAULT_WEBSITE_URL};
use crate::intl::{Intl, Locale};
use crate::utils::ImagePreview;

/// Directory name under the platform config and data directories.
pub const APP_NAME: &str = "ledgerlens";

const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Settings read at startup; command-line flags override them per session.
///
/// # Fields
///
/// * `locale` - Display locale for messages and amounts
/// * `website_url` - Public site used to resolve invoice links
/// * `images_url` - Image proxy used for receipt previews
/// * `start_open` - Whether transaction details start expanded
/// * `messages` - Message overrides keyed by message id
/// * `last_source` - Ledger opened last, used when no `--data` is given
/// * `api_key` - Bearer token for remote ledgers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub locale: Locale,
    pub website_url: String,
    pub images_url: String,
    pub start_open: bool,
    pub messages: HashMap<String, String>,
    pub last_source: Option<String>,
    pub api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            website_url: DEFAULT_WEBSITE_URL.to_string(),
            images_url: DEFAULT_IMAGES_URL.to_string(),
            start_open: true,
            messages: HashMap::new(),
            last_source: None,
            api_key: None,
        }
    }
}

impl AppConfig {
    /// Location of `config.json` under the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no config directory.
    pub fn config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
            .ok_or_else(|| {
                eyre!(
                    "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
                )
            })
    }

    /// The stored configuration, or defaults when there is none or it is
    /// unreadable.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(Some(config)) => config,
            Ok(None) => {
                tracing::debug!("No configuration file yet, using defaults");
                Self::default()
            }
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err:#}");
                Self::default()
            }
        }
    }

    /// Reads the stored configuration; `None` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn try_load() -> Result<Option<Self>> {
        let path = Self::config_path()?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).wrap_err_with(|| format!("reading {}", path.display())),
        };
        Self::from_json(&content)
            .wrap_err_with(|| format!("parsing {}", path.display()))
            .map(Some)
    }

    /// Parses a configuration document; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Writes the configuration as pretty JSON, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        tracing::info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Localizer for the configured locale and message overrides.
    #[must_use]
    pub fn intl(&self) -> Intl {
        Intl::new(self.locale).with_overrides(&self.messages)
    }

    /// Receipt preview helper for the configured image proxy.
    #[must_use]
    pub fn image_preview(&self) -> ImagePreview {
        ImagePreview::new(self.images_url.clone())
    }

    /// HTTP settings for remote ledgers.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            api_key: self.api_key.clone(),
            ..HttpConfig::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intl::{Localizer, MessageId};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.locale, Locale::EnUs);
        assert_eq!(config.website_url, "https://opencollective.com");
        assert!(config.start_open);
        assert!(config.messages.is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut config = AppConfig {
            locale: Locale::DeDe,
            start_open: false,
            last_source: Some("https://example.com/ledger.json".to_string()),
            ..AppConfig::default()
        };
        config
            .messages
            .insert("transaction.host".to_string(), "fiscal host".to_string());

        let json = serde_json::to_string(&config).unwrap();
        let deserialized = AppConfig::from_json(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_json(r#"{ "locale": "fr" }"#).unwrap();
        assert_eq!(config.locale, Locale::FrFr);
        assert_eq!(config.images_url, "https://images.opencollective.com");
        assert!(config.start_open);
    }

    #[test]
    fn test_invalid_locale_is_rejected() {
        assert!(AppConfig::from_json(r#"{ "locale": "tlh" }"#).is_err());
    }

    #[test]
    fn test_intl_applies_overrides() {
        let mut config = AppConfig::default();
        config
            .messages
            .insert("transaction.host".to_string(), "fiscal host".to_string());
        assert_eq!(
            config.intl().format_message(MessageId::Host, &[]),
            "fiscal host"
        );
    }

    #[test]
    fn test_json_format() {
        let json = serde_json::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(json.contains("\"locale\": \"en-US\""));
        assert!(json.contains("website_url"));
        assert!(json.contains("images_url"));
    }

    #[test]
    fn test_config_path_has_json_extension() {
        if let Ok(path) = AppConfig::config_path() {
            let extension = path.extension().and_then(|e| e.to_str());
            assert_eq!(extension, Some("json"));
        }
    }
}
