//! Loading ledger snapshots from disk or over HTTP.

use std::fmt;
use std::path::PathBuf;

use crate::domain::{Ledger, LedgerError};

use super::http::{HttpClient, HttpConfig};

// ============================================================================
// LedgerSource
// ============================================================================

/// Where a ledger snapshot comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerSource {
    /// A JSON file on disk.
    File(PathBuf),
    /// A JSON document served over HTTP(S).
    Url(String),
}

impl LedgerSource {
    /// Interprets a command-line argument: `http(s)://` is a URL, anything
    /// else a file path.
    #[must_use]
    pub fn parse(arg: &str) -> Self {
        let trimmed = arg.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for LedgerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

// ============================================================================
// LedgerClient
// ============================================================================

/// Reads ledgers from any [`LedgerSource`].
#[derive(Debug, Clone, Default)]
pub struct LedgerClient {
    http: HttpClient,
}

impl LedgerClient {
    #[must_use]
    pub fn new(config: HttpConfig) -> Self {
        Self {
            http: HttpClient::with_config(config),
        }
    }

    /// Loads and parses the ledger at `source`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Io`] or [`LedgerError::Http`] when the source
    /// cannot be read and [`LedgerError::Parse`] for invalid content.
    pub async fn load(&self, source: &LedgerSource) -> Result<Ledger, LedgerError> {
        let content = match source {
            LedgerSource::File(path) => {
                tracing::debug!("Reading ledger from {}", path.display());
                tokio::fs::read_to_string(path).await?
            }
            LedgerSource::Url(url) => {
                tracing::debug!("Fetching ledger from {url}");
                self.http.fetch_text(url).await?
            }
        };

        let ledger = Ledger::from_json(&content)?;
        tracing::info!(
            "Loaded {} transactions of '{}' from {source}",
            ledger.transactions.len(),
            ledger.collective.slug
        );
        Ok(ledger)
    }
}

// ============================================================================
// Tests
// ============================================================================
