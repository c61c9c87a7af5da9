//! HTTP access for remote ledger snapshots.

use std::time::Duration;

use reqwest::{Client, header};

use crate::domain::LedgerError;

/// Timeout of a whole ledger download.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("ledgerlens/", env!("CARGO_PKG_VERSION"));

/// Settings for remote ledgers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub timeout: Duration,
    /// Sent as a bearer token when set.
    pub api_key: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_key: None,
        }
    }
}

/// Thin `reqwest` client that fetches JSON documents as text.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    #[must_use]
    pub fn with_config(config: HttpConfig) -> Self {
        Self {
            inner: Client::new(),
            config,
        }
    }

    /// The GET request for `url` with JSON accept header, user agent,
    /// timeout and optional bearer token.
    #[must_use]
    pub fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self
            .inner
            .get(url)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .timeout(self.config.timeout);
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    /// Downloads `url` and returns the body.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Http`] on connection failures, timeouts and
    /// non-success status codes.
    pub async fn fetch_text(&self, url: &str) -> Result<String, LedgerError> {
        let response = self.request(url).send().await?;
        let status = response.status();
        tracing::debug!(%status, "GET {url}");
        Ok(response.error_for_status()?.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_headers() {
        let client = HttpClient::with_config(HttpConfig {
            api_key: Some("secret".to_string()),
            ..HttpConfig::default()
        });
        let request = client
            .request("https://example.com/ledger.json")
            .build()
            .unwrap();

        let headers = request.headers();
        assert_eq!(headers[header::ACCEPT], "application/json");
        assert_eq!(headers[header::AUTHORIZATION], "Bearer secret");
        assert!(
            headers[header::USER_AGENT]
                .to_str()
                .unwrap()
                .starts_with("ledgerlens/")
        );
        assert_eq!(request.timeout(), Some(&Duration::from_secs(30)));
    }

    #[test]
    fn test_anonymous_request_has_no_authorization() {
        let request = HttpClient::default()
            .request("https://example.com/ledger.json")
            .build()
            .unwrap();
        assert!(request.headers().get(header::AUTHORIZATION).is_none());
    }
}
