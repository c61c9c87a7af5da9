//! Ledger loading.
//!
//! - [`http`] - reqwest wrapper with standard headers and timeout
//! - [`ledger`] - [`LedgerSource`] parsing and the [`LedgerClient`]

pub mod http;
pub mod ledger;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::HttpConfig;
pub use ledger::{LedgerClient, LedgerSource};
