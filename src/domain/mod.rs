//! Domain types for the ledgerlens viewer.
//!
//! These records are owned by the platform; the viewer only reads them.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for loading and refund requests
//! - [`transaction`] - Transactions and their nested records
//! - [`collective`] - Collectives and collective references
//! - [`user`] - The viewing user and the [`Permissions`] trait
//! - [`ledger`] - The snapshot browsed in a session

// ============================================================================
// Module Declarations
// ============================================================================

pub mod collective;
pub mod error;
pub mod ledger;
pub mod transaction;
pub mod user;

// ============================================================================
// Re-exports
// ============================================================================

pub use collective::{Collective, CollectiveRef};
pub use error::LedgerError;
pub use ledger::Ledger;
pub use transaction::{RefundReference, Transaction, TransactionType};
pub use user::{LoggedInUser, Permissions};
