//! Main content panels.
//!
//! - [`transactions`]: The ledger, one row per transaction
//! - [`details`]: Details of the selected transaction, expanded inline

pub mod details;
pub mod transactions;
