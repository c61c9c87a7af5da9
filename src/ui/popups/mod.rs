//! Modal popups drawn over the ledger.

pub mod refund_confirm;
