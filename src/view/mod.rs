//! View models built from ledger data.
//!
//! - [`amount_details`] - Gross amount, conversion and fee breakdown
//! - [`transaction_details`] - The [`TransactionDetails`] view model
//! - [`plain`] - Plain-text rendering for the CLI

pub mod amount_details;
pub mod plain;
pub mod transaction_details;

pub use plain::render_plain;
pub use transaction_details::{
    DetailsMode, ReceiptFrame, RefundControl, RenderContext, TransactionDetails,
};
