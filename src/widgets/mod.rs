//! Widget components for the ledgerlens TUI.
//!
//! - [`helpers`]: Text truncation and transaction kind markers
//! - [`receipt`]: The receipt frame of an expense
//! - [`refund_button`]: The refund action button

pub mod helpers;
pub mod receipt;
pub mod refund_button;

pub use receipt::ReceiptFrameWidget;
pub use refund_button::RefundButtonWidget;
