//! State management for the ledgerlens TUI.
//!
//! The state is split by concern:
//!
//! - [`DataState`] - The loaded ledger and the selected transaction
//! - [`UiState`] - Details mode and transition, refund prompt, toasts
//! - [`AppConfig`] - Persistent configuration with load/save capabilities
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │                    App                    │
//! ├──────────────┬──────────────┬─────────────┤
//! │  DataState   │   UiState    │  AppConfig  │
//! │  - ledger    │  - mode      │  - locale   │
//! │  - selection │  - refund    │  - urls     │
//! │              │  - toast     │  - messages │
//! └──────────────┴──────────────┴─────────────┘
//! ```

use std::io;

use crate::commands::InputContext;
use crate::domain::Transaction;
use crate::intl::{Intl, Localizer, MessageId};
use crate::refund::SessionRefunds;
use crate::utils::ImagePreview;
use crate::view::{RenderContext, TransactionDetails};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_actions;
mod app_lifecycle;

pub mod clipboard;
pub mod config;
pub mod data;
pub mod transition;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use clipboard::{Clipboard, ClipboardError};
pub use config::AppConfig;
pub use data::DataState;
pub use ui_state::UiState;

// ============================================================================
// Platform Hooks
// ============================================================================

/// Side effects that leave the terminal: browser and clipboard.
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub open_url: fn(&str) -> io::Result<()>,
    pub copy_text: fn(&str) -> Result<(), ClipboardError>,
}

impl Default for Platform {
    fn default() -> Self {
        Self {
            open_url: |url| open::that(url),
            copy_text: |text| Clipboard::default().copy_text(text),
        }
    }
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Ledger and selection.
    pub data: DataState,

    /// Presentation state.
    pub ui: UiState,

    /// Configuration the session was started with.
    pub config: AppConfig,

    /// Localizer built from the configuration.
    pub(crate) intl: Intl,

    /// Receipt preview helper built from the configuration.
    pub(crate) previews: ImagePreview,

    /// Refunds requested in this session.
    pub(crate) refunds: SessionRefunds,

    pub(crate) platform: Platform,

    /// Whether the application should exit.
    pub exit: bool,
}

impl App {
    #[must_use]
    pub fn intl(&self) -> &Intl {
        &self.intl
    }

    /// Which keybindings apply right now.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        if self.ui.has_active_popup() {
            InputContext::RefundConfirm
        } else {
            InputContext::Main
        }
    }

    /// Detail view of the selected transaction in the current mode.
    #[must_use]
    pub fn selected_details(&self) -> Option<TransactionDetails> {
        self.data
            .selected_transaction()
            .map(|txn| self.details_for(txn))
    }

    /// Detail view of any transaction of the ledger.
    #[must_use]
    pub fn details_for(&self, txn: &Transaction) -> TransactionDetails {
        TransactionDetails::build(
            txn,
            &self.data.ledger.collective,
            self.data.viewer(),
            self.ui.mode,
            RenderContext::new(&self.intl, &self.previews),
        )
    }

    /// Question asked before refunding the selected transaction.
    #[must_use]
    pub fn refund_prompt(&self) -> Option<String> {
        let txn = self.data.selected_transaction()?;
        let amount = self.intl.format_minor_units(txn.amount.saturating_abs(), &txn.currency);
        let collective = self.data.ledger.collective.display_name();
        Some(self.intl.format_message(
            MessageId::RefundConfirm,
            &[("amount", amount.as_str()), ("collective", collective)],
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
