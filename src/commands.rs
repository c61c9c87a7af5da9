//! Command pattern for key event handling.
//!
//! Key input is translated into [`AppCommand`]s by a pure [`KeyMapper`], so
//! keybindings can be tested without a terminal.
//!
//! # Example
//!
//! ```ignore
//! let context = app.input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//!
//! match command {
//!     AppCommand::Quit => app.exit = true,
//!     AppCommand::ToggleDetails => app.toggle_details(),
//!     // ...
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which keybindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the ledger.
    Main,
    /// The refund confirmation prompt is open.
    RefundConfirm,
}

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Close the toast, or the prompt if one is open.
    Dismiss,

    // === Navigation ===
    /// Select the previous transaction.
    MoveUp,
    /// Select the next transaction.
    MoveDown,
    /// Select the first transaction.
    MoveTop,
    /// Select the last transaction.
    MoveBottom,

    // === Detail Actions ===
    /// Expand or collapse the details of the selected transaction.
    ToggleDetails,
    /// Open the uploaded receipt in the browser.
    OpenReceipt,
    /// Open the invoice PDF in the browser.
    OpenInvoice,
    /// Copy the absolute invoice URL to the clipboard.
    CopyInvoiceLink,
    /// Press the refund control.
    Refund,

    // === Refund Prompt ===
    /// Submit the pending refund.
    ConfirmRefund,
    /// Abandon the pending refund.
    CancelRefund,

    // === No Operation ===
    /// Unhandled key.
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command.
    ///
    /// This is a pure function with no side effects.
    ///
    /// # Arguments
    ///
    /// * `key` - The key event to map
    /// * `context` - The current input context
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }
        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::RefundConfirm => Self::map_refund_confirm_keys(key),
        }
    }

    fn map_main_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Home | KeyCode::Char('g') => AppCommand::MoveTop,
            KeyCode::End | KeyCode::Char('G') => AppCommand::MoveBottom,
            KeyCode::Enter | KeyCode::Char(' ') => AppCommand::ToggleDetails,
            KeyCode::Char('o') => AppCommand::OpenReceipt,
            KeyCode::Char('i') => AppCommand::OpenInvoice,
            KeyCode::Char('c') => AppCommand::CopyInvoiceLink,
            KeyCode::Char('r') => AppCommand::Refund,
            _ => AppCommand::Noop,
        }
    }

    fn map_refund_confirm_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y' | 'Y') => AppCommand::ConfirmRefund,
            KeyCode::Esc | KeyCode::Char('n' | 'N' | 'q') => AppCommand::CancelRefund,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
