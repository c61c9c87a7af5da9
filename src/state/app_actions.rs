//! Command execution: navigation, browser and clipboard actions, refunds.

use crossterm::event::KeyEvent;

use crate::commands::{AppCommand, KeyMapper};
use crate::constants::TOAST_TICKS;
use crate::intl::{Localizer, MessageId};
use crate::utils::absolute_url;
use crate::view::{ReceiptFrame, TransactionDetails};

use super::App;

impl App {
    /// Maps a key press through the [`KeyMapper`] and executes the result.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let command = KeyMapper::map_key(key, &self.input_context());
        self.execute(command);
    }

    /// Executes one command.
    pub fn execute(&mut self, command: AppCommand) {
        if command != AppCommand::Noop {
            tracing::debug!(?command, "Executing command");
        }

        match command {
            AppCommand::Quit => self.exit = true,
            AppCommand::Dismiss => self.ui.toast = None,
            AppCommand::MoveUp => self.move_selection(|data| data.select_previous()),
            AppCommand::MoveDown => self.move_selection(|data| data.select_next()),
            AppCommand::MoveTop => self.move_selection(|data| data.select_first()),
            AppCommand::MoveBottom => self.move_selection(|data| data.select_last()),
            AppCommand::ToggleDetails => self.ui.toggle_details(),
            AppCommand::OpenReceipt => self.open_receipt(),
            AppCommand::OpenInvoice => self.open_invoice(),
            AppCommand::CopyInvoiceLink => self.copy_invoice_link(),
            AppCommand::Refund => self.press_refund(),
            AppCommand::ConfirmRefund => self.confirm_refund(),
            AppCommand::CancelRefund => self.ui.refund.cancel(),
            AppCommand::Noop => {}
        }
    }

    fn move_selection(&mut self, select: impl FnOnce(&mut super::DataState) -> bool) {
        if select(&mut self.data) {
            self.ui.refund.reset();
        }
    }

    /// Details of the selection if they are currently expanded.
    fn visible_details(&mut self) -> Option<TransactionDetails> {
        if !self.ui.mode.is_open() {
            let hint = self.intl.format_message(MessageId::DetailsHidden, &[]);
            self.ui.show_toast(hint, TOAST_TICKS);
            return None;
        }
        self.selected_details()
    }

    // ========================================================================
    // Browser and Clipboard
    // ========================================================================

    fn open_receipt(&mut self) {
        let Some(details) = self.visible_details() else {
            return;
        };
        match details.receipt {
            Some(ReceiptFrame::Attachment { href, .. }) => {
                let url = absolute_url(&self.config.website_url, &href);
                self.open_url(&url);
            }
            Some(ReceiptFrame::Placeholder { caption, .. }) => {
                self.ui.show_toast(format!("[x] {caption}"), TOAST_TICKS);
            }
            None => self.notify(false, MessageId::NoReceipt, &[]),
        }
    }

    fn open_invoice(&mut self) {
        if let Some(url) = self.invoice_url() {
            self.open_url(&url);
        }
    }

    fn copy_invoice_link(&mut self) {
        let Some(url) = self.invoice_url() else {
            return;
        };
        match (self.platform.copy_text)(&url) {
            Ok(()) => self.notify(true, MessageId::InvoiceLinkCopied, &[]),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {e}");
                self.ui.show_toast(format!("[x] {e}"), TOAST_TICKS);
            }
        }
    }

    fn invoice_url(&mut self) -> Option<String> {
        let details = self.visible_details()?;
        match details.invoice {
            Some(invoice) => Some(absolute_url(&self.config.website_url, &invoice.path)),
            None => {
                self.notify(false, MessageId::NoInvoice, &[]);
                None
            }
        }
    }

    fn open_url(&mut self, url: &str) {
        tracing::info!("Opening {url}");
        match (self.platform.open_url)(url) {
            Ok(()) => self.notify(true, MessageId::OpenedInBrowser, &[]),
            Err(e) => {
                tracing::warn!("Failed to open {url}: {e}");
                let error = e.to_string();
                self.notify(false, MessageId::BrowserFailed, &[("error", error.as_str())]);
            }
        }
    }

    /// Shows a translated toast with the success or error marker.
    fn notify(&mut self, ok: bool, id: MessageId, values: &[(&str, &str)]) {
        let marker = if ok { "[+]" } else { "[x]" };
        let message = self.intl.format_message(id, values);
        self.ui.show_toast(format!("{marker} {message}"), TOAST_TICKS);
    }

    // ========================================================================
    // Refunds
    // ========================================================================

    fn press_refund(&mut self) {
        let Some(details) = self.visible_details() else {
            return;
        };
        let Some(control) = details.refund else {
            tracing::debug!("Refund control not available to this viewer");
            return;
        };
        if !self.ui.refund.press(&control) {
            self.ui.show_toast(format!("[x] {}", control.label), TOAST_TICKS);
        }
    }

    fn confirm_refund(&mut self) {
        let Some(txn) = self.data.selected_transaction().cloned() else {
            self.ui.refund.cancel();
            return;
        };
        let collective = self.data.ledger.collective.clone();

        match self.ui.refund.confirm(&mut self.refunds, &txn, &collective) {
            Ok(receipt) => {
                self.data
                    .ledger
                    .mark_refunded(receipt.transaction_uuid, receipt.refund_uuid);
                self.notify(true, MessageId::Refunded, &[]);
            }
            Err(e) => {
                tracing::warn!("Refund failed: {e}");
                self.ui.show_toast(format!("[x] {e}"), TOAST_TICKS);
            }
        }
    }
}
