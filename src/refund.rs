//! Refund action control.
//!
//! The detail view only decides whether the refund control is shown. What a
//! refund actually does is behind [`RefundAction`]; the control itself is a
//! small confirm-before-submit state machine.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Collective, LedgerError, Transaction};
use crate::view::RefundControl;

// ============================================================================
// RefundAction
// ============================================================================

/// Acknowledgement of a refund request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundReceipt {
    pub transaction_uuid: Uuid,
    pub refund_uuid: Uuid,
    pub requested_at: DateTime<Utc>,
}

/// Performs refunds on behalf of the control.
pub trait RefundAction {
    /// Requests a refund of `txn`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Refund`] if the refund cannot be requested.
    fn request_refund(
        &mut self,
        txn: &Transaction,
        collective: &Collective,
    ) -> Result<RefundReceipt, LedgerError>;
}

/// Records refunds for the current session only.
#[derive(Debug, Default)]
pub struct SessionRefunds {
    requested: Vec<RefundReceipt>,
}

impl SessionRefunds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refunds requested so far, oldest first.
    #[must_use]
    pub fn requested(&self) -> &[RefundReceipt] {
        &self.requested
    }
}

impl RefundAction for SessionRefunds {
    fn request_refund(
        &mut self,
        txn: &Transaction,
        collective: &Collective,
    ) -> Result<RefundReceipt, LedgerError> {
        if txn.is_refunded() {
            return Err(LedgerError::refund(format!(
                "transaction {} was already refunded",
                txn.uuid
            )));
        }
        if self.requested.iter().any(|r| r.transaction_uuid == txn.uuid) {
            return Err(LedgerError::refund(format!(
                "refund for {} already requested",
                txn.uuid
            )));
        }

        let receipt = RefundReceipt {
            transaction_uuid: txn.uuid,
            refund_uuid: Uuid::new_v4(),
            requested_at: Utc::now(),
        };
        tracing::info!(
            collective = %collective.slug,
            transaction = %txn.uuid,
            refund = %receipt.refund_uuid,
            "Refund requested"
        );
        self.requested.push(receipt.clone());
        Ok(receipt)
    }
}

// ============================================================================
// RefundButton
// ============================================================================

/// State of the refund control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RefundButtonState {
    #[default]
    Idle,
    /// Waiting for the user to confirm the refund of a transaction.
    Confirming { transaction_uuid: Uuid },
    /// The last refund was submitted.
    Submitted { receipt: RefundReceipt },
}

/// Confirm-before-submit refund control.
#[derive(Debug, Clone, Default)]
pub struct RefundButton {
    pub(crate) state: RefundButtonState,
}

impl RefundButton {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while the confirmation prompt is pending.
    #[must_use]
    pub fn is_confirming(&self) -> bool {
        matches!(self.state, RefundButtonState::Confirming { .. })
    }

    /// Presses the button. Refunded transactions never prompt.
    ///
    /// Returns `true` if a confirmation is now pending.
    pub fn press(&mut self, control: &RefundControl) -> bool {
        if control.refunded {
            return false;
        }
        self.state = RefundButtonState::Confirming {
            transaction_uuid: control.transaction_uuid,
        };
        true
    }

    /// Abandons a pending confirmation.
    pub fn cancel(&mut self) {
        if self.is_confirming() {
            self.state = RefundButtonState::Idle;
        }
    }

    /// Confirms the pending refund and hands it to `action`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidInput`] when nothing is pending or the
    /// pending refund is for another transaction, and forwards errors from
    /// `action`. The control returns to idle on error.
    pub fn confirm(
        &mut self,
        action: &mut dyn RefundAction,
        txn: &Transaction,
        collective: &Collective,
    ) -> Result<RefundReceipt, LedgerError> {
        let RefundButtonState::Confirming { transaction_uuid } = self.state else {
            return Err(LedgerError::invalid_input("no refund awaiting confirmation"));
        };
        if transaction_uuid != txn.uuid {
            self.state = RefundButtonState::Idle;
            return Err(LedgerError::invalid_input(format!(
                "pending refund is for {transaction_uuid}, not {}",
                txn.uuid
            )));
        }

        match action.request_refund(txn, collective) {
            Ok(receipt) => {
                self.state = RefundButtonState::Submitted {
                    receipt: receipt.clone(),
                };
                Ok(receipt)
            }
            Err(e) => {
                self.state = RefundButtonState::Idle;
                Err(e)
            }
        }
    }

    /// Clears a pending or submitted state, e.g. after selecting another row.
    pub fn reset(&mut self) {
        self.state = RefundButtonState::Idle;
    }
}

// ============================================================================
// Tests
// ============================================================================
