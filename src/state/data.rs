//! Data state: the loaded ledger and the selected transaction.
//!
//! Data is kept apart from presentation so a reload replaces the ledger
//! without touching the display mode.

use crate::client::LedgerSource;
use crate::domain::{Ledger, Permissions, Transaction};

// ============================================================================
// Data State
// ============================================================================

/// The ledger being browsed and the cursor into it.
#[derive(Debug, Clone)]
pub struct DataState {
    /// Collective, viewer and transactions.
    pub ledger: Ledger,
    /// Where the ledger was loaded from, if anywhere.
    pub source: Option<LedgerSource>,
    selected: usize,
}

impl DataState {
    #[must_use]
    pub fn new(ledger: Ledger, source: Option<LedgerSource>) -> Self {
        Self {
            ledger,
            source,
            selected: 0,
        }
    }

    /// Index of the selected transaction.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.ledger.transactions.get(self.selected)
    }

    /// The logged-in user as seen by permission checks.
    #[must_use]
    pub fn viewer(&self) -> Option<&dyn Permissions> {
        self.ledger
            .logged_in_user
            .as_ref()
            .map(|user| user as &dyn Permissions)
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Selects `index`, clamped to the list.
    ///
    /// # Returns
    ///
    /// `true` if the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        let clamped = index.min(self.ledger.transactions.len().saturating_sub(1));
        let changed = clamped != self.selected;
        self.selected = clamped;
        changed
    }

    pub fn select_previous(&mut self) -> bool {
        self.select(self.selected.saturating_sub(1))
    }

    pub fn select_next(&mut self) -> bool {
        self.select(self.selected.saturating_add(1))
    }

    pub fn select_first(&mut self) -> bool {
        self.select(0)
    }

    pub fn select_last(&mut self) -> bool {
        self.select(usize::MAX)
    }

    /// Selects the transaction matching `id` (full UUID or unique prefix).
    ///
    /// # Errors
    ///
    /// Forwards lookup errors from [`Ledger::find`].
    pub fn select_id(&mut self, id: &str) -> Result<(), crate::domain::LedgerError> {
        let uuid = self.ledger.find(id)?.uuid;
        if let Some(index) = self.ledger.transactions.iter().position(|t| t.uuid == uuid) {
            self.selected = index;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
