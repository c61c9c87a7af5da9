//! Application lifecycle management.
//!
//! - `new()` - Creates the application from a loaded ledger
//! - `run()` - Main event loop

use std::time::Instant;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::client::LedgerSource;
use crate::constants::TICK_RATE;
use crate::domain::Ledger;
use crate::refund::SessionRefunds;
use crate::tui::Tui;
use crate::ui;
use crate::view::DetailsMode;

use super::{App, AppConfig, DataState, Platform, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App browsing `ledger`.
    ///
    /// # Arguments
    ///
    /// * `ledger` - The loaded ledger snapshot
    /// * `source` - Where it came from
    /// * `config` - Locale, URLs and message overrides
    /// * `mode` - Initial details mode
    #[must_use]
    pub fn new(
        ledger: Ledger,
        source: Option<LedgerSource>,
        config: AppConfig,
        mode: DetailsMode,
    ) -> Self {
        tracing::info!(
            collective = %ledger.collective.slug,
            transactions = ledger.transactions.len(),
            locale = %config.locale,
            %mode,
            "Starting ledger browser"
        );
        Self {
            data: DataState::new(ledger, source),
            ui: UiState::new(mode),
            intl: config.intl(),
            previews: config.image_preview(),
            config,
            refunds: SessionRefunds::new(),
            platform: Platform::default(),
            exit: false,
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal operations fail.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut last_tick = Instant::now();
        let mut dirty = true;

        while !self.exit {
            if dirty {
                terminal.draw(|frame| ui::render(self, frame))?;
                dirty = false;
            }

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                        dirty = true;
                    }
                    Event::Resize(_, _) => dirty = true,
                    _ => {}
                }
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= TICK_RATE {
                dirty |= self.ui.tick(elapsed);
                last_tick = Instant::now();
            }
        }

        tracing::info!(refunds = self.refunds.requested().len(), "Exiting");
        Ok(())
    }
}
