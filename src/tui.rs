//! Terminal setup and teardown.
//!
//! The ledger view runs in the alternate screen with raw mode on. A panic
//! hook restores the terminal before the panic report is printed so the
//! shell is usable afterwards.

use std::io::{self, Stdout, stdout};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal the application draws to.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches to the alternate screen and returns a ready terminal.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or the terminal cannot be
/// initialized.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)?;
    install_panic_hook();

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;
    Ok(terminal)
}

/// Leaves the alternate screen and disables raw mode.
///
/// # Errors
///
/// Returns an error if the terminal state cannot be restored.
pub fn restore() -> io::Result<()> {
    execute!(stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Err(e) = restore() {
            eprintln!("Failed to restore terminal: {e}");
        }
        previous(info);
    }));
}
