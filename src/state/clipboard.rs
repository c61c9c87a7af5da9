//! Clipboard access for copying invoice links.
//!
//! On Linux external tools are tried first (`wl-copy`, `xclip`, `xsel`)
//! because their selection outlives the process; everything else goes
//! through `arboard`.

use thiserror::Error;

/// Errors from clipboard operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard not available")]
    NotAvailable,

    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Copies text to the system clipboard.
#[derive(Debug, Clone, Copy)]
pub struct Clipboard {
    prefer_external_tools: bool,
}

impl Default for Clipboard {
    fn default() -> Self {
        Self {
            prefer_external_tools: true,
        }
    }
}

impl Clipboard {
    /// Copies `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard is reachable or the copy fails.
    pub fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(target_os = "linux")]
        if self.prefer_external_tools && Self::copy_with_external_tool(text) {
            return Ok(());
        }

        let mut clipboard = arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> bool {
        [
            ("wl-copy", &[][..]),
            ("xclip", &["-selection", "clipboard"][..]),
            ("xsel", &["--clipboard", "--input"][..]),
        ]
        .iter()
        .any(|(tool, args)| Self::try_tool(tool, args, text))
    }

    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };
        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }
        drop(stdin);

        child.wait().is_ok_and(|status| status.success())
    }
}
