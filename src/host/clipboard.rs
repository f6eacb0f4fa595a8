//! System clipboard host.
//!
//! Treats the clipboard text as the selection: copy some text, run
//! `kbdfmt format --clipboard`, paste the formatted markers.

use super::SelectionHost;
use anyhow::{Context, Result};

/// Host backed by the system clipboard.
pub struct ClipboardHost {
    clipboard: arboard::Clipboard,
}

impl ClipboardHost {
    /// Opens the system clipboard.
    pub fn open() -> Result<Self> {
        let clipboard = arboard::Clipboard::new().context("Failed to open the system clipboard")?;
        Ok(Self { clipboard })
    }
}

impl SelectionHost for ClipboardHost {
    fn read_selection(&mut self) -> Result<String> {
        match self.clipboard.get_text() {
            Ok(text) => Ok(text),
            // An empty clipboard is an empty selection
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(e).context("Failed to read text from the clipboard"),
        }
    }

    fn replace_selection(&mut self, replacement: &str) -> Result<()> {
        self.clipboard
            .set_text(replacement)
            .context("Failed to write text to the clipboard")
    }
}
