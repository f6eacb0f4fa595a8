//! Selection hosts.
//!
//! The formatter never talks to an editor directly. Whatever owns the text
//! (a terminal pipe, the clipboard, an in-memory document) implements
//! [`SelectionHost`], which only knows how to read the current selection and
//! replace it.

#[cfg(feature = "clipboard")]
pub mod clipboard;

#[cfg(feature = "clipboard")]
pub use clipboard::ClipboardHost;

use crate::formatter::format_keyboard_text;
use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::ops::Range;

/// Capability to read and replace the user's current selection.
pub trait SelectionHost {
    /// Returns the currently selected text (may be empty).
    fn read_selection(&mut self) -> Result<String>;

    /// Replaces the previously read selection with `replacement`.
    ///
    /// Implementations must apply the replacement in a single step so no
    /// partial result is ever visible.
    fn replace_selection(&mut self, replacement: &str) -> Result<()>;
}

/// Formats the host's selection and writes the result back.
///
/// Performs exactly one read and one replace. Errors from the host are
/// returned as-is; nothing is retried.
pub fn format_selection<H: SelectionHost + ?Sized>(host: &mut H) -> Result<String> {
    let selection = host.read_selection().context("Failed to read selection")?;
    let replacement = format_keyboard_text(&selection);

    tracing::debug!(
        input_len = selection.len(),
        output_len = replacement.len(),
        "replacing selection"
    );

    host.replace_selection(&replacement)
        .context("Failed to replace selection")?;

    Ok(replacement)
}

/// Host over a fixed piece of text, capturing the replacement.
///
/// Used for text passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct TextHost {
    text: String,
    replacement: Option<String>,
}

impl TextHost {
    /// Creates a host whose selection is `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            replacement: None,
        }
    }

    /// The replacement written by the last [`SelectionHost::replace_selection`] call.
    #[must_use]
    pub fn replacement(&self) -> Option<&str> {
        self.replacement.as_deref()
    }
}

impl SelectionHost for TextHost {
    fn read_selection(&mut self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn replace_selection(&mut self, replacement: &str) -> Result<()> {
        self.replacement = Some(replacement.to_string());
        Ok(())
    }
}

/// Host that reads the selection from an input stream and writes the
/// replacement to an output stream.
///
/// The input is read to the end once. The output ends with a newline only if
/// the input did.
#[derive(Debug)]
pub struct StdioHost<R, W> {
    input: R,
    output: W,
    trailing_newline: bool,
}

impl<R: Read, W: Write> StdioHost<R, W> {
    /// Creates a host over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            trailing_newline: false,
        }
    }

    /// Consumes the host and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: Read, W: Write> SelectionHost for StdioHost<R, W> {
    fn read_selection(&mut self) -> Result<String> {
        let mut text = String::new();
        self.input
            .read_to_string(&mut text)
            .context("Failed to read input as UTF-8 text")?;
        self.trailing_newline = text.ends_with('\n');
        Ok(text)
    }

    fn replace_selection(&mut self, replacement: &str) -> Result<()> {
        let mut buffer = replacement.to_string();
        if self.trailing_newline {
            buffer.push('\n');
        }
        self.output
            .write_all(buffer.as_bytes())
            .and_then(|()| self.output.flush())
            .context("Failed to write output")?;
        Ok(())
    }
}

/// In-memory document with a byte-range selection.
///
/// After a replacement the selection covers the inserted text, like an
/// editor does after a paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferHost {
    document: String,
    selection: Range<usize>,
}

impl BufferHost {
    /// Creates a document with the given selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is reversed, out of bounds, or does not
    /// fall on UTF-8 character boundaries.
    pub fn new(document: impl Into<String>, selection: Range<usize>) -> Result<Self> {
        let document = document.into();

        if selection.start > selection.end || selection.end > document.len() {
            anyhow::bail!(
                "Selection {}..{} is outside the document (length {})",
                selection.start,
                selection.end,
                document.len()
            );
        }

        if !document.is_char_boundary(selection.start) || !document.is_char_boundary(selection.end)
        {
            anyhow::bail!(
                "Selection {}..{} does not fall on character boundaries",
                selection.start,
                selection.end
            );
        }

        Ok(Self {
            document,
            selection,
        })
    }

    /// Creates a document whose selection covers all of it.
    #[must_use]
    pub fn select_all(document: impl Into<String>) -> Self {
        let document = document.into();
        let selection = 0..document.len();
        Self {
            document,
            selection,
        }
    }

    /// The whole document.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// The current selection range in bytes.
    #[must_use]
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// The currently selected text.
    #[must_use]
    pub fn selected_text(&self) -> &str {
        &self.document[self.selection.clone()]
    }

    /// Consumes the host and returns the document.
    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl SelectionHost for BufferHost {
    fn read_selection(&mut self) -> Result<String> {
        Ok(self.selected_text().to_string())
    }

    fn replace_selection(&mut self, replacement: &str) -> Result<()> {
        let start = self.selection.start;
        self.document
            .replace_range(self.selection.clone(), replacement);
        self.selection = start..start + replacement.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Host whose replace always fails, to check error propagation.
    struct FailingHost;

    impl SelectionHost for FailingHost {
        fn read_selection(&mut self) -> Result<String> {
            Ok("ctrl".to_string())
        }

        fn replace_selection(&mut self, _replacement: &str) -> Result<()> {
            anyhow::bail!("document is read-only")
        }
    }

    #[test]
    fn test_text_host() {
        let mut host = TextHost::new("alt f4");
        let result = format_selection(&mut host).unwrap();
        assert_eq!(result, "<kbd>⌥ Alt</kbd> <kbd>F4</kbd>");
        assert_eq!(host.replacement(), Some(result.as_str()));
    }

    #[test]
    fn test_stdio_host_keeps_trailing_newline() {
        let mut host = StdioHost::new(Cursor::new("ctrl c\n"), Vec::new());
        format_selection(&mut host).unwrap();
        let output = String::from_utf8(host.into_output()).unwrap();
        assert_eq!(output, "<kbd>⌃ Ctrl</kbd> <kbd>C</kbd>\n");
    }

    #[test]
    fn test_stdio_host_without_newline() {
        let mut host = StdioHost::new(Cursor::new("tab"), Vec::new());
        format_selection(&mut host).unwrap();
        assert_eq!(host.into_output(), "<kbd>⇥ Tab</kbd>".as_bytes());
    }

    #[test]
    fn test_stdio_host_rejects_invalid_utf8() {
        let mut host = StdioHost::new(Cursor::new(vec![0xff, 0xfe]), Vec::new());
        assert!(format_selection(&mut host).is_err());
        assert!(host.into_output().is_empty());
    }

    #[test]
    fn test_buffer_host_replaces_only_selection() {
        let document = "Press ctrl s to save.";
        let start = document.find("ctrl").unwrap();
        let end = start + "ctrl s".len();

        let mut host = BufferHost::new(document, start..end).unwrap();
        format_selection(&mut host).unwrap();

        assert_eq!(
            host.document(),
            "Press <kbd>⌃ Ctrl</kbd> <kbd>S</kbd> to save."
        );
        assert_eq!(host.selected_text(), "<kbd>⌃ Ctrl</kbd> <kbd>S</kbd>");
    }

    #[test]
    fn test_buffer_host_empty_selection() {
        let mut host = BufferHost::new("abc", 1..1).unwrap();
        format_selection(&mut host).unwrap();
        assert_eq!(host.document(), "abc");
        assert_eq!(host.selection(), 1..1);
    }

    #[test]
    fn test_buffer_host_select_all() {
        let mut host = BufferHost::select_all("shift");
        format_selection(&mut host).unwrap();
        assert_eq!(host.into_document(), "<kbd>⇧ Shift</kbd>");
    }

    #[test]
    fn test_buffer_host_rejects_bad_ranges() {
        assert!(BufferHost::new("abc", 2..5).is_err());
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 2..1;
        assert!(BufferHost::new("abc", reversed).is_err());
        // "é" is two bytes
        assert!(BufferHost::new("é", 0..1).is_err());
    }

    #[test]
    fn test_replace_failure_propagates() {
        let err = format_selection(&mut FailingHost).unwrap_err();
        assert!(format!("{err:#}").contains("read-only"));
    }

    #[test]
    fn test_trait_object() {
        let mut host: Box<dyn SelectionHost> = Box::new(TextHost::new("meta"));
        assert_eq!(format_selection(host.as_mut()).unwrap(), "<kbd>◆ Meta</kbd>");
    }
}
