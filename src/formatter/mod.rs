//! Keyboard text formatting.
//!
//! Turns a selection such as `ctrl shift s` into
//! `<kbd>⌃ Ctrl</kbd> <kbd>⇧ Shift</kbd> <kbd>S</kbd>`:
//!
//! 1. numpad phrases are collapsed into single tokens ([`numpad`]),
//! 2. the text is split on whitespace,
//! 3. each word is classified against the [`KeyNameTable`],
//! 4. each result is wrapped in a key marker and the markers are joined with
//!    single spaces.
//!
//! Unrecognized words pass through unchanged; there is no failure path.

pub mod numpad;

use crate::key_names::KeyNameTable;
use numpad::normalize_numpad_phrases;
use once_cell::sync::Lazy;
use regex::Regex;

/// Opening tag of a key marker.
pub const MARKER_OPEN: &str = "<kbd>";

/// Closing tag of a key marker.
pub const MARKER_CLOSE: &str = "</kbd>";

/// A maximal run of non-whitespace. Whitespace here is Unicode White_Space
/// plus U+FEFF, minus U+0085.
static WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[^\s\x{FEFF}]|\x{85})+").expect("word pattern is valid")
});

/// Formats a selection into space-joined key markers.
///
/// The result is meant to replace the selection verbatim. Empty or
/// whitespace-only input yields an empty string. The transform is not
/// idempotent: formatting an already formatted string wraps the marker text
/// again instead of recognizing it.
///
/// # Examples
///
/// ```
/// use kbdfmt::formatter::format_keyboard_text;
///
/// assert_eq!(
///     format_keyboard_text("ctrl shift s"),
///     "<kbd>⌃ Ctrl</kbd> <kbd>⇧ Shift</kbd> <kbd>S</kbd>"
/// );
/// assert_eq!(format_keyboard_text("Numpad 5"), "<kbd>Numpad&nbsp;5</kbd>");
/// ```
#[must_use]
pub fn format_keyboard_text(selection: &str) -> String {
    let normalized = normalize_numpad_phrases(selection);
    let table = KeyNameTable::global();

    let markers: Vec<String> = WORD
        .find_iter(&normalized)
        .map(|word| wrap_marker(&classify_word(table, word.as_str())))
        .collect();

    tracing::debug!(words = markers.len(), "formatted keyboard text");

    markers.join(" ")
}

/// Classifies a single whitespace-free word into its replacement text.
///
/// Returns the table label for known key names, and the word itself
/// otherwise; tokens produced by the numpad pass take that path unchanged.
/// A one-character result is uppercased.
#[must_use]
pub fn classify_word(table: &KeyNameTable, word: &str) -> String {
    let replacement = table
        .label(word)
        .map_or_else(|| word.to_string(), str::to_string);

    let mut chars = replacement.chars();
    match (chars.next(), chars.next()) {
        (Some(only), None) => only.to_uppercase().collect(),
        _ => replacement,
    }
}

/// Wraps replacement text in a key marker.
#[must_use]
pub fn wrap_marker(text: &str) -> String {
    format!("{MARKER_OPEN}{text}{MARKER_CLOSE}")
}
