//! Numpad phrase normalization.
//!
//! Rewrites phrases such as "Numpad 5" or "numpad_enter" into a single
//! decorated token before the text is split into words. The token joins
//! "Numpad" and the key with an `&nbsp;` entity so that whitespace splitting
//! keeps it in one piece.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Joiner between "Numpad" and the key part; rendered as a non-breaking space.
pub const NUMPAD_JOINER: &str = "&nbsp;";

/// Glyph used for the numpad decimal key.
pub const DECIMAL_GLYPH: &str = "•";

/// Glyph prefixed to the numpad Enter key.
pub const RETURN_GLYPH: &str = "⏎";

/// ASCII word boundary and ASCII digits only; separators use the same
/// whitespace set as word splitting.
static NUMPAD_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?-u:\b)numpad[[\s\x{FEFF}_-]--\x{85}]*([0-9]+|\+|-|\*|/|enter|return|dot|\.|decimal)")
        .expect("numpad phrase pattern is valid")
});

/// Replaces every numpad phrase in `text` with its decorated token.
///
/// Borrows the input unchanged when no phrase is present.
///
/// # Examples
///
/// ```
/// use kbdfmt::formatter::numpad::normalize_numpad_phrases;
///
/// assert_eq!(normalize_numpad_phrases("Numpad 5"), "Numpad&nbsp;5");
/// assert_eq!(normalize_numpad_phrases("numpad enter"), "Numpad&nbsp;⏎Enter");
/// assert_eq!(normalize_numpad_phrases("NUMPAD dot"), "Numpad&nbsp;•");
/// ```
#[must_use]
pub fn normalize_numpad_phrases(text: &str) -> Cow<'_, str> {
    NUMPAD_PHRASE.replace_all(text, |caps: &Captures<'_>| {
        let key = &caps[1];
        tracing::trace!(phrase = &caps[0], key, "numpad phrase matched");
        decorate_numpad_key(key)
    })
}

/// Builds the decorated token for one numpad key part.
fn decorate_numpad_key(key: &str) -> String {
    let lower = key.to_lowercase();
    match lower.as_str() {
        "dot" | "." | "decimal" => format!("Numpad{NUMPAD_JOINER}{DECIMAL_GLYPH}"),
        "enter" | "return" => format!("Numpad{NUMPAD_JOINER}{RETURN_GLYPH}Enter"),
        // Digits and operators are kept exactly as typed
        _ => format!("Numpad{NUMPAD_JOINER}{key}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_sequences() {
        assert_eq!(normalize_numpad_phrases("Numpad 5"), "Numpad&nbsp;5");
        assert_eq!(normalize_numpad_phrases("numpad 42"), "Numpad&nbsp;42");
        assert_eq!(normalize_numpad_phrases("numpad0"), "Numpad&nbsp;0");
    }

    #[test]
    fn test_operators() {
        assert_eq!(normalize_numpad_phrases("numpad +"), "Numpad&nbsp;+");
        assert_eq!(normalize_numpad_phrases("numpad -"), "Numpad&nbsp;-");
        assert_eq!(normalize_numpad_phrases("numpad *"), "Numpad&nbsp;*");
        assert_eq!(normalize_numpad_phrases("numpad /"), "Numpad&nbsp;/");
    }

    #[test]
    fn test_enter_and_return() {
        assert_eq!(
            normalize_numpad_phrases("numpad enter"),
            "Numpad&nbsp;⏎Enter"
        );
        assert_eq!(
            normalize_numpad_phrases("Numpad RETURN"),
            "Numpad&nbsp;⏎Enter"
        );
    }

    #[test]
    fn test_decimal_spellings() {
        for phrase in ["numpad dot", "NUMPAD Dot", "numpad .", "numpad decimal"] {
            assert_eq!(normalize_numpad_phrases(phrase), "Numpad&nbsp;•", "{phrase}");
        }
    }

    #[test]
    fn test_separators() {
        assert_eq!(normalize_numpad_phrases("numpad_7"), "Numpad&nbsp;7");
        assert_eq!(normalize_numpad_phrases("numpad-7"), "Numpad&nbsp;7");
        assert_eq!(normalize_numpad_phrases("numpad \t 7"), "Numpad&nbsp;7");
    }

    #[test]
    fn test_all_occurrences_rewritten() {
        assert_eq!(
            normalize_numpad_phrases("ctrl numpad 1 then numpad 2"),
            "ctrl Numpad&nbsp;1 then Numpad&nbsp;2"
        );
    }

    #[test]
    fn test_no_phrase_borrows_input() {
        let result = normalize_numpad_phrases("ctrl shift s");
        assert!(matches!(result, Cow::Borrowed("ctrl shift s")));
    }

    #[test]
    fn test_word_boundary_required() {
        assert_eq!(normalize_numpad_phrases("mynumpad 5"), "mynumpad 5");
    }

    #[test]
    fn test_non_ascii_digits_are_not_keys() {
        assert_eq!(normalize_numpad_phrases("numpad ５"), "numpad ５");
        assert_eq!(normalize_numpad_phrases("numpad ٥"), "numpad ٥");
    }

    #[test]
    fn test_boundary_after_non_ascii_letter() {
        assert_eq!(normalize_numpad_phrases("énumpad 5"), "éNumpad&nbsp;5");
    }

    #[test]
    fn test_byte_order_mark_separator() {
        assert_eq!(normalize_numpad_phrases("numpad\u{FEFF}3"), "Numpad&nbsp;3");
    }

    #[test]
    fn test_bare_numpad_untouched() {
        assert_eq!(normalize_numpad_phrases("numpad"), "numpad");
        assert_eq!(normalize_numpad_phrases("numpad home"), "numpad home");
    }
}
