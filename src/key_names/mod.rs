//! Key name table and lookup.
//!
//! This module holds the fixed rule table that maps raw key names typed by a
//! user ("ctrl", "pgdn", "lmb", ...) to decorated labels, together with a
//! case-insensitive lookup index and a search used by the `keys` command.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Category of key names for organization in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCategory {
    /// Ctrl, Shift, Alt, Caps Lock
    Modifier,
    /// OS-specific keys (Win, Super, Meta, Cmd, Option)
    System,
    /// F1 through F12
    Function,
    /// Tab, Delete, Enter, paging, Print Screen
    Navigation,
    /// Arrow keys
    Arrow,
    /// Mouse buttons and wheel
    Mouse,
}

impl KeyCategory {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::Modifier,
        Self::System,
        Self::Function,
        Self::Navigation,
        Self::Arrow,
        Self::Mouse,
    ];

    /// Category ID (e.g., "modifier", "mouse").
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Modifier => "modifier",
            Self::System => "system",
            Self::Function => "function",
            Self::Navigation => "navigation",
            Self::Arrow => "arrow",
            Self::Mouse => "mouse",
        }
    }

    /// Display name (e.g., "Modifier Keys").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Modifier => "Modifier Keys",
            Self::System => "OS Keys",
            Self::Function => "Function Keys",
            Self::Navigation => "Navigation & Special Keys",
            Self::Arrow => "Arrow Keys",
            Self::Mouse => "Mouse Buttons",
        }
    }

    /// Parses a category from its ID, ignoring case.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.id().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for KeyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One entry of the rule table: every alias maps to the same label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyRule {
    /// Category for listings
    pub category: KeyCategory,
    /// Lower-cased spellings that select this rule
    pub aliases: &'static [&'static str],
    /// Decorated label (glyph + name) written into the key marker
    pub label: &'static str,
}

const fn rule(
    category: KeyCategory,
    aliases: &'static [&'static str],
    label: &'static str,
) -> KeyRule {
    KeyRule {
        category,
        aliases,
        label,
    }
}

use KeyCategory::{Arrow, Function, Modifier, Mouse, Navigation, System};

/// The rule table. Aliases must be lower-case and unique across all rules.
const KEY_RULES: &[KeyRule] = &[
    // Modifier keys
    rule(Modifier, &["control", "ctrl"], "⌃ Ctrl"),
    rule(Modifier, &["shift"], "⇧ Shift"),
    rule(Modifier, &["alt"], "⌥ Alt"),
    rule(Modifier, &["caps", "capslock"], "⇪ Caps Lock"),
    // OS keys
    rule(System, &["win", "windows", "windowskey", "winkey"], "Win"),
    rule(System, &["super", "linux", "linuxkey", "tuxkey"], "⌘ Super"),
    rule(System, &["meta"], "◆ Meta"),
    rule(System, &["command", "cmd"], "⌘ Cmd"),
    rule(System, &["option", "opt"], "⌥ Option"),
    // Function keys
    rule(Function, &["f1"], "F1"),
    rule(Function, &["f2"], "F2"),
    rule(Function, &["f3"], "F3"),
    rule(Function, &["f4"], "F4"),
    rule(Function, &["f5"], "F5"),
    rule(Function, &["f6"], "F6"),
    rule(Function, &["f7"], "F7"),
    rule(Function, &["f8"], "F8"),
    rule(Function, &["f9"], "F9"),
    rule(Function, &["f10"], "F10"),
    rule(Function, &["f11"], "F11"),
    rule(Function, &["f12"], "F12"),
    // Navigation & special keys
    rule(Navigation, &["tab"], "⇥ Tab"),
    rule(Navigation, &["erase", "delete", "del"], "⌫ Delete"),
    rule(Navigation, &["enter", "return"], "⏎ Enter"),
    rule(Navigation, &["backspace"], "⟵ Backspace"),
    rule(Navigation, &["pageup", "pgup"], "⇞ Page Up"),
    rule(Navigation, &["pagedown", "pgdn"], "⇟ Page Down"),
    rule(Navigation, &["printscreen"], "⎙ Print Screen"),
    // Arrow keys
    rule(Arrow, &["up"], "↑ Up"),
    rule(Arrow, &["left"], "← Left"),
    rule(Arrow, &["right"], "→ Right"),
    rule(Arrow, &["down"], "↓ Down"),
    // Mouse buttons
    rule(Mouse, &["lmb"], "Left 🖱️"),
    rule(Mouse, &["rmb"], "Right 🖱️"),
    rule(Mouse, &["mmb"], "Middle 🖱️"),
    rule(
        Mouse,
        &["wheel", "scrollwheel", "mousewheel", "mw"],
        "Wheel 🖱️",
    ),
];

static TABLE: Lazy<KeyNameTable> = Lazy::new(KeyNameTable::build);

/// Read-only key name table with O(1) case-insensitive lookup.
///
/// The table is built once on first access and shared for the lifetime of the
/// process; it is never mutated afterwards.
#[derive(Debug)]
pub struct KeyNameTable {
    /// All rules in table order
    rules: &'static [KeyRule],
    /// Fast lookup by lower-cased alias
    lookup: HashMap<&'static str, usize>,
}

impl KeyNameTable {
    fn build() -> Self {
        let mut lookup = HashMap::new();

        for (idx, rule) in KEY_RULES.iter().enumerate() {
            for alias in rule.aliases {
                lookup.insert(*alias, idx);
            }
        }

        Self {
            rules: KEY_RULES,
            lookup,
        }
    }

    /// Returns the shared table.
    #[must_use]
    pub fn global() -> &'static Self {
        &TABLE
    }

    /// Looks up a raw key name. Matching is exact on the whole word, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbdfmt::key_names::KeyNameTable;
    ///
    /// let table = KeyNameTable::global();
    /// assert_eq!(table.label("CTRL"), Some("⌃ Ctrl"));
    /// assert_eq!(table.label("ctr"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&KeyRule> {
        let idx = self.lookup.get(word.to_lowercase().as_str())?;
        self.rules.get(*idx)
    }

    /// Returns the decorated label for a raw key name.
    #[must_use]
    pub fn label(&self, word: &str) -> Option<&'static str> {
        let idx = self.lookup.get(word.to_lowercase().as_str())?;
        self.rules.get(*idx).map(|rule| rule.label)
    }

    /// All rules in table order.
    #[must_use]
    pub const fn rules(&self) -> &[KeyRule] {
        self.rules
    }

    /// Rules belonging to one category.
    #[must_use]
    pub fn rules_in_category(&self, category: KeyCategory) -> Vec<&KeyRule> {
        self.rules
            .iter()
            .filter(|rule| rule.category == category)
            .collect()
    }

    /// Searches aliases and labels for a substring, ignoring case.
    ///
    /// Exact matches sort first, then prefix matches, then other substring
    /// matches. Table order is kept within each group.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&KeyRule> {
        if query.is_empty() {
            return self.rules.iter().collect();
        }

        let query_lower = query.to_lowercase();
        let mut results: Vec<(&KeyRule, i32)> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let label_lower = rule.label.to_lowercase();
                let label_name = strip_glyph(&label_lower);

                if rule.aliases.contains(&query_lower.as_str()) || label_name == query_lower {
                    return Some((rule, 100));
                }

                if rule.aliases.iter().any(|a| a.starts_with(&query_lower))
                    || label_name.starts_with(&query_lower)
                {
                    return Some((rule, 50));
                }

                if rule.aliases.iter().any(|a| a.contains(&query_lower))
                    || label_lower.contains(&query_lower)
                {
                    return Some((rule, 10));
                }

                None
            })
            .collect();

        results.sort_by(|a, b| b.1.cmp(&a.1));

        results.into_iter().map(|(rule, _)| rule).collect()
    }

    /// Number of distinct aliases in the table.
    #[must_use]
    pub fn alias_count(&self) -> usize {
        self.lookup.len()
    }
}

/// Drops a leading glyph ("⇞ page up" -> "page up").
fn strip_glyph(label: &str) -> &str {
    match label.split_once(' ') {
        Some((glyph, rest)) if !glyph.chars().any(char::is_alphanumeric) => rest,
        _ => label,
    }
}
