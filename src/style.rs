//! Key marker styling.
//!
//! The presentation layer exposes the marker colors as CSS custom properties
//! and flags the document with an "active" body class. Both are owned by a
//! [`StyleGuard`]: acquiring it applies them, dropping it removes them again.
//! The formatter never touches styling.

use crate::config::ColorSettings;
use crate::constants::{
    ACTIVE_BODY_CLASS, VAR_DARK_BG, VAR_DARK_TEXT, VAR_LIGHT_BG, VAR_LIGHT_TEXT,
    VAR_PREVIEW_DARK_BG, VAR_PREVIEW_DARK_TEXT, VAR_PREVIEW_LIGHT_BG, VAR_PREVIEW_LIGHT_TEXT,
};
use std::fmt::Write as _;

/// Where styling is written: a DOM root, a stylesheet, a test double.
pub trait StyleSink {
    /// Sets a CSS custom property on the document root.
    fn set_property(&mut self, name: &str, value: &str);
    /// Removes a CSS custom property from the document root.
    fn remove_property(&mut self, name: &str);
    /// Adds a class to the document body.
    fn add_class(&mut self, class: &str);
    /// Removes a class from the document body.
    fn remove_class(&mut self, class: &str);
}

const MARKER_VARS: [&str; 4] = [VAR_LIGHT_BG, VAR_LIGHT_TEXT, VAR_DARK_BG, VAR_DARK_TEXT];

const PREVIEW_VARS: [&str; 4] = [
    VAR_PREVIEW_LIGHT_BG,
    VAR_PREVIEW_LIGHT_TEXT,
    VAR_PREVIEW_DARK_BG,
    VAR_PREVIEW_DARK_TEXT,
];

fn color_values(colors: &ColorSettings) -> [&str; 4] {
    [
        colors.light_bg.as_str(),
        colors.light_text.as_str(),
        colors.dark_bg.as_str(),
        colors.dark_text.as_str(),
    ]
}

/// Styling applied to a sink for as long as the guard lives.
pub struct StyleGuard<'a, S: StyleSink + ?Sized> {
    sink: &'a mut S,
    preview_applied: bool,
}

impl<'a, S: StyleSink + ?Sized> StyleGuard<'a, S> {
    /// Adds the active class and sets the marker color properties.
    pub fn acquire(sink: &'a mut S, colors: &ColorSettings) -> Self {
        sink.add_class(ACTIVE_BODY_CLASS);
        let mut guard = Self {
            sink,
            preview_applied: false,
        };
        guard.refresh(colors);
        tracing::debug!("key marker styling applied");
        guard
    }

    /// Re-applies the marker color properties after a settings change.
    pub fn refresh(&mut self, colors: &ColorSettings) {
        for (name, value) in MARKER_VARS.iter().zip(color_values(colors)) {
            self.sink.set_property(name, value);
        }
    }

    /// Sets the preview properties used by the settings surface.
    pub fn apply_preview(&mut self, colors: &ColorSettings) {
        for (name, value) in PREVIEW_VARS.iter().zip(color_values(colors)) {
            self.sink.set_property(name, value);
        }
        self.preview_applied = true;
    }

    /// Read access to the sink while styling is applied.
    pub fn sink(&self) -> &S {
        &*self.sink
    }
}

impl<S: StyleSink + ?Sized> Drop for StyleGuard<'_, S> {
    fn drop(&mut self) {
        self.sink.remove_class(ACTIVE_BODY_CLASS);
        for name in MARKER_VARS {
            self.sink.remove_property(name);
        }
        if self.preview_applied {
            for name in PREVIEW_VARS {
                self.sink.remove_property(name);
            }
        }
        tracing::debug!("key marker styling removed");
    }
}

/// In-memory document root that renders to a stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssDocument {
    /// Custom properties in insertion order
    properties: Vec<(String, String)>,
    /// Body classes in insertion order
    classes: Vec<String>,
}

impl CssDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the value of a custom property.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Checks whether the body carries a class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Checks whether nothing is applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.classes.is_empty()
    }

    /// Renders the document as CSS.
    ///
    /// Emits a `:root` block with the custom properties and, while the
    /// active class is present, the `kbd` rules that consume them.
    #[must_use]
    pub fn render(&self) -> String {
        let mut css = String::new();

        if !self.properties.is_empty() {
            css.push_str(":root {\n");
            for (name, value) in &self.properties {
                let _ = writeln!(css, "  {name}: {value};");
            }
            css.push_str("}\n");
        }

        if self.has_class(ACTIVE_BODY_CLASS) {
            let _ = write!(
                css,
                "\nbody.{ACTIVE_BODY_CLASS} kbd {{\n  background-color: var({VAR_LIGHT_BG});\n  color: var({VAR_LIGHT_TEXT});\n}}\n\
                 \n@media (prefers-color-scheme: dark) {{\n  body.{ACTIVE_BODY_CLASS} kbd {{\n    background-color: var({VAR_DARK_BG});\n    color: var({VAR_DARK_TEXT});\n  }}\n}}\n"
            );
        }

        css
    }
}

impl StyleSink for CssDocument {
    fn set_property(&mut self, name: &str, value: &str) {
        match self.properties.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.properties.push((name.to_string(), value.to_string())),
        }
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.retain(|(n, _)| n != name);
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}
