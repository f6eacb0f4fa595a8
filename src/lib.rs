//! Keyboard Formatter Library
//!
//! Turns key names in a text selection into decorated `<kbd>` key markers
//! (`ctrl s` becomes `<kbd>⌃ Ctrl</kbd> <kbd>S</kbd>`), and manages the colors
//! those markers are rendered with.
//!
//! ```
//! use kbdfmt::formatter::format_keyboard_text;
//!
//! assert_eq!(
//!     format_keyboard_text("alt numpad 5"),
//!     "<kbd>⌥ Alt</kbd> <kbd>Numpad&nbsp;5</kbd>"
//! );
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod formatter;
pub mod host;
pub mod key_names;
pub mod models;
pub mod preview;
pub mod style;
