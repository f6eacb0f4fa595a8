//! Application-wide constants.
//!
//! This module defines the names shared between the CLI, the config layer and
//! the generated stylesheet.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Keyboard Formatter";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "kbdfmt";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "KeyboardFormatter";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "KBDFMT_CONFIG_DIR";

/// Stable identifier of the format command.
pub const FORMAT_COMMAND_ID: &str = "format-keyboard-text";

/// Human-readable name of the format command.
pub const FORMAT_COMMAND_NAME: &str = "Format keyboard text.";

/// Class added to the document body while the key marker styling is active.
pub const ACTIVE_BODY_CLASS: &str = "fkt-plugin-active";

/// CSS custom property holding the light mode marker background.
pub const VAR_LIGHT_BG: &str = "--fkt-light-bg-color";
/// CSS custom property holding the light mode marker text color.
pub const VAR_LIGHT_TEXT: &str = "--fkt-light-text-color";
/// CSS custom property holding the dark mode marker background.
pub const VAR_DARK_BG: &str = "--fkt-dark-bg-color";
/// CSS custom property holding the dark mode marker text color.
pub const VAR_DARK_TEXT: &str = "--fkt-dark-text-color";

/// Preview counterparts of the marker properties, used by the settings surface.
pub const VAR_PREVIEW_LIGHT_BG: &str = "--fkt-preview-light-bg";
/// See [`VAR_PREVIEW_LIGHT_BG`].
pub const VAR_PREVIEW_LIGHT_TEXT: &str = "--fkt-preview-light-text";
/// See [`VAR_PREVIEW_LIGHT_BG`].
pub const VAR_PREVIEW_DARK_BG: &str = "--fkt-preview-dark-bg";
/// See [`VAR_PREVIEW_LIGHT_BG`].
pub const VAR_PREVIEW_DARK_TEXT: &str = "--fkt-preview-dark-text";
