//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the key marker colors
//! and UI preferences in TOML format with platform-specific directory
//! resolution.

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};
use crate::models::HexColor;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Lower-case name used on the command line and in JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => anyhow::bail!("Invalid theme mode '{s}'. Must be 'auto', 'light', or 'dark'"),
        }
    }
}

/// One of the four marker color settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    /// Marker background in light mode
    LightBackground,
    /// Marker text in light mode
    LightText,
    /// Marker background in dark mode
    DarkBackground,
    /// Marker text in dark mode
    DarkText,
}

impl ColorField {
    /// All fields in display order.
    pub const ALL: [Self; 4] = [
        Self::LightBackground,
        Self::LightText,
        Self::DarkBackground,
        Self::DarkText,
    ];

    /// Key of the field in the config file.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::LightBackground => "light_bg",
            Self::LightText => "light_text",
            Self::DarkBackground => "dark_bg",
            Self::DarkText => "dark_text",
        }
    }

    /// Human-readable description of the field.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::LightBackground => "Background color for kbd elements in light theme",
            Self::LightText => "Text color for kbd elements in light theme",
            Self::DarkBackground => "Background color for kbd elements in dark theme",
            Self::DarkText => "Text color for kbd elements in dark theme",
        }
    }
}

impl fmt::Display for ColorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn default_light_bg() -> String {
    "#e3e6e8".to_string()
}

fn default_light_text() -> String {
    "#333".to_string()
}

fn default_dark_bg() -> String {
    "#30363d".to_string()
}

fn default_dark_text() -> String {
    "#f0f0f0".to_string()
}

/// Key marker colors for the light and dark presentation modes.
///
/// Fields missing from a stored file fall back to their defaults one by one,
/// so a file written by an older version keeps the colors it does have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSettings {
    /// Marker background in light mode
    #[serde(default = "default_light_bg")]
    pub light_bg: String,
    /// Marker text in light mode
    #[serde(default = "default_light_text")]
    pub light_text: String,
    /// Marker background in dark mode
    #[serde(default = "default_dark_bg")]
    pub dark_bg: String,
    /// Marker text in dark mode
    #[serde(default = "default_dark_text")]
    pub dark_text: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            light_bg: default_light_bg(),
            light_text: default_light_text(),
            dark_bg: default_dark_bg(),
            dark_text: default_dark_text(),
        }
    }
}

impl ColorSettings {
    /// Gets the value of one field.
    #[must_use]
    pub fn get(&self, field: ColorField) -> &str {
        match field {
            ColorField::LightBackground => &self.light_bg,
            ColorField::LightText => &self.light_text,
            ColorField::DarkBackground => &self.dark_bg,
            ColorField::DarkText => &self.dark_text,
        }
    }

    /// Sets one field after validating the new value.
    ///
    /// The settings are left untouched when the value is rejected.
    pub fn set(&mut self, field: ColorField, value: &str) -> Result<()> {
        HexColor::from_hex(value).context(format!("Invalid value for {field}"))?;

        let slot = match field {
            ColorField::LightBackground => &mut self.light_bg,
            ColorField::LightText => &mut self.light_text,
            ColorField::DarkBackground => &mut self.dark_bg,
            ColorField::DarkText => &mut self.dark_text,
        };
        *slot = value.trim().to_string();

        Ok(())
    }

    /// Restores all four colors to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Parses the background/text pair for light (`dark == false`) or dark mode.
    pub fn pair(&self, dark: bool) -> Result<(HexColor, HexColor)> {
        let (bg, text) = if dark {
            (ColorField::DarkBackground, ColorField::DarkText)
        } else {
            (ColorField::LightBackground, ColorField::LightText)
        };

        Ok((
            HexColor::from_hex(self.get(bg)).context(format!("Invalid value for {bg}"))?,
            HexColor::from_hex(self.get(text)).context(format!("Invalid value for {text}"))?,
        ))
    }

    /// Validates all four colors.
    pub fn validate(&self) -> Result<()> {
        for field in ColorField::ALL {
            HexColor::from_hex(self.get(field)).context(format!("Invalid value for {field}"))?;
        }
        Ok(())
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Which color pair the preview shows by default
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/KeyboardFormatter/config.toml`
/// - macOS: `~/Library/Application Support/KeyboardFormatter/config.toml`
/// - Windows: `%APPDATA%\KeyboardFormatter\config.toml`
///
/// Setting `KBDFMT_CONFIG_DIR` replaces the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Key marker colors
    #[serde(default)]
    pub colors: ColorSettings,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `KBDFMT_CONFIG_DIR` when set, the platform config directory otherwise.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()?;
        self.save_to(&config_path)
    }

    /// Saves configuration to an explicit path using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!(path = %config_path.display(), "configuration saved");

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        self.colors.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.colors.light_bg, "#e3e6e8");
        assert_eq!(config.colors.light_text, "#333");
        assert_eq!(config.colors.dark_bg, "#30363d");
        assert_eq!(config.colors.dark_text, "#f0f0f0");
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_set_and_get() {
        let mut colors = ColorSettings::default();
        colors.set(ColorField::DarkText, "#ffffff").unwrap();
        assert_eq!(colors.get(ColorField::DarkText), "#ffffff");
        // Other fields untouched
        assert_eq!(colors.get(ColorField::DarkBackground), "#30363d");
    }

    #[test]
    fn test_set_rejects_invalid_color() {
        let mut colors = ColorSettings::default();
        let err = colors.set(ColorField::LightBackground, "blue").unwrap_err();
        assert!(format!("{err:#}").contains("light_bg"));
        assert_eq!(colors.light_bg, "#e3e6e8");
    }

    #[test]
    fn test_reset_restores_all_defaults() {
        let mut colors = ColorSettings::default();
        colors.set(ColorField::LightBackground, "#000").unwrap();
        colors.set(ColorField::DarkText, "#000").unwrap();
        colors.reset();
        assert_eq!(colors, ColorSettings::default());
    }

    #[test]
    fn test_pair() {
        let colors = ColorSettings::default();
        let (bg, text) = colors.pair(true).unwrap();
        assert_eq!(bg, HexColor::new(0x30, 0x36, 0x3d));
        assert_eq!(text, HexColor::new(0xf0, 0xf0, 0xf0));

        let (bg, _) = colors.pair(false).unwrap();
        assert_eq!(bg, HexColor::new(0xe3, 0xe6, 0xe8));
    }

    #[test]
    fn test_partial_file_merges_defaults() {
        let config: Config = toml::from_str(
            r##"
[colors]
dark_bg = "#000000"
"##,
        )
        .unwrap();

        assert_eq!(config.colors.dark_bg, "#000000");
        assert_eq!(config.colors.light_bg, "#e3e6e8");
        assert_eq!(config.colors.dark_text, "#f0f0f0");
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.colors.set(ColorField::LightText, "#101010").unwrap();
        config.ui.theme_mode = ThemeMode::Dark;
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_rejects_invalid_color() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[colors]\nlight_bg = \"nope\"\n").unwrap();

        assert!(Config::load_from(&config_file).is_err());
    }

    #[test]
    fn test_save_rejects_invalid_color() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.colors.dark_bg = "nope".to_string();

        assert!(config.save_to(&config_file).is_err());
        assert!(!config_file.exists());
    }

    #[test]
    fn test_theme_mode_parsing() {
        assert_eq!("auto".parse::<ThemeMode>().unwrap(), ThemeMode::Auto);
        assert_eq!("LIGHT".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("dim".parse::<ThemeMode>().is_err());
    }
}
