//! Terminal preview of key markers in the configured colors.
//!
//! Draws the sample markers `⌃ Ctrl` and `S` with 24-bit terminal colors so
//! a color choice can be checked without opening a document.

use crate::config::{ColorSettings, ThemeMode};
use anyhow::{Context, Result};
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::QueueableCommand;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Sample keys drawn by the preview.
pub const SAMPLE_KEYS: [&str; 2] = ["⌃ Ctrl", "S"];

/// Which color pairs to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    /// Light pair only
    Light,
    /// Dark pair only
    Dark,
    /// Light pair, then dark pair
    Both,
    /// Pair matching the OS theme
    #[default]
    Auto,
}

impl PreviewMode {
    /// Resolves `Auto` against the OS theme, returning the concrete pairs to
    /// draw as `dark` flags.
    #[must_use]
    pub fn resolve(self) -> Vec<bool> {
        match self {
            Self::Light => vec![false],
            Self::Dark => vec![true],
            Self::Both => vec![false, true],
            Self::Auto => vec![detect_dark()],
        }
    }
}

impl From<ThemeMode> for PreviewMode {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::Auto,
            ThemeMode::Dark => Self::Dark,
            ThemeMode::Light => Self::Light,
        }
    }
}

impl FromStr for PreviewMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "both" => Ok(Self::Both),
            "auto" => Ok(Self::Auto),
            _ => anyhow::bail!(
                "Invalid preview mode '{s}'. Must be 'light', 'dark', 'both', or 'auto'"
            ),
        }
    }
}

impl fmt::Display for PreviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Both => "both",
            Self::Auto => "auto",
        })
    }
}

/// Detects whether the OS uses a dark theme.
///
/// Unspecified or failed detection counts as dark.
#[must_use]
pub fn detect_dark() -> bool {
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => false,
        Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) => true,
        Err(e) => {
            tracing::debug!("OS theme detection failed: {e}");
            true
        }
    }
}

/// Writes one preview line per pair in `pairs` (`true` is the dark pair).
///
/// # Errors
///
/// Returns an error if a configured color is not a valid hex color or the
/// writer fails.
pub fn render_preview<W: Write>(out: &mut W, colors: &ColorSettings, pairs: &[bool]) -> Result<()> {
    for &dark in pairs {
        let (bg, text) = colors.pair(dark)?;
        let name = if dark { "Dark " } else { "Light" };

        out.queue(Print(format!("{name}  ")))?;
        for (i, key) in SAMPLE_KEYS.iter().enumerate() {
            if i > 0 {
                out.queue(Print(" "))?;
            }
            out.queue(SetBackgroundColor(bg.to_crossterm_color()))?
                .queue(SetForegroundColor(text.to_crossterm_color()))?
                .queue(Print(format!(" {key} ")))?
                .queue(ResetColor)?;
        }
        out.queue(Print(format!("  bg {bg}  text {text}\n")))?;
    }

    out.flush().context("Failed to write preview")?;
    Ok(())
}
