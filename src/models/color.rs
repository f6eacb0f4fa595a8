//! Hex color parsing for marker colors.

// Allow intentional type casts for channel expansion
#![allow(clippy::cast_possible_truncation)]

use anyhow::{Context, Result};
use std::fmt;

/// A color written as a CSS hex literal.
///
/// Accepts the four hex notations CSS allows: `#rgb`, `#rgba`, `#rrggbb` and
/// `#rrggbbaa`. The short forms expand each digit (`#333` is `#333333`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0-255, 255 when not written)
    pub a: u8,
}

impl HexColor {
    /// Creates an opaque color from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses a CSS hex color.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbdfmt::models::HexColor;
    ///
    /// assert_eq!(HexColor::from_hex("#333").unwrap(), HexColor::new(0x33, 0x33, 0x33));
    /// assert_eq!(HexColor::from_hex("#e3e6e8").unwrap(), HexColor::new(0xe3, 0xe6, 0xe8));
    /// assert!(HexColor::from_hex("red").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `#` followed by 3, 4, 6 or 8 hex digits.
    pub fn from_hex(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let Some(digits) = trimmed.strip_prefix('#') else {
            anyhow::bail!("Invalid color '{value}'. Expected a hex color such as #333 or #e3e6e8");
        };

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid color '{value}'. Only hex digits may follow '#'");
        }

        let channels: Vec<u8> = match digits.len() {
            3 | 4 => digits
                .chars()
                .map(|c| {
                    let nibble = c.to_digit(16).unwrap_or(0) as u8;
                    nibble * 17
                })
                .collect(),
            6 | 8 => (0..digits.len())
                .step_by(2)
                .map(|i| {
                    u8::from_str_radix(&digits[i..i + 2], 16)
                        .context(format!("Invalid channel in color '{value}'"))
                })
                .collect::<Result<_>>()?,
            n => anyhow::bail!(
                "Invalid color '{value}'. Expected 3, 4, 6 or 8 hex digits, got {n}"
            ),
        };

        Ok(Self {
            r: channels[0],
            g: channels[1],
            b: channels[2],
            a: channels.get(3).copied().unwrap_or(255),
        })
    }

    /// Converts the color to "#rrggbb" (lowercase), or "#rrggbbaa" when translucent.
    #[must_use]
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Converts the color to a crossterm color for terminal rendering.
    ///
    /// Terminals have no alpha channel; translucency is dropped.
    #[must_use]
    pub const fn to_crossterm_color(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_long_form() {
        assert_eq!(
            HexColor::from_hex("#30363d").unwrap(),
            HexColor::new(0x30, 0x36, 0x3d)
        );
        assert_eq!(
            HexColor::from_hex("#F0F0F0").unwrap(),
            HexColor::new(0xf0, 0xf0, 0xf0)
        );
    }

    #[test]
    fn test_from_hex_short_form() {
        assert_eq!(HexColor::from_hex("#333").unwrap(), HexColor::new(0x33, 0x33, 0x33));
        assert_eq!(HexColor::from_hex("#fa0").unwrap(), HexColor::new(0xff, 0xaa, 0x00));
    }

    #[test]
    fn test_from_hex_alpha() {
        let color = HexColor::from_hex("#11223380").unwrap();
        assert_eq!(color.a, 0x80);
        assert_eq!(color.to_hex(), "#11223380");

        let short = HexColor::from_hex("#1238").unwrap();
        assert_eq!(short.a, 0x88);
    }

    #[test]
    fn test_from_hex_trims_whitespace() {
        assert!(HexColor::from_hex("  #333  ").is_ok());
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(HexColor::from_hex("333").is_err());
        assert!(HexColor::from_hex("red").is_err());
        assert!(HexColor::from_hex("#12").is_err());
        assert!(HexColor::from_hex("#12345").is_err());
        assert!(HexColor::from_hex("#gggggg").is_err());
        assert!(HexColor::from_hex("#").is_err());
        assert!(HexColor::from_hex("").is_err());
    }

    #[test]
    fn test_to_hex_normalizes() {
        assert_eq!(HexColor::from_hex("#333").unwrap().to_hex(), "#333333");
        assert_eq!(HexColor::new(255, 0, 128).to_string(), "#ff0080");
    }

    #[test]
    fn test_to_crossterm_color() {
        assert_eq!(
            HexColor::new(1, 2, 3).to_crossterm_color(),
            crossterm::style::Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
