//! Category colors
//!
//! Colors are stored as `#RRGGBB` strings. Tiles need a readable label on top
//! of the category color, so this module also does the WCAG relative luminance
//! and contrast-ratio arithmetic used to pick black or white text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SnackError;

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// Pure black
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    /// Pure white
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    /// Fallback appearance for uncategorized sounds
    pub const NEUTRAL_GRAY: Self = Self::new(0x80, 0x80, 0x80);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance in `[0, 1]` (WCAG 2.x definition)
    pub fn relative_luminance(&self) -> f64 {
        fn linearize(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// Contrast ratio against another color, from 1.0 (none) to 21.0
    pub fn contrast_ratio(&self, other: &HexColor) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Black or white, whichever reads better on top of this color
    pub fn contrasting_text(&self) -> HexColor {
        if self.contrast_ratio(&Self::BLACK) >= self.contrast_ratio(&Self::WHITE) {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = SnackError;

    /// Accepts `#RRGGBB` or `RRGGBB`, any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SnackError::validation(format!(
                "Invalid color '{}': expected six hex digits like #FF8800",
                s
            )));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| SnackError::validation(format!("Invalid color '{}': {}", s, e)))?;

        Ok(Self::new(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        ))
    }
}

impl TryFrom<String> for HexColor {
    type Error = SnackError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}
