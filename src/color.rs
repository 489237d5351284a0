//! RGB colors used by the color picker and the drawable.
//!
//! Colors are plain 8-bit triples. Alpha is not part of a [`Color`]; the
//! drawable carries it separately so that interpolation never touches it.
//!
//! ```rust
//! use background_progress::color::Color;
//!
//! let c: Color = "#ff8000".parse().unwrap();
//! assert_eq!(c, Color::rgb(255, 128, 0));
//! assert_eq!(c.to_hex(), "#ff8000");
//! ```

use crate::error::ValidationError;
use lipgloss_extras::lipgloss::Color as LGColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// `#000000`
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// `#ff0000`
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// `#ffff00`
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    /// `#00ff00`
    pub const GREEN: Color = Color::rgb(0, 255, 0);

    /// Creates a color from its three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend between `self` and `other`.
    ///
    /// Each channel is computed as `a + ratio * (b - a)` and truncated toward
    /// zero. The float-to-int cast saturates, so the result always stays in
    /// `0..=255` even for a `ratio` outside `0.0..=1.0`.
    pub fn lerp(self, other: Color, ratio: f64) -> Color {
        fn channel(a: u8, b: u8, ratio: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + ratio * (b - a)) as u8
        }

        Color::rgb(
            channel(self.r, other.r, ratio),
            channel(self.g, other.g, ratio),
            channel(self.b, other.b, ratio),
        )
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidColor(s.to_string());
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| invalid());
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        match hex.len() {
            // #rgb expands each digit: #f80 == #ff8800
            3 => Ok(Color::rgb(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
            6 => Ok(Color::rgb(pair(0)?, pair(2)?, pair(4)?)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<Color> for LGColor {
    fn from(color: Color) -> Self {
        LGColor::from(color.to_hex().as_str())
    }
}
