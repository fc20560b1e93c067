//! sRGB color parsed from a 6-digit hex string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ColorError;

/// An opaque sRGB color with three 8-bit channels.
///
/// Parsed from `#RRGGBB` or `RRGGBB` (any case). Displays in the canonical
/// uppercase `#RRGGBB` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidColorFormat {
            input: input.to_string(),
        };

        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let bytes = digits.as_bytes();
        if bytes.len() != 6 {
            return Err(invalid());
        }

        let channel = |hi: u8, lo: u8| -> Option<u8> { Some(nibble(hi)? << 4 | nibble(lo)?) };

        Ok(Self {
            r: channel(bytes[0], bytes[1]).ok_or_else(invalid)?,
            g: channel(bytes[2], bytes[3]).ok_or_else(invalid)?,
            b: channel(bytes[4], bytes[5]).ok_or_else(invalid)?,
        })
    }

    /// Canonical `#RRGGBB` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels as fractions in [0, 1].
    pub fn to_unit_rgb(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Build from [0, 1] fractions; out-of-range values are clamped.
    pub fn from_unit_rgb(r: f64, g: f64, b: f64) -> Self {
        let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(to_byte(r), to_byte(g), to_byte(b))
    }

    /// Packed `0xRRGGBB`.
    pub fn to_u32(&self) -> u32 {
        u32::from(self.r) << 16 | u32::from(self.g) << 8 | u32::from(self.b)
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
