//! Solid RGBA color values for the canvas fill and glyph fill

use crate::error::{Error, Result};

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque white, the usual glyph fill
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    /// Construct a fully opaque color from components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Parse a `#RRGGBB` literal into an opaque color.
    ///
    /// The leading `#` is optional. Alpha is always 255; the canvas carries
    /// the alpha channel, the palette itself is opaque.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::InvalidColor(s.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Component order used by RGBA pixel buffers
    pub(crate) fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
