//! 8-bit RGB color value and channel clamping.
//!
//! Channels are stored as `u8`, so every [`Color`] that exists is in range.
//! Arbitrary integer triples enter through [`clamp_color`] / [`Color::clamped`].

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Upper bound of a channel.
pub const CHANNEL_MAX: i32 = 255;

/// An opaque RGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);

    /// Build a color from channels that are already 8-bit.
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build a color from arbitrary integers, saturating each channel to `0..=255`.
    pub fn clamped(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    pub const fn red(self) -> u8 {
        self.red
    }

    pub const fn green(self) -> u8 {
        self.green
    }

    pub const fn blue(self) -> u8 {
        self.blue
    }

    /// Channels widened to `i32`, in R, G, B order.
    pub const fn channels(self) -> [i32; 3] {
        [self.red as i32, self.green as i32, self.blue as i32]
    }

    /// Raw `[r, g, b]` bytes.
    pub fn to_bytes(self) -> [u8; 3] {
        bytemuck::cast(self)
    }
}

/// Clamp each channel into `0..=255` and build a [`Color`].
///
/// ```text
/// c > 255 → 255
/// c < 0   → 0
/// ```
///
/// Total over all `i32` inputs.
pub fn clamp_color(red: i32, green: i32, blue: i32) -> Color {
    Color::clamped(red, green, blue)
}

fn clamp_channel(value: i32) -> u8 {
    // Lossless after the clamp.
    value.clamp(0, CHANNEL_MAX) as u8
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::from_rgb8(red, green, blue)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.red, color.green, color.blue]
    }
}

impl From<palette::Srgb<u8>> for Color {
    fn from(rgb: palette::Srgb<u8>) -> Self {
        Self::from_rgb8(rgb.red, rgb.green, rgb.blue)
    }
}

impl From<Color> for palette::Srgb<u8> {
    fn from(color: Color) -> Self {
        palette::Srgb::new(color.red, color.green, color.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse `#rrggbb`, `rrggbb`, or shorthand `#rgb`. Case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHex(s.to_string());
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
                match (channel(0), channel(2), channel(4)) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Self::from_rgb8(r, g, b)),
                    _ => Err(invalid()),
                }
            }
            3 => {
                // Each nibble is doubled: #abc == #aabbcc.
                let channel = |i: usize| u8::from_str_radix(&digits[i..=i], 16).map(|n| n * 17);
                match (channel(0), channel(1), channel(2)) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Self::from_rgb8(r, g, b)),
                    _ => Err(invalid()),
                }
            }
            _ => Err(invalid()),
        }
    }
}
