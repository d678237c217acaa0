//! A [`Color`] holds one color in three synchronized encodings.

use serde::{Deserialize, Serialize};

use crate::convert;
use crate::error::Result;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value used for all intermediate conversion math.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value used for all intermediate conversion math.
pub type Component = f64;

/// A color in the sRGB color space with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// The red channel in [0, 255].
    pub r: u8,
    /// The green channel in [0, 255].
    pub g: u8,
    /// The blue channel in [0, 255].
    pub b: u8,
}

impl Rgb {
    /// Create a new color with RGB (red, green, blue) channels.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color in the HSL notation of the sRGB color space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// The hue in degrees, [0, 360).
    pub h: u16,
    /// The saturation in percent, [0, 100].
    pub s: u8,
    /// The lightness in percent, [0, 100].
    pub l: u8,
}

impl Hsl {
    /// Create a new color with HSL (hue, saturation, lightness) components.
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

/// One color held simultaneously as hex, RGB and HSL.
///
/// The three encodings always represent the same color: `rgb` and `hsl` are
/// derived from the hex seed at construction and never mutated on their own.
/// Editing a color means rebuilding the whole record from a new hex string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Canonical `#RRGGBB` form, uppercase.
    pub hex: String,
    /// The color as 8-bit RGB channels.
    pub rgb: Rgb,
    /// The color in HSL notation, integer degrees and percents.
    pub hsl: Hsl,
}

impl Color {
    /// Parse a hex string (with or without a leading `#`, any case) into a
    /// fully populated color record.
    ///
    /// This is the only construction entry point; every other part of the
    /// crate builds colors through it, which keeps the encodings in sync.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let rgb = convert::hex_to_rgb(hex)?;
        Ok(Self {
            hex: convert::rgb_to_hex(rgb),
            rgb,
            hsl: convert::rgb_to_hsl(rgb),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_populates_all_encodings() {
        let color = Color::from_hex("#D2691E").unwrap();
        assert_eq!(color.hex, "#D2691E");
        assert_eq!(color.rgb, Rgb::new(210, 105, 30));
        assert_eq!(color.hsl, Hsl::new(25, 75, 47));
    }

    #[test]
    fn from_hex_normalizes_case_and_prefix() {
        let color = Color::from_hex("d2691e").unwrap();
        assert_eq!(color.hex, "#D2691E");
        assert_eq!(color, Color::from_hex("#D2691E").unwrap());
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        assert!(Color::from_hex("#ZZZZZZ").is_err());
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn serde_record_shape() {
        let color = Color::from_hex("#FF8040").unwrap();
        let value = serde_json::to_value(&color).unwrap();
        assert_eq!(value["hex"], "#FF8040");
        assert_eq!(value["rgb"]["r"], 255);
        assert_eq!(value["rgb"]["g"], 128);
        assert_eq!(value["rgb"]["b"], 64);
        assert_eq!(value["hsl"]["h"], 20);
        assert_eq!(value["hsl"]["s"], 100);
        assert_eq!(value["hsl"]["l"], 63);

        let back: Color = serde_json::from_value(value).unwrap();
        assert_eq!(back, color);
    }
}
