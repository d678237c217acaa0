//! Exact numeric conversions between the hex, RGB and HSL encodings.
//!
//! All intermediate math is floating point; integer rounding happens at
//! exactly two boundaries (8-bit RGB channels, integer HSL degrees and
//! percents). Rounding consistently at those two boundaries is what keeps
//! hex -> [`Color`](crate::Color) -> hex round trips lossless.

use crate::color::{Component, Hsl, Rgb};
use crate::error::{Error, Result};
use crate::math::normalize_hue;

/// Parse a 6-digit hex color, with or without a leading `#`, any case.
///
/// Anything that is not exactly 6 hex digits after stripping the optional
/// `#` is rejected before any numeric processing.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidFormat(hex.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| Error::InvalidFormat(hex.to_string()))
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format 8-bit RGB channels as a canonical uppercase `#RRGGBB` string.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Convert 8-bit RGB channels to integer HSL notation.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (hue, saturation, lightness) = util::rgb_to_hsl(
        Component::from(rgb.r) / 255.0,
        Component::from(rgb.g) / 255.0,
        Component::from(rgb.b) / 255.0,
    );

    Hsl::new(
        // A hue just below 360 can round up to it; wrap back into range.
        normalize_hue(hue.round() as i32),
        (saturation * 100.0).round() as u8,
        (lightness * 100.0).round() as u8,
    )
}

/// Convert integer HSL notation to 8-bit RGB channels.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let (r, g, b) = util::hsl_to_rgb(
        Component::from(hsl.h),
        Component::from(hsl.s) / 100.0,
        Component::from(hsl.l) / 100.0,
    );

    Rgb::new(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

mod util {
    use crate::color::Component;

    /// Convert normalized RGB channels to (hue in degrees, saturation,
    /// lightness), with saturation and lightness as fractions in [0, 1].
    pub fn rgb_to_hsl(r: Component, g: Component, b: Component) -> (Component, Component, Component) {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let lightness = (max + min) / 2.0;

        if delta == 0.0 {
            // Achromatic: hue is meaningless, saturation is zero.
            return (0.0, 0.0, lightness);
        }

        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

        let hue = 60.0
            * if max == r {
                // The red branch can go negative; wrap it before scaling.
                ((g - b) / delta).rem_euclid(6.0)
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };

        (hue, saturation, lightness)
    }

    /// Convert (hue in degrees, saturation, lightness) fractions to
    /// normalized RGB channels.
    pub fn hsl_to_rgb(hue: Component, saturation: Component, lightness: Component) -> (Component, Component, Component) {
        if saturation <= 0.0 {
            return (lightness, lightness, lightness);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        let h = hue / 360.0;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    }

    /// The standard piecewise helper shared by the three RGB channels.
    fn hue_to_rgb(p: Component, q: Component, t: Component) -> Component {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }
}
