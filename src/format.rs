//! Textual rendering of colors and the binary overlay-contrast rule.

use crate::color::Color;
use crate::convert::hex_to_rgb;
use crate::error::Result;

/// The textual notation to render a color in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    /// `#RRGGBB`, uppercase.
    Hex,
    /// `rgb(r, g, b)`.
    Rgb,
    /// `hsl(h, s%, l%)`.
    Hsl,
}

/// Render a color in the requested notation.
pub fn format(color: &Color, notation: Notation) -> String {
    match notation {
        Notation::Hex => color.hex.clone(),
        Notation::Rgb => format!("rgb({}, {}, {})", color.rgb.r, color.rgb.g, color.rgb.b),
        Notation::Hsl => format!("hsl({}, {}%, {}%)", color.hsl.h, color.hsl.s, color.hsl.l),
    }
}

/// Pick black or white for overlay text on the given background color.
///
/// Computes the classic integer luminance `(299 r + 587 g + 114 b) / 1000`
/// and splits on a single threshold at 128. This is a binary choice for
/// swatch-label legibility, deliberately simpler than a real contrast
/// ratio. A malformed hex surfaces as an error, never as a fallback color.
pub fn contrast_color(hex: &str) -> Result<&'static str> {
    let rgb = hex_to_rgb(hex)?;
    let luminance =
        (299 * u32::from(rgb.r) + 587 * u32::from(rgb.g) + 114 * u32::from(rgb.b)) / 1000;
    Ok(if luminance > 128 { "#000000" } else { "#FFFFFF" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_notations() {
        let color = Color::from_hex("#ff8040").unwrap();
        assert_eq!(format(&color, Notation::Hex), "#FF8040");
        assert_eq!(format(&color, Notation::Rgb), "rgb(255, 128, 64)");
        assert_eq!(format(&color, Notation::Hsl), "hsl(20, 100%, 63%)");
    }

    #[test]
    fn contrast_is_deterministic_at_the_extremes() {
        assert_eq!(contrast_color("#000000").unwrap(), "#FFFFFF");
        assert_eq!(contrast_color("#FFFFFF").unwrap(), "#000000");
    }

    #[test]
    fn contrast_splits_on_the_luminance_threshold() {
        // (299*255 + 587*128 + 114*64) / 1000 = 158
        assert_eq!(contrast_color("#FF8040").unwrap(), "#000000");
        // (299*18 + 587*52 + 114*86) / 1000 = 45
        assert_eq!(contrast_color("#123456").unwrap(), "#FFFFFF");
        // Pure green: 587 * 255 / 1000 = 149
        assert_eq!(contrast_color("#00FF00").unwrap(), "#000000");
        // Pure blue: 114 * 255 / 1000 = 29
        assert_eq!(contrast_color("#0000FF").unwrap(), "#FFFFFF");
    }

    #[test]
    fn malformed_hex_is_an_error_not_a_default() {
        assert!(contrast_color("#GGGGGG").is_err());
        assert!(contrast_color("123").is_err());
    }
}
