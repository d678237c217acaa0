//! Color-harmony rules: derive related hue/lightness sequences around a
//! base color.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{Color, Component, Hsl};
use crate::convert::{hsl_to_rgb, rgb_to_hex};
use crate::error::{Error, Result};
use crate::math::normalize_hue;
use crate::palette::Palette;
use crate::random::RandomSource;

/// A named rule for selecting related hues and lightnesses around a base
/// color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyType {
    /// Independently random colors with no relation to the base.
    Random,
    /// Neighboring hues, 30 degrees apart on the wheel.
    Analogous,
    /// The hue directly opposite on the wheel.
    Complementary,
    /// Three hues spaced 120 degrees apart.
    Triadic,
    /// Four hues spaced 90 degrees apart.
    Tetradic,
    /// A single hue varied in lightness only.
    Monochromatic,
}

impl HarmonyType {
    /// Every harmony type, in display order.
    pub const ALL: [HarmonyType; 6] = [
        Self::Random,
        Self::Analogous,
        Self::Complementary,
        Self::Triadic,
        Self::Tetradic,
        Self::Monochromatic,
    ];
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Random => "random",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Monochromatic => "monochromatic",
        })
    }
}

/// Derive a palette of exactly `count` colors related to `base` by the
/// given harmony rule. Index 0 is always `base` itself.
///
/// `HarmonyType::Random` fills the remaining slots from the random source.
/// When `count` is smaller than the number of primary harmony hues (for
/// example tetradic with `count == 2`), the surplus hues are silently
/// dropped rather than treated as an error.
pub fn harmony_palette<S: RandomSource>(
    base: &Color,
    harmony: HarmonyType,
    count: usize,
    source: &mut S,
) -> Result<Palette> {
    if count < 1 {
        return Err(Error::InvalidArgument(format!(
            "harmony generation requires a count of at least 1, got {count}"
        )));
    }

    let Hsl { h, s, l } = base.hsl;
    let h = i32::from(h);
    // Derived colors take the clamped base lightness; only index 0 keeps
    // the base exactly as given.
    let derived_l = clamp_lightness(i16::from(l));

    let mut colors = vec![base.clone()];

    match harmony {
        HarmonyType::Random => {
            while colors.len() < count {
                colors.push(Color::from_hex(&source.random_hex())?);
            }
        }
        HarmonyType::Analogous => {
            // Alternate outward around the wheel: +30, -30, +60, -60, ...
            let mut i = 1;
            while colors.len() < count {
                colors.push(color_at(h + 30 * i, s, derived_l)?);
                if colors.len() < count {
                    colors.push(color_at(h - 30 * i, s, derived_l)?);
                }
                i += 1;
            }
        }
        HarmonyType::Complementary => {
            push_primaries(&mut colors, &[h + 180], s, derived_l, count)?;
            push_variants(&mut colors, &[h, h + 180], s, l, count)?;
        }
        HarmonyType::Triadic => {
            push_primaries(&mut colors, &[h + 120, h + 240], s, derived_l, count)?;
            push_variants(&mut colors, &[h, h + 120, h + 240], s, l, count)?;
        }
        HarmonyType::Tetradic => {
            push_primaries(&mut colors, &[h + 90, h + 180, h + 270], s, derived_l, count)?;
            push_variants(&mut colors, &[h, h + 90, h + 180, h + 270], s, l, count)?;
        }
        HarmonyType::Monochromatic => {
            for i in 1..count {
                let spread = i as Component * 100.0 / (count as Component + 1.0);
                colors.push(color_at(h, s, clamp_lightness(spread.round() as i16))?);
            }
        }
    }

    Ok(Palette(colors))
}

/// Append the primary harmony hues at the base saturation and the clamped
/// base lightness, stopping early once `count` is reached.
fn push_primaries(
    colors: &mut Vec<Color>,
    hues: &[i32],
    s: u8,
    l: u8,
    count: usize,
) -> Result<()> {
    for &hue in hues {
        if colors.len() >= count {
            break;
        }
        colors.push(color_at(hue, s, l)?);
    }
    Ok(())
}

/// Fill the remainder of the palette by cycling the harmony hues while
/// stepping lightness away from the base: -10, +10, -20, +20, ...
fn push_variants(
    colors: &mut Vec<Color>,
    cycle: &[i32],
    s: u8,
    l: u8,
    count: usize,
) -> Result<()> {
    let mut i = 1;
    while colors.len() < count {
        let hue = cycle[i % cycle.len()];
        colors.push(color_at(hue, s, variant_lightness(l, i))?);
        i += 1;
    }
    Ok(())
}

/// The alternating lightness offset for variant `i`: magnitude grows by 10
/// every second step, sign starts negative.
fn variant_lightness(l: u8, i: usize) -> u8 {
    // Once the magnitude covers the whole [10, 90] range the clamp takes
    // over, so cap it there instead of letting large `i` overflow.
    let magnitude = (10 * i.div_ceil(2).min(10)) as i16;
    let offset = if i % 2 == 1 { -magnitude } else { magnitude };
    clamp_lightness(i16::from(l) + offset)
}

/// Derived lightness stays inside [10, 90] so colors never collapse into
/// near-black or near-white where saturation stops reading.
fn clamp_lightness(l: i16) -> u8 {
    l.clamp(10, 90) as u8
}

/// Materialize a derived (h, s, l) as a full color record, going through
/// the hex entry point to keep the encodings in sync.
fn color_at(h: i32, s: u8, l: u8) -> Result<Color> {
    let hsl = Hsl::new(normalize_hue(h), s, l);
    Color::from_hex(&rgb_to_hex(hsl_to_rgb(hsl)))
}
