//! huegen provides exact conversions between the hex, RGB and HSL color
//! encodings and deterministic color-theory palette generation around them.

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod format;
mod generate;
mod harmony;
mod math;
mod palette;
mod random;
#[cfg(test)]
mod test;

pub use color::{Color, Component, Hsl, Rgb};
pub use convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use error::{Error, Result};
pub use format::{contrast_color, format, Notation};
pub use generate::{PaletteGenerator, PaletteRequest};
pub use harmony::{harmony_palette, HarmonyType};
pub use palette::Palette;
pub use random::{random_palette, EntropySource, RandomSource, SeededSource};
