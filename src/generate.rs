//! The single public entry point: orchestrates random and harmony-based
//! generation.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;
use crate::harmony::{harmony_palette, HarmonyType};
use crate::palette::Palette;
use crate::random::{random_palette, EntropySource, RandomSource, SeededSource};

/// One generation request, as consumed through the in-process interface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteRequest {
    /// The harmony rule to apply.
    pub harmony: HarmonyType,
    /// The number of colors to produce.
    pub count: usize,
    /// Optional hex seed anchoring harmony-based generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
}

/// Produces palettes from a harmony type, a count and an optional seed
/// color, drawing any random colors from its injected source.
#[derive(Clone, Debug, Default)]
pub struct PaletteGenerator<S = EntropySource> {
    source: S,
}

impl PaletteGenerator<EntropySource> {
    /// A generator backed by thread-local entropy.
    pub fn new() -> Self {
        Self {
            source: EntropySource,
        }
    }
}

impl PaletteGenerator<SeededSource> {
    /// A generator whose random draws are reproducible for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            source: SeededSource::new(seed),
        }
    }
}

impl<S: RandomSource> PaletteGenerator<S> {
    /// A generator drawing from the given source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Generate a palette of exactly `count` colors.
    ///
    /// [`HarmonyType::Random`] ignores the seed and fills the palette with
    /// independent random colors; `count` may be zero. Any other harmony
    /// anchors on `seed`, or on one freshly drawn random color when no seed
    /// is given. Without an explicit seed each call is therefore
    /// independently randomized, even though the harmony math itself is
    /// deterministic given the base.
    pub fn generate(
        &mut self,
        harmony: HarmonyType,
        count: usize,
        seed: Option<&Color>,
    ) -> Result<Palette> {
        if harmony == HarmonyType::Random {
            return random_palette(&mut self.source, count);
        }

        let base = match seed {
            Some(color) => color.clone(),
            None => Color::from_hex(&self.source.random_hex())?,
        };

        harmony_palette(&base, harmony, count, &mut self.source)
    }

    /// Generate from a [`PaletteRequest`], parsing the optional hex seed.
    /// A malformed seed surfaces as [`Error::InvalidFormat`](crate::Error).
    pub fn generate_request(&mut self, request: &PaletteRequest) -> Result<Palette> {
        let seed = match &request.seed {
            Some(hex) => Some(Color::from_hex(hex)?),
            None => None,
        };
        self.generate(request.harmony, request.count, seed.as_ref())
    }
}
