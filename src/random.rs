//! Uniformly random colors behind an injectable source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Color;
use crate::error::Result;
use crate::palette::Palette;

/// A source of uniformly distributed hex colors over the full
/// `#000000`..=`#FFFFFF` range.
///
/// Randomness is the only nondeterminism in this crate. Generation paths
/// take the source as a parameter rather than reaching for a global
/// generator, so tests can inject a seeded source and concurrent callers do
/// not contend on shared state.
pub trait RandomSource {
    /// Return one uniformly distributed 6-digit hex color.
    fn random_hex(&mut self) -> String;
}

/// A source drawing from the thread-local entropy generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntropySource;

impl RandomSource for EntropySource {
    fn random_hex(&mut self) -> String {
        format_hex(rand::rng().random_range(0..=0xFF_FFFFu32))
    }
}

/// A source drawing from a deterministic generator seeded at construction.
/// Two sources built from the same seed yield the same color sequence.
#[derive(Clone, Debug)]
pub struct SeededSource(StdRng);

impl SeededSource {
    /// Create a source for the given seed.
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededSource {
    fn random_hex(&mut self) -> String {
        format_hex(self.0.random_range(0..=0xFF_FFFFu32))
    }
}

fn format_hex(value: u32) -> String {
    format!("#{value:06X}")
}

/// Build a palette of `count` independently random colors in generation
/// order. A count of zero yields an empty palette.
pub fn random_palette<S: RandomSource>(source: &mut S, count: usize) -> Result<Palette> {
    let mut colors = Vec::with_capacity(count);
    for _ in 0..count {
        colors.push(Color::from_hex(&source.random_hex())?);
    }
    Ok(Palette(colors))
}
