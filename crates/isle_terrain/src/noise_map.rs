//! Layered coherent noise.
//!
//! A [`NoiseMap`] evaluates `sum(scale_i * noise(freq_i * x, freq_i * y))`
//! over its octaves at an integer tile coordinate, then raises the sum to the
//! height exponent. The sum is never renormalized: downstream thresholds are
//! calibrated for the reference octave set only.

use noise::{NoiseFn, OpenSimplex};
use serde::{Deserialize, Serialize};

/// A 2-D coherent noise primitive with output in `[0, 1]`.
pub trait Noise2 {
    /// Sample the field at `(x, y)`.
    fn eval(&self, x: f64, y: f64) -> f64;
}

impl<F> Noise2 for F
where
    F: Fn(f64, f64) -> f64,
{
    fn eval(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// OpenSimplex noise remapped from `[-1, 1]` to `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedSimplex {
    inner: OpenSimplex,
}

impl NormalizedSimplex {
    /// Seeded primitive. Equal seeds give equal fields.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            inner: OpenSimplex::new(seed),
        }
    }
}

impl Noise2 for NormalizedSimplex {
    fn eval(&self, x: f64, y: f64) -> f64 {
        ((self.inner.get([x, y]) + 1.0) / 2.0).clamp(0.0, 1.0)
    }
}

/// One noise layer: sample coordinates are multiplied by `frequency`, the
/// sample by `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Octave {
    /// Multiplier on the tile coordinate before sampling.
    pub frequency: f64,
    /// Weight of this layer in the sum.
    pub scale: f64,
}

impl Octave {
    /// Layer sampled at `frequency`, weighted by `scale`.
    #[must_use]
    pub const fn new(frequency: f64, scale: f64) -> Self {
        Self { frequency, scale }
    }
}

/// A noise primitive plus the octave stack and redistribution exponent that
/// turn it into raw terrain height.
#[derive(Debug, Clone)]
pub struct NoiseMap<'a, N> {
    noise: N,
    octaves: &'a [Octave],
    exponent: f64,
}

impl<'a, N: Noise2> NoiseMap<'a, N> {
    /// Combine a primitive with an octave stack and height exponent.
    #[must_use]
    pub fn new(noise: N, octaves: &'a [Octave], exponent: f64) -> Self {
        Self {
            noise,
            octaves,
            exponent,
        }
    }

    /// Raw height at tile `(x, y)`.
    ///
    /// Negative sums (only possible with a primitive outside `[0, 1]`) are
    /// floored at zero before the exponent is applied.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> f64 {
        let (x, y) = (f64::from(x), f64::from(y));
        let sum: f64 = self
            .octaves
            .iter()
            .map(|octave| {
                octave.scale * self.noise.eval(octave.frequency * x, octave.frequency * y)
            })
            .sum();
        sum.max(0.0).powf(self.exponent)
    }
}
