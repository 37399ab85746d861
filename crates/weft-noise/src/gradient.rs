//! Simplex gradient noise remapped into `[0, 1]`.

use std::fmt;

use noise::{NoiseFn, Simplex};
use rand::Rng;

use crate::sampler::NoiseSampler;
use crate::seed::{entropy_seed, fold_seed};

/// Smooth gradient noise over a seeded simplex permutation.
///
/// Raw simplex output in `[-1, 1]` is mapped to `[0, 1]` so the sampler can
/// stand in anywhere a [`crate::WhiteNoiseSampler`] is used.
#[derive(Clone)]
pub struct GradientSampler {
    noise: Simplex,
    seed: u32,
    frequency: f64,
}

impl GradientSampler {
    /// Create a sampler whose permutation is derived from `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Simplex::new(seed),
            seed,
            frequency: 1.0,
        }
    }

    /// Draw the permutation seed from a caller-supplied random source.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.next_u32())
    }

    /// Non-reproducible sampler seeded from thread-local entropy.
    pub fn from_entropy() -> Self {
        Self::new(fold_seed(entropy_seed()))
    }

    /// Scale applied to every input coordinate. Default: 1.0.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl fmt::Debug for GradientSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradientSampler")
            .field("seed", &self.seed)
            .field("frequency", &self.frequency)
            .finish()
    }
}

/// Coordinates at or beyond this magnitude are folded back into `[0, FOLD_PERIOD)`.
///
/// A multiple of the simplex permutation length, and far below the point where
/// the lattice floor stops fitting in an `isize`.
const FOLD_PERIOD: f64 = (1u64 << 40) as f64;

/// Normalize from [-1, 1] to [0, 1].
#[inline]
fn to_unit(raw: f64) -> f64 {
    ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
}

/// Map a scaled coordinate into the range simplex evaluation accepts.
///
/// Non-finite coordinates read the origin. Ordinary coordinates pass through
/// unchanged.
#[inline]
fn fold_coord(coord: f64) -> f64 {
    if !coord.is_finite() {
        0.0
    } else if coord.abs() < FOLD_PERIOD {
        coord
    } else {
        coord.rem_euclid(FOLD_PERIOD)
    }
}

impl NoiseSampler for GradientSampler {
    /// Evaluates the 2D field along the `y = 0` line.
    fn sample_1d(&self, x: f64) -> f64 {
        to_unit(self.noise.get([fold_coord(x * self.frequency), 0.0]))
    }

    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        let f = self.frequency;
        to_unit(self.noise.get([fold_coord(x * f), fold_coord(y * f)]))
    }

    fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let f = self.frequency;
        to_unit(self.noise.get([fold_coord(x * f), fold_coord(y * f), fold_coord(z * f)]))
    }
}
