//! Table-backed white noise.
//!
//! Continuous coordinates are scaled by the table size, truncated to integers,
//! folded into one flat index, and wrapped into the table. Higher axes are
//! weighted by [`HEIGHT_OFFSET`] and [`DEPTH_OFFSET`] before folding so they do
//! not alias the first axis.

use rand::Rng;

use crate::error::NoiseError;
use crate::sampler::NoiseSampler;
use crate::seed::seeded_rng;
use crate::table::{RandomTable, TABLE_SIZE};

/// Index weight applied to the second axis.
pub const HEIGHT_OFFSET: f64 = 33.0;

/// Index weight applied to the third axis.
pub const DEPTH_OFFSET: f64 = 17.0;

const TABLE_SCALE: f64 = TABLE_SIZE as f64;

/// White noise sampled from a fixed [`RandomTable`].
///
/// The field is periodic with period 1.0 along every axis (one table length in
/// raw lattice units) and constant within each `1 / TABLE_SIZE` cell.
#[derive(Clone, Debug, PartialEq)]
pub struct WhiteNoiseSampler {
    table: RandomTable,
}

impl WhiteNoiseSampler {
    /// Wrap an existing table.
    pub fn new(table: RandomTable) -> Self {
        Self { table }
    }

    /// Deterministic sampler with default bounds.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(RandomTable::with_default_bounds(&mut seeded_rng(seed)))
    }

    /// Deterministic sampler with explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfiguration`] if `max_value <= min_value`.
    pub fn with_seed_and_bounds(
        seed: u64,
        min_value: u32,
        max_value: u32,
    ) -> Result<Self, NoiseError> {
        Self::from_rng(&mut seeded_rng(seed), min_value, max_value)
    }

    /// Fill the table from a caller-supplied random source.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfiguration`] if `max_value <= min_value`.
    pub fn from_rng<R: Rng + ?Sized>(
        rng: &mut R,
        min_value: u32,
        max_value: u32,
    ) -> Result<Self, NoiseError> {
        Ok(Self::new(RandomTable::new(rng, min_value, max_value)?))
    }

    /// Non-reproducible sampler seeded from thread-local entropy, default bounds.
    pub fn from_entropy() -> Self {
        Self::new(RandomTable::with_default_bounds(&mut rand::rng()))
    }

    /// The backing table.
    pub fn table(&self) -> &RandomTable {
        &self.table
    }

    #[inline]
    fn lookup(&self, index: i64) -> f64 {
        self.table.normalized(wrap_index(index))
    }
}

impl NoiseSampler for WhiteNoiseSampler {
    fn sample_1d(&self, x: f64) -> f64 {
        self.lookup(axis_index(x, 1.0))
    }

    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        let ix = axis_index(x, 1.0);
        let iy = axis_index(y, HEIGHT_OFFSET);
        self.lookup(ix.wrapping_add(iy))
    }

    fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let ix = axis_index(x, 1.0);
        let iy = axis_index(y, HEIGHT_OFFSET);
        let iz = axis_index(z, DEPTH_OFFSET);
        self.lookup(ix.wrapping_add(iy.wrapping_add(iz)))
    }
}

/// `floor(coord * TABLE_SIZE * weight)` as an integer.
///
/// The float-to-int cast saturates, and NaN maps to 0, so every input yields
/// some index.
#[inline]
fn axis_index(coord: f64, weight: f64) -> i64 {
    libm::floor(coord * TABLE_SCALE * weight) as i64
}

/// Euclidean modulo into the table; negative indices wrap from the end.
#[inline]
fn wrap_index(index: i64) -> usize {
    index.rem_euclid(TABLE_SIZE as i64) as usize
}
