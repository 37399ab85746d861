//! Deterministic procedural noise: table-backed white noise, simplex gradient
//! noise, and multi-octave turbulence over either.
//!
//! Every sampler is immutable once built, so one instance can be shared
//! across threads without locking.

mod error;
mod from_config;
mod gradient;
mod grid;
mod sampler;
mod seed;
mod table;
mod turbulence;
mod white;

pub use error::NoiseError;
pub use from_config::build_sampler;
pub use gradient::GradientSampler;
pub use grid::NoiseGrid;
pub use sampler::NoiseSampler;
pub use seed::{entropy_seed, fold_seed, seeded_rng};
pub use table::{DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, RandomTable, TABLE_SIZE};
pub use turbulence::{
    Turbulence, TurbulenceParams, turbulence_1d, turbulence_1d_normalized, turbulence_2d,
    turbulence_2d_normalized, turbulence_3d, turbulence_3d_normalized,
};
pub use white::{DEPTH_OFFSET, HEIGHT_OFFSET, WhiteNoiseSampler};
