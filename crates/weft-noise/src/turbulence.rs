//! Multi-octave turbulence over any [`NoiseSampler`].
//!
//! Each octave samples at `coords * frequency`, folds the `[0, 1]` value into
//! `|2n - 1|`, and weights it by the current amplitude. Frequency grows by
//! lacunarity and amplitude shrinks by gain after every octave.

use std::fmt;
use std::sync::Arc;

use glam::{DVec2, DVec3};
use weft_config::{Config, TurbulenceConfig};

use crate::error::NoiseError;
use crate::from_config::build_sampler;
use crate::sampler::NoiseSampler;

/// Octave count, frequency multiplier, and amplitude multiplier.
///
/// Plain values; checked on every sampling call rather than at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurbulenceParams {
    /// Number of octaves to sum. Must be at least 1.
    pub octaves: u32,
    /// Frequency multiplier per octave. Must be positive.
    pub lacunarity: f64,
    /// Amplitude multiplier per octave. Must be positive.
    pub gain: f64,
}

impl Default for TurbulenceParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }
}

impl TurbulenceParams {
    /// Bundle parameters as given; see [`TurbulenceParams::validate`].
    pub fn new(octaves: u32, lacunarity: f64, gain: f64) -> Self {
        Self {
            octaves,
            lacunarity,
            gain,
        }
    }

    /// Reject zero octaves and non-positive (or NaN) lacunarity or gain.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves == 0 {
            return Err(NoiseError::InvalidArgument {
                name: "octaves",
                value: 0.0,
            });
        }
        if self.lacunarity.is_nan() || self.lacunarity <= 0.0 {
            return Err(NoiseError::InvalidArgument {
                name: "lacunarity",
                value: self.lacunarity,
            });
        }
        if self.gain.is_nan() || self.gain <= 0.0 {
            return Err(NoiseError::InvalidArgument {
                name: "gain",
                value: self.gain,
            });
        }
        Ok(())
    }

    /// Sum of the octave amplitudes, `gain^0 + gain^1 + ... + gain^(octaves-1)`.
    ///
    /// This is the largest value raw turbulence can reach. With `gain > 1` the
    /// series is cut at the last octave whose running sum is still finite.
    pub fn max_amplitude(&self) -> f64 {
        self.amplitudes().fold(0.0, |sum, amplitude| sum + amplitude)
    }

    /// Octave weights `gain^0, gain^1, ...`, at most `octaves` of them.
    ///
    /// Ends early once the running sum would overflow; octaves past that point
    /// are skipped.
    fn amplitudes(&self) -> impl Iterator<Item = f64> {
        let gain = self.gain;
        let mut total = 0.0_f64;
        std::iter::successors(Some(1.0_f64), move |amplitude| Some(amplitude * gain))
            .take(self.octaves as usize)
            .take_while(move |amplitude| {
                total += *amplitude;
                total.is_finite()
            })
    }

    fn normalize(&self, raw: f64) -> f64 {
        let max = self.max_amplitude();
        if max > 0.0 { raw / max } else { 0.0 }
    }
}

impl From<&TurbulenceConfig> for TurbulenceParams {
    fn from(config: &TurbulenceConfig) -> Self {
        Self::new(config.octaves, config.lacunarity, config.gain)
    }
}

/// Validate, then sum octaves. `sample` receives the octave frequency.
fn accumulate(
    params: &TurbulenceParams,
    mut sample: impl FnMut(f64) -> f64,
) -> Result<f64, NoiseError> {
    params.validate()?;

    let mut sum = 0.0;
    let mut frequency = 1.0;

    for amplitude in params.amplitudes() {
        let n = sample(frequency);
        sum += (2.0 * n - 1.0).abs() * amplitude;

        frequency *= params.lacunarity;
    }

    Ok(sum)
}

/// Raw 1D turbulence. Non-negative, at most [`TurbulenceParams::max_amplitude`].
pub fn turbulence_1d<S: NoiseSampler + ?Sized>(
    sampler: &S,
    x: f64,
    params: &TurbulenceParams,
) -> Result<f64, NoiseError> {
    accumulate(params, |frequency| sampler.sample_1d(x * frequency))
}

/// Raw 2D turbulence.
pub fn turbulence_2d<S: NoiseSampler + ?Sized>(
    sampler: &S,
    point: DVec2,
    params: &TurbulenceParams,
) -> Result<f64, NoiseError> {
    accumulate(params, |frequency| {
        let p = point * frequency;
        sampler.sample_2d(p.x, p.y)
    })
}

/// Raw 3D turbulence.
pub fn turbulence_3d<S: NoiseSampler + ?Sized>(
    sampler: &S,
    point: DVec3,
    params: &TurbulenceParams,
) -> Result<f64, NoiseError> {
    accumulate(params, |frequency| {
        let p = point * frequency;
        sampler.sample_3d(p.x, p.y, p.z)
    })
}

/// 1D turbulence divided by the amplitude sum, in `[0, 1]`.
pub fn turbulence_1d_normalized<S: NoiseSampler + ?Sized>(
    sampler: &S,
    x: f64,
    params: &TurbulenceParams,
) -> Result<f64, NoiseError> {
    turbulence_1d(sampler, x, params).map(|raw| params.normalize(raw))
}

/// 2D turbulence divided by the amplitude sum, in `[0, 1]`.
pub fn turbulence_2d_normalized<S: NoiseSampler + ?Sized>(
    sampler: &S,
    point: DVec2,
    params: &TurbulenceParams,
) -> Result<f64, NoiseError> {
    turbulence_2d(sampler, point, params).map(|raw| params.normalize(raw))
}

/// 3D turbulence divided by the amplitude sum, in `[0, 1]`.
pub fn turbulence_3d_normalized<S: NoiseSampler + ?Sized>(
    sampler: &S,
    point: DVec3,
    params: &TurbulenceParams,
) -> Result<f64, NoiseError> {
    turbulence_3d(sampler, point, params).map(|raw| params.normalize(raw))
}

/// Turbulence bound to a shared sampler and a parameter set.
///
/// The sampler slot may be empty; sampling then fails with
/// [`NoiseError::MissingSampler`]. Parameters are validated on every call.
#[derive(Clone, Default)]
pub struct Turbulence {
    sampler: Option<Arc<dyn NoiseSampler>>,
    params: TurbulenceParams,
}

impl Turbulence {
    /// Composer with no sampler attached.
    pub fn new(params: TurbulenceParams) -> Self {
        Self {
            sampler: None,
            params,
        }
    }

    /// Build the sampler and default parameters described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidSetting`] when `config` fails validation.
    pub fn from_config(config: &Config) -> Result<Self, NoiseError> {
        let sampler = build_sampler(config)?;
        Ok(Self::new(TurbulenceParams::from(&config.turbulence)).with_sampler(sampler))
    }

    /// Attach a shared sampler.
    pub fn with_sampler(mut self, sampler: Arc<dyn NoiseSampler>) -> Self {
        self.sampler = Some(sampler);
        self
    }

    /// Replace or detach the sampler.
    pub fn set_sampler(&mut self, sampler: Option<Arc<dyn NoiseSampler>>) {
        self.sampler = sampler;
    }

    /// The attached sampler, if any.
    pub fn sampler(&self) -> Option<&Arc<dyn NoiseSampler>> {
        self.sampler.as_ref()
    }

    /// Parameters used by every `sample_*` call.
    pub fn params(&self) -> &TurbulenceParams {
        &self.params
    }

    /// Replace the parameters. They are checked on the next sample, not here.
    pub fn set_params(&mut self, params: TurbulenceParams) {
        self.params = params;
    }

    fn require_sampler(&self) -> Result<&dyn NoiseSampler, NoiseError> {
        self.sampler.as_deref().ok_or(NoiseError::MissingSampler)
    }

    /// Raw 1D turbulence at `x`.
    pub fn sample_1d(&self, x: f64) -> Result<f64, NoiseError> {
        turbulence_1d(self.require_sampler()?, x, &self.params)
    }

    /// Raw 2D turbulence at `point`.
    pub fn sample_2d(&self, point: DVec2) -> Result<f64, NoiseError> {
        turbulence_2d(self.require_sampler()?, point, &self.params)
    }

    /// Raw 3D turbulence at `point`.
    pub fn sample_3d(&self, point: DVec3) -> Result<f64, NoiseError> {
        turbulence_3d(self.require_sampler()?, point, &self.params)
    }

    /// 1D turbulence scaled into `[0, 1]`.
    pub fn sample_1d_normalized(&self, x: f64) -> Result<f64, NoiseError> {
        turbulence_1d_normalized(self.require_sampler()?, x, &self.params)
    }

    /// 2D turbulence scaled into `[0, 1]`.
    pub fn sample_2d_normalized(&self, point: DVec2) -> Result<f64, NoiseError> {
        turbulence_2d_normalized(self.require_sampler()?, point, &self.params)
    }

    /// 3D turbulence scaled into `[0, 1]`.
    pub fn sample_3d_normalized(&self, point: DVec3) -> Result<f64, NoiseError> {
        turbulence_3d_normalized(self.require_sampler()?, point, &self.params)
    }
}

impl fmt::Debug for Turbulence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Turbulence")
            .field("has_sampler", &self.sampler.is_some())
            .field("params", &self.params)
            .finish()
    }
}
