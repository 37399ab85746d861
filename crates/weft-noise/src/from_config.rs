//! Building samplers from a loaded [`Config`].

use std::sync::Arc;

use weft_config::{Config, ConfigError, SamplerKind};

use crate::error::NoiseError;
use crate::gradient::GradientSampler;
use crate::sampler::NoiseSampler;
use crate::seed::{entropy_seed, fold_seed};
use crate::white::WhiteNoiseSampler;

/// Build the sampler selected by `config.sampler`.
///
/// The whole config is validated first. Uses `config.table.seed` when set,
/// otherwise a fresh entropy seed. The table bounds only shape white noise.
///
/// # Errors
///
/// Returns [`NoiseError::InvalidSetting`] naming the first field
/// [`Config::validate`] rejects.
pub fn build_sampler(config: &Config) -> Result<Arc<dyn NoiseSampler>, NoiseError> {
    validate(config)?;

    let table = &config.table;
    let seed = table.seed.unwrap_or_else(entropy_seed);

    let sampler: Arc<dyn NoiseSampler> = match config.sampler {
        SamplerKind::White => Arc::new(WhiteNoiseSampler::with_seed_and_bounds(
            seed,
            table.min_value,
            table.max_value,
        )?),
        SamplerKind::Gradient => Arc::new(GradientSampler::new(fold_seed(seed))),
    };

    log::info!(
        "Built {:?} sampler (seed {}, {})",
        config.sampler,
        seed,
        if table.seed.is_some() { "fixed" } else { "entropy" }
    );
    Ok(sampler)
}

fn validate(config: &Config) -> Result<(), NoiseError> {
    config.validate().map_err(|err| match err {
        ConfigError::Invalid { field, reason } => NoiseError::InvalidSetting { field, reason },
        other => NoiseError::InvalidSetting {
            field: "config",
            reason: other.to_string(),
        },
    })
}
