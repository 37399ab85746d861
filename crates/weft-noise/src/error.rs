//! Noise error types.

/// Errors raised when building samplers or composing turbulence.
///
/// All of these are caller mistakes detected before any work is done; none
/// are retried internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoiseError {
    /// Table bounds leave no room for values.
    #[error("invalid table bounds: max_value ({max_value}) must exceed min_value ({min_value})")]
    InvalidConfiguration {
        /// Requested lower bound.
        min_value: u32,
        /// Requested upper bound.
        max_value: u32,
    },

    /// A loaded config failed validation before any sampler was built.
    #[error("invalid config value {field}: {reason}")]
    InvalidSetting {
        /// Dotted path of the offending field, e.g. `turbulence.octaves`.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A turbulence parameter is zero, negative, or NaN.
    #[error("invalid {name}: {value} (must be positive)")]
    InvalidArgument {
        /// Parameter name (`octaves`, `lacunarity`, or `gain`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Turbulence was asked to sample without a sampler attached.
    #[error("turbulence has no sampler attached")]
    MissingSampler,
}
