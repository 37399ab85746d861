//! Configuration for weft noise samplers.
//!
//! Settings persist to disk as RON files. Every section falls back to its
//! defaults when missing, and unknown fields are ignored so older and newer
//! files keep loading.

mod config;
mod error;

pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, SamplerKind, TableConfig, TurbulenceConfig,
    default_config_dir,
};
pub use error::ConfigError;
