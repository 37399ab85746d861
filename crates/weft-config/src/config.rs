//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name used inside a config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level sampler configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Lookup table and seeding settings.
    pub table: TableConfig,
    /// Which sampler to build.
    pub sampler: SamplerKind,
    /// Default turbulence parameters.
    pub turbulence: TurbulenceConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Random table settings shared by every sampler built from this config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    /// Seed for the table RNG. `None` seeds from process entropy.
    pub seed: Option<u64>,
    /// Smallest value a table entry may hold.
    pub min_value: u32,
    /// Largest value a table entry may hold. Must exceed `min_value`.
    pub max_value: u32,
}

/// Noise sampler flavour.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SamplerKind {
    /// Table-backed white noise.
    #[default]
    White,
    /// Simplex gradient noise.
    Gradient,
}

/// Default multi-octave turbulence parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TurbulenceConfig {
    /// Number of octaves to sum.
    pub octaves: u32,
    /// Frequency multiplier per octave.
    pub lacunarity: f64,
    /// Amplitude multiplier per octave.
    pub gain: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_value: 0,
            max_value: u32::MAX - 1,
        }
    }
}

impl Default for TurbulenceConfig {
    fn default() -> Self {
        Self {
            octaves: 4,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for weft, e.g. `~/.config/weft` on Linux.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("weft"))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Check the values a sampler build would reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table.max_value <= self.table.min_value {
            return Err(ConfigError::Invalid {
                field: "table.max_value",
                reason: format!(
                    "must exceed min_value ({}), got {}",
                    self.table.min_value, self.table.max_value
                ),
            });
        }
        if self.turbulence.octaves == 0 {
            return Err(ConfigError::Invalid {
                field: "turbulence.octaves",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.turbulence.lacunarity.is_nan() || self.turbulence.lacunarity <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "turbulence.lacunarity",
                reason: format!("must be positive, got {}", self.turbulence.lacunarity),
            });
        }
        if self.turbulence.gain.is_nan() || self.turbulence.gain <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "turbulence.gain",
                reason: format!("must be positive, got {}", self.turbulence.gain),
            });
        }
        Ok(())
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
