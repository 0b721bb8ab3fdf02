//! Configuration management for Maester services.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (MAESTER__ prefix, `__` separator)
//! 2. Config file (maester.toml, prefix overridable)
//! 3. Defaults

use serde::Deserialize;

use crate::error::MaesterError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaesterConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Where the seed data lives.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Path to the characters JSON array.
    #[serde(default = "default_characters_path")]
    pub characters: String,

    /// Path to the houses JSON array.
    #[serde(default = "default_houses_path")]
    pub houses: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit log lines as JSON.
    #[serde(default)]
    pub json: bool,
}

fn default_characters_path() -> String {
    "data/characters.json".to_string()
}

fn default_houses_path() -> String {
    "data/houses.json".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            characters: default_characters_path(),
            houses: default_houses_path(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl MaesterConfig {
    /// Load from `<file_prefix>.{toml,json,yaml}` (optional) overlaid with
    /// `MAESTER__*` environment variables.
    pub fn load(file_prefix: &str) -> Result<Self, MaesterError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("MAESTER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(cfg.try_deserialize()?)
    }
}
