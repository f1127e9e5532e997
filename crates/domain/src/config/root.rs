use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::{LoggingConfig, PresentationConfig, StorageConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Overrides applied on top of the config file from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub storage_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub presentation: PresentationConfig,
}

impl Config {
    /// Load configuration from an optional TOML file and apply CLI
    /// overrides. No file means defaults.
    pub fn load(path: Option<&Path>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let text =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                        path: path.display().to_string(),
                        source,
                    })?;
                toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
            None => Self::default(),
        };

        if let Some(storage_path) = overrides.storage_path {
            config.storage.path = Some(storage_path);
        }
        if let Some(level) = overrides.log_level {
            config.logging.level = level;
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level: {}",
                self.logging.level
            )));
        }
        if self.presentation.marker_attribute.is_empty() {
            return Err(ConfigError::Invalid(
                "presentation.marker_attribute cannot be empty".to_string(),
            ));
        }
        if self.presentation.intensity_property.is_empty() {
            return Err(ConfigError::Invalid(
                "presentation.intensity_property cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
