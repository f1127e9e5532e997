//! Umbra Domain Layer
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod host;
pub mod profile;
pub mod settings;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use evaluator::{clamp_intensity, evaluate, Verdict};
pub use profile::SettingsProfile;
pub use settings::{FilterMode, Settings, SettingsChange, SettingsKey, SettingsPatch};
