use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use umbra_application::ports::SettingsRepository;
use umbra_domain::Config;
use umbra_infrastructure::JsonSettingsRepository;

/// Shared repository instances.
pub struct Repositories {
    pub settings: Arc<dyn SettingsRepository>,
}

impl Repositories {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let path = match &config.storage.path {
            Some(path) => path.clone(),
            None => default_settings_path()?,
        };
        info!(path = %path.display(), "Settings store opened");

        Ok(Self {
            settings: Arc::new(JsonSettingsRepository::new(path)),
        })
    }
}

fn default_settings_path() -> anyhow::Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("no user configuration directory available"))?;
    Ok(base.join("umbra").join("settings.json"))
}
