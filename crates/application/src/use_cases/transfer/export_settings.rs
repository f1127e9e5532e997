use std::sync::Arc;
use tracing::{info, instrument};
use umbra_domain::{DomainError, SettingsProfile};

use crate::ports::SettingsRepository;

/// Renders the current settings as a transfer profile (pretty JSON).
pub struct ExportSettingsUseCase {
    repository: Arc<dyn SettingsRepository>,
}

impl ExportSettingsUseCase {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<String, DomainError> {
        let settings = self.repository.load().await?;
        let json = SettingsProfile::from_settings(&settings).to_json()?;

        info!(bytes = json.len(), "Settings exported");
        Ok(json)
    }
}
