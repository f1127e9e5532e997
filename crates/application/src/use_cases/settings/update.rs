use std::sync::Arc;
use tracing::{info, instrument};
use umbra_domain::{DomainError, SettingsChange, SettingsPatch};

use crate::ports::SettingsRepository;

pub struct UpdateSettingsUseCase {
    repository: Arc<dyn SettingsRepository>,
}

impl UpdateSettingsUseCase {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, patch: SettingsPatch) -> Result<SettingsChange, DomainError> {
        let change = self.repository.save(patch).await?;

        if !change.is_empty() {
            info!(keys = ?change.keys, "Settings updated");
        }

        Ok(change)
    }
}
