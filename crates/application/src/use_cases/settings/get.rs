use std::sync::Arc;
use umbra_domain::{DomainError, Settings};

use crate::ports::SettingsRepository;

pub struct GetSettingsUseCase {
    repository: Arc<dyn SettingsRepository>,
}

impl GetSettingsUseCase {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Settings, DomainError> {
        self.repository.load().await
    }
}
