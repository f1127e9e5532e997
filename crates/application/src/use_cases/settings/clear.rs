use std::sync::Arc;
use tracing::{info, instrument};
use umbra_domain::{DomainError, SettingsChange, SettingsPatch};

use crate::ports::SettingsRepository;

/// Empties both host lists (the options page "clear all").
///
/// The global switch, mode and intensity are left untouched.
pub struct ClearHostListsUseCase {
    repository: Arc<dyn SettingsRepository>,
}

impl ClearHostListsUseCase {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<SettingsChange, DomainError> {
        let change = self
            .repository
            .save(SettingsPatch {
                excluded_hosts: Some(vec![]),
                allowed_hosts: Some(vec![]),
                ..SettingsPatch::default()
            })
            .await?;

        info!("Host lists cleared");
        Ok(change)
    }
}
