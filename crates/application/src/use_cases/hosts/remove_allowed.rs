use std::sync::Arc;
use tracing::{info, instrument};
use umbra_domain::host::normalize_host;
use umbra_domain::{DomainError, SettingsPatch};

use crate::ports::SettingsRepository;

/// Removes a host from the allowance list. Exact-match removal only.
pub struct RemoveAllowedHostUseCase {
    repository: Arc<dyn SettingsRepository>,
}

impl RemoveAllowedHostUseCase {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    /// Returns the updated allowance list.
    #[instrument(skip(self))]
    pub async fn execute(&self, raw: &str) -> Result<Vec<String>, DomainError> {
        let host =
            normalize_host(raw).ok_or_else(|| DomainError::InvalidHost(raw.to_string()))?;

        let settings = self.repository.load().await?;
        let mut hosts = settings.allowed_hosts;
        hosts.retain(|h| h != &host);

        self.repository
            .save(SettingsPatch {
                allowed_hosts: Some(hosts.clone()),
                ..SettingsPatch::default()
            })
            .await?;

        info!(host = %host, "Host no longer allowed");
        Ok(hosts)
    }
}
