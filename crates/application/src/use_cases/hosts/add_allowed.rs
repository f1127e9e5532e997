use std::sync::Arc;
use tracing::{info, instrument};
use umbra_domain::host::normalize_host;
use umbra_domain::{DomainError, SettingsPatch};

use crate::ports::SettingsRepository;

/// Adds a host to the allowance list (whitelist mode).
pub struct AddAllowedHostUseCase {
    repository: Arc<dyn SettingsRepository>,
}

impl AddAllowedHostUseCase {
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
        if !hosts.contains(&host) {
            hosts.push(host.clone());
        }

        self.repository
            .save(SettingsPatch {
                allowed_hosts: Some(hosts.clone()),
                ..SettingsPatch::default()
            })
            .await?;

        info!(host = %host, "Host allowed");
        Ok(hosts)
    }
}
