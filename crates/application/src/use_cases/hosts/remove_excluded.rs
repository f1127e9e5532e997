use std::sync::Arc;
use tracing::{info, instrument};
use umbra_domain::host::normalize_host;
use umbra_domain::{DomainError, SettingsPatch};

use crate::ports::SettingsRepository;

/// Removes a host from the exclusion list. Exact-match removal only; a
/// matching parent-domain entry stays listed.
pub struct RemoveExcludedHostUseCase {
    repository: Arc<dyn SettingsRepository>,
}

impl RemoveExcludedHostUseCase {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    /// Returns the updated exclusion list.
    #[instrument(skip(self))]
    pub async fn execute(&self, raw: &str) -> Result<Vec<String>, DomainError> {
        let host =
            normalize_host(raw).ok_or_else(|| DomainError::InvalidHost(raw.to_string()))?;

        let settings = self.repository.load().await?;
        let mut hosts = settings.excluded_hosts;
        hosts.retain(|h| h != &host);

        self.repository
            .save(SettingsPatch {
                excluded_hosts: Some(hosts.clone()),
                ..SettingsPatch::default()
            })
            .await?;

        info!(host = %host, "Host no longer excluded");
        Ok(hosts)
    }
}
