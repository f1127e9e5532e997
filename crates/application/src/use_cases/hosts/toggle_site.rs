use std::sync::Arc;
use tracing::{info, instrument};
use umbra_domain::host::normalize_host;
use umbra_domain::{DomainError, FilterMode, SettingsPatch};

use crate::ports::SettingsRepository;

/// Result of a site quick-toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteToggle {
    pub host: String,
    pub mode: FilterMode,
    /// Whether the host is listed after the toggle (excluded in blacklist
    /// mode, allowed in whitelist mode).
    pub listed: bool,
}

/// The site quick-toggle: flips the host's entry on the active mode's
/// list.
///
/// Membership test and removal are exact-match only. Toggling off a host
/// whose parent domain is also listed removes just the exact entry; the
/// parent rule stays and keeps matching the host.
pub struct ToggleSiteUseCase {
    repository: Arc<dyn SettingsRepository>,
}

impl ToggleSiteUseCase {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, raw: &str) -> Result<SiteToggle, DomainError> {
        let host =
            normalize_host(raw).ok_or_else(|| DomainError::InvalidHost(raw.to_string()))?;

        let settings = self.repository.load().await?;
        let mode = settings.mode;
        let mut hosts = match mode {
            FilterMode::Whitelist => settings.allowed_hosts,
            FilterMode::All => settings.excluded_hosts,
        };

        let listed = if hosts.contains(&host) {
            hosts.retain(|h| h != &host);
            false
        } else {
            hosts.push(host.clone());
            true
        };

        let patch = match mode {
            FilterMode::Whitelist => SettingsPatch {
                allowed_hosts: Some(hosts),
                ..SettingsPatch::default()
            },
            FilterMode::All => SettingsPatch {
                excluded_hosts: Some(hosts),
                ..SettingsPatch::default()
            },
        };
        self.repository.save(patch).await?;

        info!(host = %host, mode = %mode, listed, "Site toggled");
        Ok(SiteToggle { host, mode, listed })
    }
}
