use std::sync::Arc;
use tracing::{instrument, warn};
use umbra_domain::host::normalize_host;
use umbra_domain::{evaluate, Verdict};

use crate::ports::SettingsRepository;

/// Evaluates the rules for one page.
///
/// Infallible by contract: a hostname that does not parse is treated as an
/// empty host (internal pages), and a storage failure degrades to the
/// fail-safe off verdict.
pub struct CheckPageUseCase {
    repository: Arc<dyn SettingsRepository>,
}

impl CheckPageUseCase {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, raw_host: &str) -> Verdict {
        let host = normalize_host(raw_host).unwrap_or_default();

        match self.repository.load().await {
            Ok(settings) => evaluate(&host, &settings),
            Err(e) => {
                warn!(host = %host, error = %e, "Settings read failed, disabling dark mode");
                Verdict::off()
            }
        }
    }
}
