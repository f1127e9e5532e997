use std::sync::Arc;
use tracing::{info, instrument};
use umbra_domain::{DomainError, SettingsChange, SettingsProfile};

use crate::ports::SettingsRepository;

/// Imports a transfer profile into the settings store.
///
/// A file that is not a JSON object aborts before anything is written, so
/// a failed import never corrupts the stored state. Recognized fields are
/// merged; everything else in the file is ignored.
pub struct ImportSettingsUseCase {
    repository: Arc<dyn SettingsRepository>,
}

impl ImportSettingsUseCase {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, text))]
    pub async fn execute(&self, text: &str) -> Result<SettingsChange, DomainError> {
        let patch = SettingsProfile::parse(text)?;
        let change = self.repository.save(patch).await?;

        info!(keys = ?change.keys, "Settings imported");
        Ok(change)
    }
}
