use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info};
use umbra_application::ports::SettingsRepository;
use umbra_domain::{DomainError, Settings, SettingsChange, SettingsPatch};

const NOTIFY_CAPACITY: usize = 32;

/// File-backed settings store.
///
/// Settings persist as the same camelCase JSON shape the transfer format
/// uses, so a settings file is itself importable as a profile. Writes are
/// read-modify-write under a mutex and replace the file atomically (temp
/// file in the same directory, then rename). Every effective write fans
/// out its changed key set to subscribers.
pub struct JsonSettingsRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
    notifier: broadcast::Sender<SettingsChange>,
}

impl JsonSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let (notifier, _) = broadcast::channel(NOTIFY_CAPACITY);
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            notifier,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_settings(&self) -> Result<Settings, DomainError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => {
                let mut settings: Settings = serde_json::from_str(&text).map_err(|e| {
                    DomainError::Storage(format!(
                        "corrupt settings file {}: {e}",
                        self.path.display()
                    ))
                })?;
                settings.normalize();
                Ok(settings)
            }
            // First run: nothing stored yet, everything is at its default.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(DomainError::Storage(format!(
                "read {}: {e}",
                self.path.display()
            ))),
        }
    }

    async fn write_settings(&self, settings: &Settings) -> Result<(), DomainError> {
        let text = serde_json::to_string_pretty(settings)
            .map_err(|e| DomainError::SerializationError(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| DomainError::IoError(format!("{}: {e}", parent.display())))?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &text)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {e}", self.path.display())))?;
        Ok(())
    }
}

#[async_trait]
impl SettingsRepository for JsonSettingsRepository {
    async fn load(&self) -> Result<Settings, DomainError> {
        self.read_settings().await
    }

    async fn save(&self, patch: SettingsPatch) -> Result<SettingsChange, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut settings = self.read_settings().await?;
        let keys = settings.apply_patch(patch);
        let change = SettingsChange { keys };
        if change.is_empty() {
            debug!("Settings write was a no-op");
            return Ok(change);
        }

        self.write_settings(&settings).await?;

        // Nobody listening is fine; notifications are best-effort fan-out.
        let _ = self.notifier.send(change.clone());
        info!(keys = ?change.keys, "Settings persisted");
        Ok(change)
    }

    fn subscribe(&self) -> broadcast::Receiver<SettingsChange> {
        self.notifier.subscribe()
    }
}
