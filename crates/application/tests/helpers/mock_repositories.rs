#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, RwLock};
use umbra_application::ports::{PagePresenter, SettingsRepository};
use umbra_domain::{DomainError, Settings, SettingsChange, SettingsPatch, Verdict};

// ============================================================================
// Mock SettingsRepository
// ============================================================================

pub struct MockSettingsRepository {
    settings: Arc<RwLock<Settings>>,
    notifier: broadcast::Sender<SettingsChange>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockSettingsRepository {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a mock pre-seeded with settings.
    pub fn with_settings(mut settings: Settings) -> Self {
        settings.normalize();
        let (notifier, _) = broadcast::channel(16);
        Self {
            settings: Arc::new(RwLock::new(settings)),
            notifier,
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    /// Make every storage operation fail.
    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    /// Current stored settings, bypassing the port.
    pub async fn snapshot(&self) -> Settings {
        self.settings.read().await.clone()
    }
}

impl Default for MockSettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsRepository for MockSettingsRepository {
    async fn load(&self) -> Result<Settings, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::Storage("mock storage failed".to_string()));
        }
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, patch: SettingsPatch) -> Result<SettingsChange, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::Storage("mock storage failed".to_string()));
        }

        let mut settings = self.settings.write().await;
        let keys = settings.apply_patch(patch);
        let change = SettingsChange { keys };
        if !change.is_empty() {
            let _ = self.notifier.send(change.clone());
        }
        Ok(change)
    }

    fn subscribe(&self) -> broadcast::Receiver<SettingsChange> {
        self.notifier.subscribe()
    }
}

// ============================================================================
// Recording PagePresenter
// ============================================================================

pub struct RecordingPresenter {
    verdicts: Mutex<Vec<Verdict>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self {
            verdicts: Mutex::new(Vec::new()),
        }
    }

    /// Number of presentations so far.
    pub fn count(&self) -> usize {
        self.verdicts.lock().unwrap().len()
    }

    /// Most recently presented verdict.
    pub fn last(&self) -> Option<Verdict> {
        self.verdicts.lock().unwrap().last().copied()
    }

    pub fn all(&self) -> Vec<Verdict> {
        self.verdicts.lock().unwrap().clone()
    }
}

impl Default for RecordingPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PagePresenter for RecordingPresenter {
    fn present(&self, verdict: &Verdict) {
        self.verdicts.lock().unwrap().push(*verdict);
    }
}
