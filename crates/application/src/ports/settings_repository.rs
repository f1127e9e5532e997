use async_trait::async_trait;
use tokio::sync::broadcast;
use umbra_domain::{DomainError, Settings, SettingsChange, SettingsPatch};

/// Application-layer port for the settings store.
///
/// The store is externally synchronized and eventually consistent across
/// subscribers; implementations live in the infrastructure layer and are
/// injected at DI time.
///
/// `load` and `save` are async because they touch storage. `subscribe` is
/// synchronous — it only hands out a receiver on the store's notification
/// stream.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Read the current settings, with defaults merged in for absent keys.
    async fn load(&self) -> Result<Settings, DomainError>;

    /// Merge a partial update into the stored settings.
    ///
    /// Host lists are renormalized before persisting. Returns the set of
    /// keys that actually changed; subscribers receive the same set
    /// whenever it is non-empty.
    async fn save(&self, patch: SettingsPatch) -> Result<SettingsChange, DomainError>;

    /// Subscribe to change notifications. Every effective write through
    /// any handle of the store fans out to every receiver.
    fn subscribe(&self) -> broadcast::Receiver<SettingsChange>;
}
