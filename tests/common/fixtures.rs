#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use umbra_domain::{FilterMode, SettingsPatch};
use umbra_infrastructure::JsonSettingsRepository;

/// A file-backed settings store in a throwaway directory.
pub struct TestStore {
    // Held so the directory outlives the repository.
    _dir: TempDir,
    pub repository: Arc<JsonSettingsRepository>,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let repository = Arc::new(JsonSettingsRepository::new(dir.path().join("settings.json")));
        Self {
            _dir: dir,
            repository,
        }
    }

    /// Overwrite the settings file with raw bytes, bypassing the store.
    pub fn corrupt(&self, text: &str) {
        std::fs::write(self.repository.path(), text).expect("write settings file");
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Patch seeding blacklist mode with exclusions.
pub fn blacklist_patch(excluded: &[&str]) -> SettingsPatch {
    SettingsPatch {
        mode: Some(FilterMode::All),
        excluded_hosts: Some(excluded.iter().map(|h| h.to_string()).collect()),
        ..SettingsPatch::default()
    }
}

/// Patch seeding whitelist mode with allowances.
pub fn whitelist_patch(allowed: &[&str]) -> SettingsPatch {
    SettingsPatch {
        mode: Some(FilterMode::Whitelist),
        allowed_hosts: Some(allowed.iter().map(|h| h.to_string()).collect()),
        ..SettingsPatch::default()
    }
}

/// Poll until `condition` holds, or fail after two seconds.
pub async fn wait_for(mut condition: impl FnMut() -> bool) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not met in time");
}
