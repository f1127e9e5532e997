use serde::{Deserialize, Serialize};

use crate::evaluator::clamp_intensity;
use crate::host::normalize_host;

/// Matching mode for the host lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Apply everywhere except the excluded hosts (blacklist semantics).
    #[default]
    All,
    /// Apply only on the allowed hosts.
    Whitelist,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Whitelist => "whitelist",
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-configured dark mode rules.
///
/// Absent keys deserialize to their defaults, so a partially written store
/// still reads as a complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub global_enabled: bool,
    pub mode: FilterMode,
    pub excluded_hosts: Vec<String>,
    pub allowed_hosts: Vec<String>,
    pub intensity: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            global_enabled: true,
            mode: FilterMode::All,
            excluded_hosts: vec![],
            allowed_hosts: vec![],
            intensity: 1.0,
        }
    }
}

impl Settings {
    /// Enforce the stored-host invariant: lowercase, non-empty, no leading
    /// dot, deduplicated with first occurrence winning. Intensity is
    /// clamped to `[0, 1]`.
    pub fn normalize(&mut self) {
        self.excluded_hosts = normalize_host_list(&self.excluded_hosts);
        self.allowed_hosts = normalize_host_list(&self.allowed_hosts);
        self.intensity = clamp_intensity(self.intensity);
    }

    /// Merge a partial update, normalize, and report which keys changed.
    pub fn apply_patch(&mut self, patch: SettingsPatch) -> Vec<SettingsKey> {
        let before = self.clone();

        if let Some(enabled) = patch.global_enabled {
            self.global_enabled = enabled;
        }
        if let Some(mode) = patch.mode {
            self.mode = mode;
        }
        if let Some(hosts) = patch.excluded_hosts {
            self.excluded_hosts = hosts;
        }
        if let Some(hosts) = patch.allowed_hosts {
            self.allowed_hosts = hosts;
        }
        if let Some(intensity) = patch.intensity {
            self.intensity = intensity;
        }
        self.normalize();

        let mut changed = Vec::new();
        if self.global_enabled != before.global_enabled {
            changed.push(SettingsKey::GlobalEnabled);
        }
        if self.mode != before.mode {
            changed.push(SettingsKey::Mode);
        }
        if self.excluded_hosts != before.excluded_hosts {
            changed.push(SettingsKey::ExcludedHosts);
        }
        if self.allowed_hosts != before.allowed_hosts {
            changed.push(SettingsKey::AllowedHosts);
        }
        if self.intensity != before.intensity {
            changed.push(SettingsKey::Intensity);
        }
        changed
    }
}

fn normalize_host_list(hosts: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(hosts.len());
    for raw in hosts {
        if let Some(host) = normalize_host(raw) {
            if !out.contains(&host) {
                out.push(host);
            }
        }
    }
    out
}

/// Partial update for [`Settings`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub global_enabled: Option<bool>,
    pub mode: Option<FilterMode>,
    pub excluded_hosts: Option<Vec<String>>,
    pub allowed_hosts: Option<Vec<String>>,
    pub intensity: Option<f64>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.global_enabled.is_none()
            && self.mode.is_none()
            && self.excluded_hosts.is_none()
            && self.allowed_hosts.is_none()
            && self.intensity.is_none()
    }
}

/// A stored settings key, named after its wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsKey {
    GlobalEnabled,
    Mode,
    ExcludedHosts,
    AllowedHosts,
    Intensity,
}

impl SettingsKey {
    /// Wire name, matching the persisted JSON key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GlobalEnabled => "globalEnabled",
            Self::Mode => "mode",
            Self::ExcludedHosts => "excludedHosts",
            Self::AllowedHosts => "allowedHosts",
            Self::Intensity => "intensity",
        }
    }
}

impl std::fmt::Display for SettingsKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Change-notification payload: the keys an effective write touched.
#[derive(Debug, Clone)]
pub struct SettingsChange {
    pub keys: Vec<SettingsKey>,
}

impl SettingsChange {
    pub fn contains(&self, key: SettingsKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
