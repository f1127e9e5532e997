//! Transfer profiles: the import/export file format.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DomainError;
use crate::evaluator::clamp_intensity;
use crate::host::normalize_host;
use crate::settings::{FilterMode, Settings, SettingsPatch};

/// The transfer file shape. Field names are the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsProfile {
    pub global_enabled: bool,
    pub excluded_hosts: Vec<String>,
    pub allowed_hosts: Vec<String>,
    pub mode: FilterMode,
    pub intensity: f64,
}

impl SettingsProfile {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            global_enabled: settings.global_enabled,
            excluded_hosts: settings.excluded_hosts.clone(),
            allowed_hosts: settings.allowed_hosts.clone(),
            mode: settings.mode,
            intensity: clamp_intensity(settings.intensity),
        }
    }

    /// Render the export file: pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DomainError::SerializationError(e.to_string()))
    }

    /// Parse an imported profile into a settings patch.
    ///
    /// Anything that is not a JSON object aborts the import. Within the
    /// object, fields are read independently: recognized fields of the
    /// right type land in the patch, wrong-typed and unknown fields are
    /// skipped. Imported host lists are renormalized and deduplicated,
    /// intensity is clamped, the mode is accepted only as `"all"` or
    /// `"whitelist"`.
    pub fn parse(text: &str) -> Result<SettingsPatch, DomainError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| DomainError::InvalidProfile(e.to_string()))?;
        let Value::Object(fields) = value else {
            return Err(DomainError::InvalidProfile(
                "expected a JSON object".to_string(),
            ));
        };

        let mut patch = SettingsPatch::default();
        if let Some(Value::Bool(enabled)) = fields.get("globalEnabled") {
            patch.global_enabled = Some(*enabled);
        }
        if let Some(Value::Array(hosts)) = fields.get("excludedHosts") {
            patch.excluded_hosts = Some(host_strings(hosts));
        }
        if let Some(Value::Array(hosts)) = fields.get("allowedHosts") {
            patch.allowed_hosts = Some(host_strings(hosts));
        }
        if let Some(Value::String(mode)) = fields.get("mode") {
            match mode.as_str() {
                "all" => patch.mode = Some(FilterMode::All),
                "whitelist" => patch.mode = Some(FilterMode::Whitelist),
                _ => {}
            }
        }
        if let Some(intensity) = fields.get("intensity").and_then(Value::as_f64) {
            patch.intensity = Some(clamp_intensity(intensity));
        }
        Ok(patch)
    }
}

fn host_strings(values: &[Value]) -> Vec<String> {
    let mut hosts = Vec::new();
    for value in values {
        if let Some(host) = value.as_str().and_then(normalize_host) {
            if !hosts.contains(&host) {
                hosts.push(host);
            }
        }
    }
    hosts
}
