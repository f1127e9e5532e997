use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings storage configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Settings file path.
    /// Default: `umbra/settings.json` under the platform config directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
