use serde::{Deserialize, Serialize};

/// Document marker configuration.
///
/// The defaults are the wire values downstream stylesheets key on.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PresentationConfig {
    /// Attribute set on the document root while dark mode is active
    #[serde(default = "default_marker_attribute")]
    pub marker_attribute: String,

    /// Value written to the marker attribute
    #[serde(default = "default_marker_value")]
    pub marker_value: String,

    /// Style property carrying the intensity factor
    #[serde(default = "default_intensity_property")]
    pub intensity_property: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            marker_attribute: default_marker_attribute(),
            marker_value: default_marker_value(),
            intensity_property: default_intensity_property(),
        }
    }
}

fn default_marker_attribute() -> String {
    "data-dark-mode".to_string()
}

fn default_marker_value() -> String {
    "on".to_string()
}

fn default_intensity_property() -> String {
    "--dm-i".to_string()
}
