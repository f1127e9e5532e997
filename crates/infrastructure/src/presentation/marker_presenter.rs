use std::sync::{Arc, Mutex};

use tracing::trace;
use umbra_application::ports::PagePresenter;
use umbra_domain::config::PresentationConfig;
use umbra_domain::Verdict;

use super::document::PageDocument;

/// Applies verdicts to a shared [`PageDocument`]: a marker attribute while
/// dark mode is active, plus the intensity as a style property for
/// downstream stylesheets.
///
/// Idempotent through the document's own change guards — re-presenting an
/// identical verdict leaves the mutation counter untouched.
pub struct MarkerPresenter {
    document: Arc<Mutex<PageDocument>>,
    config: PresentationConfig,
}

impl MarkerPresenter {
    pub fn new(document: Arc<Mutex<PageDocument>>, config: PresentationConfig) -> Self {
        Self { document, config }
    }

    pub fn with_defaults(document: Arc<Mutex<PageDocument>>) -> Self {
        Self::new(document, PresentationConfig::default())
    }
}

impl PagePresenter for MarkerPresenter {
    fn present(&self, verdict: &Verdict) {
        let Ok(mut document) = self.document.lock() else {
            return;
        };

        if verdict.apply {
            document.set_attribute(&self.config.marker_attribute, &self.config.marker_value);
        } else {
            document.remove_attribute(&self.config.marker_attribute);
        }
        // The intensity variable stays published while dark mode is off,
        // so downstream stylesheets always see a defined value.
        document.set_style_property(
            &self.config.intensity_property,
            &format_intensity(verdict.intensity),
        );

        trace!(apply = verdict.apply, intensity = verdict.intensity, "Verdict presented");
    }
}

/// Render an intensity factor with trailing zeros trimmed, so repeated
/// presentations of the same verdict compare equal in the document.
fn format_intensity(value: f64) -> String {
    let mut text = format!("{value:.3}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}
