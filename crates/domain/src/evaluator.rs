//! The rule evaluator: decides whether dark mode applies to a host.

use crate::host::any_match;
use crate::settings::{FilterMode, Settings};

/// Outcome of a rule evaluation for one host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub apply: bool,
    pub intensity: f64,
}

impl Verdict {
    /// Fail-safe verdict: dark mode off.
    pub fn off() -> Self {
        Self {
            apply: false,
            intensity: 1.0,
        }
    }
}

/// Clamp an intensity factor to `[0, 1]`. A non-numeric value (NaN) falls
/// back to the default of 1.
pub fn clamp_intensity(value: f64) -> f64 {
    if value.is_nan() {
        1.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Decide whether dark mode applies to `host` under `settings`.
///
/// Blacklist mode applies everywhere except hosts matching the exclusion
/// list; whitelist mode applies only on hosts matching the allowance list.
/// An empty host matches neither list, so internal pages default to on in
/// blacklist mode and off in whitelist mode. Total: never panics, any
/// malformed input degrades toward `apply = false`.
pub fn evaluate(host: &str, settings: &Settings) -> Verdict {
    let apply = settings.global_enabled
        && match settings.mode {
            FilterMode::Whitelist => any_match(host, &settings.allowed_hosts),
            FilterMode::All => !any_match(host, &settings.excluded_hosts),
        };

    Verdict {
        apply,
        intensity: clamp_intensity(settings.intensity),
    }
}
