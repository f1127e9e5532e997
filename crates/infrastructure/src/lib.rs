//! Umbra Infrastructure Layer
pub mod presentation;
pub mod repositories;

pub use presentation::{MarkerPresenter, PageDocument};
pub use repositories::JsonSettingsRepository;
