pub mod json_settings_repository;

pub use json_settings_repository::JsonSettingsRepository;
