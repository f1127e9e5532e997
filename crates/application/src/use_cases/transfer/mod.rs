pub mod export_settings;
pub mod import_settings;

pub use export_settings::ExportSettingsUseCase;
pub use import_settings::ImportSettingsUseCase;
