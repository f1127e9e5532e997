pub mod hosts;
pub mod pages;
pub mod settings;
pub mod transfer;

// Re-export use cases
pub use hosts::{
    AddAllowedHostUseCase, AddExcludedHostUseCase, RemoveAllowedHostUseCase,
    RemoveExcludedHostUseCase, SiteToggle, ToggleSiteUseCase,
};
pub use pages::CheckPageUseCase;
pub use settings::{ClearHostListsUseCase, GetSettingsUseCase, UpdateSettingsUseCase};
pub use transfer::{ExportSettingsUseCase, ImportSettingsUseCase};
