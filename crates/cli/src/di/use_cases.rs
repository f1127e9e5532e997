use umbra_application::use_cases::{
    AddAllowedHostUseCase, AddExcludedHostUseCase, CheckPageUseCase, ClearHostListsUseCase,
    ExportSettingsUseCase, GetSettingsUseCase, ImportSettingsUseCase, RemoveAllowedHostUseCase,
    RemoveExcludedHostUseCase, ToggleSiteUseCase, UpdateSettingsUseCase,
};

use super::Repositories;

/// All wired use cases.
pub struct UseCases {
    pub get_settings: GetSettingsUseCase,
    pub update_settings: UpdateSettingsUseCase,
    pub clear_host_lists: ClearHostListsUseCase,
    pub add_excluded: AddExcludedHostUseCase,
    pub remove_excluded: RemoveExcludedHostUseCase,
    pub add_allowed: AddAllowedHostUseCase,
    pub remove_allowed: RemoveAllowedHostUseCase,
    pub toggle_site: ToggleSiteUseCase,
    pub check_page: CheckPageUseCase,
    pub export_settings: ExportSettingsUseCase,
    pub import_settings: ImportSettingsUseCase,
}

impl UseCases {
    pub fn new(repositories: &Repositories) -> Self {
        let settings = &repositories.settings;
        Self {
            get_settings: GetSettingsUseCase::new(settings.clone()),
            update_settings: UpdateSettingsUseCase::new(settings.clone()),
            clear_host_lists: ClearHostListsUseCase::new(settings.clone()),
            add_excluded: AddExcludedHostUseCase::new(settings.clone()),
            remove_excluded: RemoveExcludedHostUseCase::new(settings.clone()),
            add_allowed: AddAllowedHostUseCase::new(settings.clone()),
            remove_allowed: RemoveAllowedHostUseCase::new(settings.clone()),
            toggle_site: ToggleSiteUseCase::new(settings.clone()),
            check_page: CheckPageUseCase::new(settings.clone()),
            export_settings: ExportSettingsUseCase::new(settings.clone()),
            import_settings: ImportSettingsUseCase::new(settings.clone()),
        }
    }
}
