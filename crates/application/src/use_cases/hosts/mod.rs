pub mod add_allowed;
pub mod add_excluded;
pub mod remove_allowed;
pub mod remove_excluded;
pub mod toggle_site;

pub use add_allowed::AddAllowedHostUseCase;
pub use add_excluded::AddExcludedHostUseCase;
pub use remove_allowed::RemoveAllowedHostUseCase;
pub use remove_excluded::RemoveExcludedHostUseCase;
pub use toggle_site::{SiteToggle, ToggleSiteUseCase};
