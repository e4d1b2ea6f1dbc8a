pub mod error;
pub mod landing;
pub mod models;
pub mod navigation;
pub mod settings_state;
pub mod store;

pub use error::StoreError;
pub use landing::{scroll_progress, FaqAccordion};
pub use models::*;
pub use navigation::{DashboardNav, DashboardTab, SettingsSection};
pub use settings_state::SettingsState;
pub use store::ProjectStore;
