pub mod coming_soon;
pub mod overview_panel;
pub mod project_card;
pub mod projects_panel;
pub mod settings_panel;
pub mod sidebar;

pub use coming_soon::ComingSoon;
pub use overview_panel::OverviewPanel;
pub use projects_panel::ProjectsPanel;
pub use settings_panel::SettingsPanel;
pub use sidebar::DashboardSidebar;
