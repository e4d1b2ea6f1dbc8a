pub mod use_dashboard_nav;
pub mod use_projects;

pub use use_dashboard_nav::*;
pub use use_projects::*;
