pub mod project;
pub mod settings;

pub use project::{MaterialType, Project, ProjectDraft, ProjectStatus};
pub use settings::{BackupFrequency, NotificationSetting, RetentionPeriod};
