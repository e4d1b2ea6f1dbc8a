use crate::core::models::{BackupFrequency, NotificationSetting, RetentionPeriod};
use crate::core::navigation::{SettingsSection, TabSelector};

/// Everything the settings page shows. Values live only as long as the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsState {
    pub section: TabSelector<SettingsSection>,
    pub notifications: Vec<NotificationSetting>,
    pub dark_mode: bool,
    pub auto_save: bool,
    pub api_usage: bool,
    pub retention: RetentionPeriod,
    pub backup_frequency: BackupFrequency,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            section: TabSelector::default(),
            notifications: vec![
                NotificationSetting::new(
                    "email",
                    "Email Notifications",
                    "Receive assessment updates by email",
                    true,
                ),
                NotificationSetting::new(
                    "push",
                    "Push Notifications",
                    "Browser alerts when an analysis finishes",
                    false,
                ),
                NotificationSetting::new(
                    "reports",
                    "Weekly Reports",
                    "A summary of project impact every Monday",
                    true,
                ),
                NotificationSetting::new(
                    "ai-insights",
                    "AI Insights",
                    "Suggestions for reducing environmental impact",
                    true,
                ),
            ],
            dark_mode: false,
            auto_save: true,
            api_usage: false,
            retention: RetentionPeriod::default(),
            backup_frequency: BackupFrequency::default(),
        }
    }
}

impl SettingsState {
    pub fn select_section(&mut self, section: SettingsSection) {
        self.section.select(section);
    }

    /// Flips the matching notification. Returns `false` for an unknown id.
    pub fn toggle_notification(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(setting) => {
                setting.toggle();
                true
            }
            None => false,
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_auto_save(&mut self) {
        self.auto_save = !self.auto_save;
    }

    pub fn toggle_api_usage(&mut self) {
        self.api_usage = !self.api_usage;
    }

    pub fn set_retention(&mut self, retention: RetentionPeriod) {
        self.retention = retention;
    }

    pub fn set_backup_frequency(&mut self, frequency: BackupFrequency) {
        self.backup_frequency = frequency;
    }
}
