use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationSetting {
    pub id: String,
    pub title: String,
    pub description: String,
    pub enabled: bool,
}

impl NotificationSetting {
    pub fn new(id: &str, title: &str, description: &str, enabled: bool) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            enabled,
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

/// How long assessment data is kept.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RetentionPeriod {
    ThirtyDays,
    #[default]
    NinetyDays,
    OneYear,
    Forever,
}

impl RetentionPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RetentionPeriod::ThirtyDays => "30 days",
            RetentionPeriod::NinetyDays => "90 days",
            RetentionPeriod::OneYear => "1 year",
            RetentionPeriod::Forever => "Forever",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            RetentionPeriod::ThirtyDays => "30",
            RetentionPeriod::NinetyDays => "90",
            RetentionPeriod::OneYear => "365",
            RetentionPeriod::Forever => "forever",
        }
    }

    pub fn all() -> Vec<RetentionPeriod> {
        vec![
            RetentionPeriod::ThirtyDays,
            RetentionPeriod::NinetyDays,
            RetentionPeriod::OneYear,
            RetentionPeriod::Forever,
        ]
    }

    pub fn from_value(value: &str) -> Option<RetentionPeriod> {
        Self::all().into_iter().find(|r| r.value() == value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BackupFrequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl BackupFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackupFrequency::Daily => "Daily",
            BackupFrequency::Weekly => "Weekly",
            BackupFrequency::Monthly => "Monthly",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            BackupFrequency::Daily => "daily",
            BackupFrequency::Weekly => "weekly",
            BackupFrequency::Monthly => "monthly",
        }
    }

    pub fn all() -> Vec<BackupFrequency> {
        vec![
            BackupFrequency::Daily,
            BackupFrequency::Weekly,
            BackupFrequency::Monthly,
        ]
    }

    pub fn from_value(value: &str) -> Option<BackupFrequency> {
        Self::all().into_iter().find(|b| b.value() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_toggle_is_an_involution() {
        let mut setting = NotificationSetting::new("email", "Email", "Updates by email", true);
        setting.toggle();
        assert!(!setting.enabled);
        setting.toggle();
        assert!(setting.enabled);
    }

    #[test]
    fn select_values_parse_back() {
        for period in RetentionPeriod::all() {
            assert_eq!(RetentionPeriod::from_value(period.value()), Some(period));
        }
        for freq in BackupFrequency::all() {
            assert_eq!(BackupFrequency::from_value(freq.value()), Some(freq));
        }
        assert_eq!(RetentionPeriod::from_value("7"), None);
        assert_eq!(BackupFrequency::from_value("hourly"), None);
    }
}
