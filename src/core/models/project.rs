use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Active,
    Draft,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Draft => "Draft",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn all() -> Vec<ProjectStatus> {
        vec![
            ProjectStatus::Active,
            ProjectStatus::Draft,
            ProjectStatus::Completed,
        ]
    }
}

/// Primary material a project assesses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MaterialType {
    #[default]
    Steel,
    Aluminum,
    Copper,
    Other,
}

impl MaterialType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Steel => "Steel",
            MaterialType::Aluminum => "Aluminum",
            MaterialType::Copper => "Copper",
            MaterialType::Other => "Other",
        }
    }

    pub fn all() -> Vec<MaterialType> {
        vec![
            MaterialType::Steel,
            MaterialType::Aluminum,
            MaterialType::Copper,
            MaterialType::Other,
        ]
    }

    // <select> option values are the display labels
    pub fn from_value(value: &str) -> Option<MaterialType> {
        Self::all().into_iter().find(|m| m.as_str() == value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_date: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub status: ProjectStatus,
    #[serde(rename = "type")]
    pub material: MaterialType,
}

impl Project {
    /// Builds a fresh `Draft` project stamped with `now`.
    pub fn new(name: String, description: String, material: MaterialType, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            created_date: now,
            last_modified: now,
            status: ProjectStatus::Draft,
            material,
        }
    }

    pub fn apply_draft(&mut self, name: String, description: String, material: MaterialType, now: DateTime<Utc>) {
        self.name = name;
        self.description = description;
        self.material = material;
        self.last_modified = now;
    }
}

/// Form contents submitted by the create and edit dialogs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub material: MaterialType,
}

impl ProjectDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>, material: MaterialType) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            material,
        }
    }

    /// Trimmed name, or `None` when it is blank.
    pub fn trimmed_name(&self) -> Option<String> {
        let name = self.name.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_project_starts_as_draft_with_matching_dates() {
        let now = Utc::now();
        let project = Project::new("Beam".into(), String::new(), MaterialType::Steel, now);
        assert_eq!(project.status, ProjectStatus::Draft);
        assert_eq!(project.created_date, now);
        assert_eq!(project.last_modified, now);
        assert!(!project.id.is_empty());
    }

    #[test]
    fn blank_draft_names_are_rejected() {
        assert_eq!(ProjectDraft::new("   ", "d", MaterialType::Other).trimmed_name(), None);
        assert_eq!(
            ProjectDraft::new("  Foo ", "", MaterialType::Other).trimmed_name(),
            Some("Foo".to_string())
        );
    }

    #[test]
    fn material_round_trips_through_option_value() {
        for material in MaterialType::all() {
            assert_eq!(MaterialType::from_value(material.as_str()), Some(material));
        }
        assert_eq!(MaterialType::from_value("Plastic"), None);
    }

    #[test]
    fn serializes_with_camel_case_fields_and_type_key() {
        let project = Project::new("Can".into(), "d".into(), MaterialType::Aluminum, Utc::now());
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["type"], "Aluminum");
        assert_eq!(json["status"], "Draft");
        assert!(json.get("createdDate").is_some());
        assert!(json.get("lastModified").is_some());
    }
}
