use chrono::{DateTime, Duration, Utc};
use crate::core::error::StoreError;
use crate::core::models::{MaterialType, Project, ProjectDraft, ProjectStatus};

/// Ordered, in-memory project collection. Newest projects come first.
///
/// Nothing here survives a reload; the dashboard holds one of these in a
/// signal and every view reads a snapshot of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Store pre-filled with the demo projects shown on first load.
    pub fn with_sample_data(now: DateTime<Utc>) -> Self {
        let sample = |id: &str, name: &str, description: &str, status, material, age_days: i64, edited_days: i64| Project {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            created_date: now - Duration::days(age_days),
            last_modified: now - Duration::days(edited_days),
            status,
            material,
        };

        Self {
            projects: vec![
                sample(
                    "sample-1",
                    "Steel Beam Production",
                    "Cradle-to-gate assessment of hot-rolled structural beams",
                    ProjectStatus::Active,
                    MaterialType::Steel,
                    12,
                    1,
                ),
                sample(
                    "sample-2",
                    "Aluminum Can Recycling",
                    "Closed-loop recycling scenario for beverage cans",
                    ProjectStatus::Draft,
                    MaterialType::Aluminum,
                    30,
                    6,
                ),
                sample(
                    "sample-3",
                    "Copper Wiring Harness",
                    "End-of-life recovery for automotive wiring",
                    ProjectStatus::Completed,
                    MaterialType::Copper,
                    64,
                    21,
                ),
            ],
        }
    }

    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn count_by_status(&self, status: ProjectStatus) -> usize {
        self.projects.iter().filter(|p| p.status == status).count()
    }

    /// Prepends a new `Draft` project built from `draft`.
    pub fn create(&mut self, draft: ProjectDraft, now: DateTime<Utc>) -> Result<Project, StoreError> {
        let name = draft.trimmed_name().ok_or(StoreError::BlankName)?;
        let mut project = Project::new(name, draft.description, draft.material, now);

        // v4 collisions are not expected, but the collection must never hold two equal ids
        while self.get(&project.id).is_some() {
            project.id = uuid::Uuid::new_v4().to_string();
        }

        self.projects.insert(0, project.clone());
        Ok(project)
    }

    /// Replaces name, description and material of the matching project.
    /// `id`, `created_date` and `status` are left as they were.
    pub fn update(&mut self, id: &str, draft: ProjectDraft, now: DateTime<Utc>) -> Result<Project, StoreError> {
        let name = draft.trimmed_name().ok_or(StoreError::BlankName)?;
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        project.apply_draft(name, draft.description, draft.material, now);
        Ok(project.clone())
    }

    pub fn delete(&mut self, id: &str) -> Result<Project, StoreError> {
        let index = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(self.projects.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn draft(name: &str, material: MaterialType) -> ProjectDraft {
        ProjectDraft::new(name, "d", material)
    }

    fn ids(store: &ProjectStore) -> Vec<String> {
        store.list().iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn create_prepends_a_draft_stamped_now() {
        let now = Utc::now();
        let mut store = ProjectStore::with_sample_data(now);
        let before = store.len();

        store.create(draft("Foo", MaterialType::Steel), now).unwrap();

        let first = &store.list()[0];
        assert_eq!(store.len(), before + 1);
        assert_eq!(first.name, "Foo");
        assert_eq!(first.status, ProjectStatus::Draft);
        assert_eq!(first.material, MaterialType::Steel);
        assert_eq!(first.created_date, now);
        assert_eq!(first.last_modified, now);
        assert_eq!(first.created_date.date_naive(), now.date_naive());
    }

    #[test]
    fn create_with_blank_name_leaves_collection_unchanged() {
        let now = Utc::now();
        let mut store = ProjectStore::with_sample_data(now);
        let before = store.clone();

        assert_eq!(store.create(draft("", MaterialType::Other), now), Err(StoreError::BlankName));
        assert_eq!(store.create(draft("   ", MaterialType::Other), now), Err(StoreError::BlankName));
        assert_eq!(store, before);
    }

    #[test]
    fn description_is_kept_as_typed() {
        let now = Utc::now();
        let mut store = ProjectStore::default();
        let created = store
            .create(ProjectDraft::new(" Foo ", "  indented\n", MaterialType::Steel), now)
            .unwrap();
        assert_eq!(created.name, "Foo");
        assert_eq!(created.description, "  indented\n");

        let updated = store
            .update(&created.id, ProjectDraft::new("Foo", " trailing ", MaterialType::Steel), now)
            .unwrap();
        assert_eq!(updated.description, " trailing ");
    }

    #[test]
    fn create_allows_duplicate_names() {
        let now = Utc::now();
        let mut store = ProjectStore::default();
        store.create(draft("Same", MaterialType::Copper), now).unwrap();
        store.create(draft("Same", MaterialType::Copper), now).unwrap();
        assert_eq!(store.len(), 2);
        assert_ne!(store.list()[0].id, store.list()[1].id);
    }

    #[test]
    fn update_touches_only_editable_fields() {
        let created = Utc::now() - Duration::days(3);
        let mut store = ProjectStore::default();
        let original = store.create(draft("Foo", MaterialType::Steel), created).unwrap();
        let later = Utc::now();

        store
            .update(&original.id, ProjectDraft::new("Bar", "", MaterialType::Aluminum), later)
            .unwrap();

        let updated = store.get(&original.id).unwrap();
        assert_eq!(updated.name, "Bar");
        assert_eq!(updated.description, "");
        assert_eq!(updated.material, MaterialType::Aluminum);
        assert_eq!(updated.last_modified, later);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_date, original.created_date);
        assert_eq!(updated.status, original.status);
    }

    #[test]
    fn update_leaves_other_projects_alone() {
        let now = Utc::now();
        let mut store = ProjectStore::with_sample_data(now);
        let untouched: Vec<Project> = store.list()[1..].to_vec();

        store.update("sample-1", draft("Renamed", MaterialType::Other), now).unwrap();

        assert_eq!(&store.list()[1..], untouched.as_slice());
    }

    #[test]
    fn update_missing_id_or_blank_name_is_a_no_op() {
        let now = Utc::now();
        let mut store = ProjectStore::with_sample_data(now);
        let before = store.clone();

        assert_eq!(
            store.update("missing", draft("Bar", MaterialType::Steel), now),
            Err(StoreError::NotFound("missing".to_string()))
        );
        assert_eq!(store.update("sample-1", draft("  ", MaterialType::Steel), now), Err(StoreError::BlankName));
        assert_eq!(store, before);
    }

    #[test]
    fn delete_removes_exactly_the_match_and_keeps_order() {
        let now = Utc::now();
        let mut store = ProjectStore::with_sample_data(now);

        let removed = store.delete("sample-2").unwrap();

        assert_eq!(removed.id, "sample-2");
        assert_eq!(ids(&store), vec!["sample-1", "sample-3"]);
    }

    #[test]
    fn delete_missing_id_is_a_no_op() {
        let now = Utc::now();
        let mut store = ProjectStore::with_sample_data(now);
        let before = store.clone();

        assert!(store.delete("missing").is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn ids_stay_distinct_across_mixed_operations() {
        let now = Utc::now();
        let mut store = ProjectStore::with_sample_data(now);

        for i in 0..20 {
            let created = store.create(draft(&format!("P{i}"), MaterialType::Other), now).unwrap();
            if i % 3 == 0 {
                store.delete(&created.id).unwrap();
            } else if i % 3 == 1 {
                store.update(&created.id, draft("Edited", MaterialType::Copper), now).unwrap();
            }
        }

        let unique: HashSet<String> = ids(&store).into_iter().collect();
        assert_eq!(unique.len(), store.len());
    }

    #[test]
    fn empty_store_lists_nothing() {
        let mut store = ProjectStore::default();
        assert!(store.is_empty());
        let only = store.create(draft("Solo", MaterialType::Steel), Utc::now()).unwrap();
        store.delete(&only.id).unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn status_counts_cover_every_project() {
        let store = ProjectStore::with_sample_data(Utc::now());
        let total: usize = ProjectStatus::all().into_iter().map(|s| store.count_by_status(s)).sum();
        assert_eq!(total, store.len());
        assert_eq!(store.count_by_status(ProjectStatus::Active), 1);
    }
}
