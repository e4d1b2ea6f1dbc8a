use leptos::prelude::*;
use chrono::{DateTime, Utc};
use crate::core::{Project, ProjectDraft, ProjectStore, StoreError};

fn ensure_exists(store: RwSignal<ProjectStore>, project_id: String) -> Result<(), StoreError> {
    match store.try_with_untracked(|projects| projects.get(&project_id).is_some()) {
        Some(true) => Ok(()),
        Some(false) => Err(StoreError::NotFound(project_id)),
        None => Err(StoreError::Unavailable),
    }
}

// Create a project and prepend it to the store.
// Rejected drafts are checked before touching the signal so nothing re-renders.
pub fn create_project(
    store: RwSignal<ProjectStore>,
    draft: ProjectDraft,
    now: DateTime<Utc>,
) -> Result<Project, StoreError> {
    if draft.trimmed_name().is_none() {
        return Err(StoreError::BlankName);
    }

    store
        .try_update(|projects| projects.create(draft, now))
        .unwrap_or(Err(StoreError::Unavailable))
}

// Update name, description and material of an existing project
pub fn update_project(
    store: RwSignal<ProjectStore>,
    project_id: String,
    draft: ProjectDraft,
    now: DateTime<Utc>,
) -> Result<Project, StoreError> {
    if draft.trimmed_name().is_none() {
        return Err(StoreError::BlankName);
    }
    ensure_exists(store, project_id.clone())?;

    store
        .try_update(|projects| projects.update(&project_id, draft, now))
        .unwrap_or(Err(StoreError::Unavailable))
}

// Delete a project by id
pub fn delete_project(store: RwSignal<ProjectStore>, project_id: String) -> Result<Project, StoreError> {
    ensure_exists(store, project_id.clone())?;

    store
        .try_update(|projects| projects.delete(&project_id))
        .unwrap_or(Err(StoreError::Unavailable))
}
