use leptos::prelude::*;
use chrono::Utc;
use crate::core::{Project, ProjectDraft, ProjectStore, StoreError};
use crate::features::dashboard::services::{create_project, delete_project, update_project};

/// Project store signal plus the three user intents that mutate it.
#[derive(Clone, Copy)]
pub struct ProjectsHook {
    pub store: RwSignal<ProjectStore>,
    pub create: Callback<ProjectDraft, bool>,
    pub update: Callback<(String, ProjectDraft), bool>,
    pub delete: Callback<String>,
}

// Logs the outcome; rejected actions are otherwise silent
fn report(action: &str, outcome: Result<Project, StoreError>) -> bool {
    match outcome {
        Ok(project) => {
            if let Ok(snapshot) = serde_json::to_string(&project) {
                web_sys::console::log_1(&format!("{}: {}", action, snapshot).into());
            }
            true
        }
        Err(e) => {
            web_sys::console::log_1(&format!("{} ignored: {}", action, e).into());
            false
        }
    }
}

pub fn use_projects() -> ProjectsHook {
    let store = RwSignal::new(ProjectStore::with_sample_data(Utc::now()));

    let create = Callback::new(move |draft: ProjectDraft| {
        report("Create project", create_project(store, draft, Utc::now()))
    });

    let update = Callback::new(move |(project_id, draft): (String, ProjectDraft)| {
        report("Update project", update_project(store, project_id, draft, Utc::now()))
    });

    let delete = Callback::new(move |project_id: String| {
        report("Delete project", delete_project(store, project_id));
    });

    ProjectsHook {
        store,
        create,
        update,
        delete,
    }
}
