use leptos::prelude::*;
use leptos::html::Dialog;
use crate::components::{EditProjectModal, ProjectModal};
use crate::core::Project;
use crate::features::dashboard::ProjectsHook;
use super::project_card::ProjectCard;

#[component]
pub fn ProjectsPanel(projects: ProjectsHook) -> impl IntoView {
    let create_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let edit_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let (editing, set_editing) = signal::<Option<Project>>(None);

    let open_create = move |_| {
        if let Some(dialog) = create_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };

    let open_edit = Callback::new(move |project_id: String| {
        let project = projects.store.with_untracked(|s| s.get(&project_id).cloned());
        if let Some(project) = project {
            set_editing.set(Some(project));
            if let Some(dialog) = edit_dialog_ref.get() {
                let _ = dialog.show_modal();
            }
        }
    });

    view! {
        <section class="panel projects-panel">
            <header class="panel-header projects-header">
                <div>
                    <h1>"Projects"</h1>
                    <p class="panel-subtitle">"Life cycle assessments you are working on"</p>
                </div>
                <button class="btn-primary" on:click=open_create>"+ New Project"</button>
            </header>

            {move || {
                if projects.store.with(|s| s.is_empty()) {
                    view! {
                        <div class="empty-state">
                            <div class="empty-icon">"▤"</div>
                            <h3>"No projects yet"</h3>
                            <p>"Create your first assessment to start tracking environmental impact."</p>
                            <button class="btn-primary" on:click=open_create>"Create Project"</button>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="projects-grid">
                            <For
                                each=move || projects.store.with(|s| s.list().to_vec())
                                key=|project| (project.id.clone(), project.last_modified)
                                let:project
                            >
                                <ProjectCard project=project on_edit=open_edit on_delete=projects.delete />
                            </For>
                        </div>
                    }.into_any()
                }
            }}

            <ProjectModal on_create=projects.create dialog_ref=create_dialog_ref />
            <EditProjectModal
                editing=editing
                set_editing=set_editing
                on_update=projects.update
                dialog_ref=edit_dialog_ref
            />
        </section>
    }
}
