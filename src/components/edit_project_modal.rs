use leptos::prelude::*;
use leptos::{ev, html::Dialog};
use crate::components::MaterialSelect;
use crate::core::{MaterialType, Project, ProjectDraft};

#[component]
pub fn EditProjectModal(
    editing: ReadSignal<Option<Project>>,
    set_editing: WriteSignal<Option<Project>>,
    #[prop(into)] on_update: Callback<(String, ProjectDraft), bool>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (material, set_material) = signal(MaterialType::default());

    // Refill the form whenever a different project is picked for editing
    Effect::new(move |_| {
        if let Some(project) = editing.get() {
            set_name.set(project.name);
            set_description.set(project.description);
            set_material.set(project.material);
        }
    });

    let close = move || {
        set_editing.set(None);
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    let save_project = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(project_id) = editing.with_untracked(|p| p.as_ref().map(|p| p.id.clone())) else {
            return;
        };

        let draft = ProjectDraft::new(
            name.get_untracked(),
            description.get_untracked(),
            material.get_untracked(),
        );

        if on_update.run((project_id, draft)) {
            close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h2>"Edit Project"</h2>
                    <button type="button" class="modal-close" on:click=move |_| close()>"×"</button>
                </div>
                <form on:submit=save_project>
                    <div class="form-group">
                        <label for="edit-project-name">"Project Name"</label>
                        <input
                            id="edit-project-name"
                            type="text"
                            placeholder="Project name..."
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="edit-project-description">"Description"</label>
                        <textarea
                            id="edit-project-description"
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label for="edit-project-material">"Material"</label>
                        <MaterialSelect id="edit-project-material" material=material set_material=set_material />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| close()>"Cancel"</button>
                        <button type="submit" class="btn-primary">"Save Changes"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
