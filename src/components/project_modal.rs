use leptos::prelude::*;
use leptos::{ev, html::Dialog};
use crate::components::MaterialSelect;
use crate::core::{MaterialType, ProjectDraft};

#[component]
pub fn ProjectModal(
    #[prop(into)] on_create: Callback<ProjectDraft, bool>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (material, set_material) = signal(MaterialType::default());

    let reset_form = move || {
        set_name.set(String::new());
        set_description.set(String::new());
        set_material.set(MaterialType::default());
    };

    let close_modal = move |_| {
        reset_form();
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let draft = ProjectDraft::new(
            name.get_untracked(),
            description.get_untracked(),
            material.get_untracked(),
        );

        // A rejected draft keeps the dialog open with its contents
        if on_create.run(draft) {
            reset_form();
            if let Some(dialog) = dialog_ref.get() {
                dialog.close();
            }
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="modal project-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h2>"New Project"</h2>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label for="project-name">"Project Name"</label>
                        <input
                            id="project-name"
                            type="text"
                            placeholder="e.g. Steel beam production"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="project-description">"Description"</label>
                        <textarea
                            id="project-description"
                            rows="3"
                            placeholder="What does this assessment cover?"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label for="project-material">"Material"</label>
                        <MaterialSelect id="project-material" material=material set_material=set_material />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"Cancel"</button>
                        <button type="submit" class="btn-primary">"Create Project"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
