use leptos::prelude::*;
use crate::core::MaterialType;

#[component]
pub fn MaterialSelect(
    #[prop(into)] id: String,
    material: ReadSignal<MaterialType>,
    set_material: WriteSignal<MaterialType>,
) -> impl IntoView {
    view! {
        <select
            id=id
            on:change=move |ev| {
                if let Some(selected) = MaterialType::from_value(&event_target_value(&ev)) {
                    set_material.set(selected);
                }
            }
        >
            {MaterialType::all().into_iter().map(|option| {
                view! {
                    <option value=option.as_str() selected=move || material.get() == option>
                        {option.as_str()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
