use leptos::prelude::*;
use crate::pages::{Dashboard, Landing};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Landing,
    Dashboard,
}

#[component]
pub fn App() -> impl IntoView {
    let (current_view, set_current_view) = signal(AppView::Landing);

    provide_context(set_current_view);

    view! {
        <div class="app">
            {move || match current_view.get() {
                AppView::Landing => view! { <Landing /> }.into_any(),
                AppView::Dashboard => view! { <Dashboard /> }.into_any(),
            }}
        </div>
    }
}
