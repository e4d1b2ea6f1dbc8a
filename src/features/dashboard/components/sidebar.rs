use leptos::prelude::*;
use crate::app::AppView;
use crate::core::{DashboardNav, DashboardTab};

#[component]
pub fn DashboardSidebar(
    nav: RwSignal<DashboardNav>,
    #[prop(into)] on_select: Callback<DashboardTab>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");

    view! {
        <div
            class="sidebar-backdrop"
            class:visible=move || nav.with(|n| n.sidebar_open())
            on:click=move |_| on_close.run(())
        ></div>
        <aside class="dashboard-sidebar" class:open=move || nav.with(|n| n.sidebar_open())>
            <div class="sidebar-brand">
                <span class="brand-mark">"◎"</span>
                <span class="brand-name">"LCA Studio"</span>
                <button class="sidebar-close" title="Close menu" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            <nav class="sidebar-nav">
                {DashboardTab::all().into_iter().map(|tab| {
                    view! {
                        <button
                            class="sidebar-item"
                            class:active=move || nav.with(|n| n.is_active(tab))
                            on:click=move |_| on_select.run(tab)
                        >
                            <span class="sidebar-icon">{tab.icon()}</span>
                            <span>{tab.as_str()}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>
            <button class="sidebar-item back-to-site" on:click=move |_| navigate.set(AppView::Landing)>
                "← Back to site"
            </button>
        </aside>
    }
}
