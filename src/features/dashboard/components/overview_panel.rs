use leptos::prelude::*;
use crate::core::{DashboardTab, ProjectStatus, ProjectStore};
use super::project_card::format_date;

#[component]
pub fn OverviewPanel(
    store: RwSignal<ProjectStore>,
    #[prop(into)] on_select: Callback<DashboardTab>,
) -> impl IntoView {
    let total = move || store.with(|s| s.len());

    view! {
        <section class="panel overview-panel">
            <header class="panel-header">
                <h1>"Dashboard"</h1>
                <p class="panel-subtitle">"Environmental footprint of your assessments at a glance"</p>
            </header>

            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-label">"Total Projects"</span>
                    <span class="stat-value">{total}</span>
                </div>
                {ProjectStatus::all().into_iter().map(|status| {
                    view! {
                        <div class="stat-card">
                            <span class="stat-label">{status.as_str()}</span>
                            <span class="stat-value">{move || store.with(|s| s.count_by_status(status))}</span>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="recent-projects">
                <div class="recent-header">
                    <h2>"Recent Projects"</h2>
                    <button class="btn-link" on:click=move |_| on_select.run(DashboardTab::Projects)>"View all →"</button>
                </div>
                {move || {
                    let recent = store.with(|s| s.list().iter().take(3).cloned().collect::<Vec<_>>());
                    if recent.is_empty() {
                        view! { <p class="empty-hint">"No projects yet"</p> }.into_any()
                    } else {
                        view! {
                            <ul class="recent-list">
                                {recent.into_iter().map(|project| view! {
                                    <li class="recent-item">
                                        <span class="recent-name">{project.name.clone()}</span>
                                        <span class="recent-material">{project.material.as_str()}</span>
                                        <span class="recent-date">{format_date(&project.last_modified)}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        }.into_any()
                    }
                }}
            </div>
        </section>
    }
}
