use leptos::prelude::*;
use crate::core::DashboardTab;
use crate::features::dashboard::{
    use_dashboard_nav, use_projects, ComingSoon, DashboardSidebar, OverviewPanel, ProjectsPanel, SettingsPanel,
};

#[component]
pub fn Dashboard() -> impl IntoView {
    let nav = use_dashboard_nav();
    let projects = use_projects();

    let render_tab = move |tab: DashboardTab| match tab {
        DashboardTab::Overview => view! { <OverviewPanel store=projects.store on_select=nav.select /> }.into_any(),
        DashboardTab::Projects => view! { <ProjectsPanel projects=projects /> }.into_any(),
        DashboardTab::AiAssistant => view! {
            <ComingSoon title="AI Assistant" blurb="Ask questions about your assessments and get reduction suggestions." />
        }.into_any(),
        DashboardTab::Optimizer => view! {
            <ComingSoon title="Optimizer" blurb="Compare production scenarios to find the lowest-impact route." />
        }.into_any(),
        DashboardTab::Reports => view! {
            <ComingSoon title="Reports" blurb="Generate shareable impact reports from finished projects." />
        }.into_any(),
        DashboardTab::Settings => view! { <SettingsPanel /> }.into_any(),
    };

    view! {
        <div class="dashboard-page" class:sidebar-open=move || nav.nav.with(|n| n.sidebar_open())>
            <DashboardSidebar nav=nav.nav on_select=nav.select on_close=nav.close_sidebar />
            <div class="dashboard-main">
                <header class="dashboard-topbar">
                    <button class="menu-btn" title="Menu" on:click=move |_| nav.toggle_sidebar.run(())>"☰"</button>
                    <span class="topbar-title">{move || nav.current.get().as_str()}</span>
                </header>
                {move || render_tab(nav.current.get())}
            </div>
        </div>
    }
}
