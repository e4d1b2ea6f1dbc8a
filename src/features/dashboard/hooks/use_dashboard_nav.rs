use leptos::prelude::*;
use crate::core::{DashboardNav, DashboardTab};

#[derive(Clone, Copy)]
pub struct DashboardNavHook {
    pub nav: RwSignal<DashboardNav>,
    /// Active tab alone, so panels are not rebuilt when only the sidebar flag changes.
    pub current: Memo<DashboardTab>,
    pub select: Callback<DashboardTab>,
    pub toggle_sidebar: Callback<()>,
    pub close_sidebar: Callback<()>,
}

pub fn use_dashboard_nav() -> DashboardNavHook {
    let nav = RwSignal::new(DashboardNav::default());

    DashboardNavHook {
        nav,
        current: Memo::new(move |_| nav.with(|n| n.current())),
        select: Callback::new(move |tab: DashboardTab| nav.update(|n| n.select(tab))),
        toggle_sidebar: Callback::new(move |_| nav.update(|n| n.toggle_sidebar())),
        close_sidebar: Callback::new(move |_| nav.update(|n| n.close_sidebar())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::effect::ImmediateEffect;
    use leptos::reactive::owner::Owner;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn sidebar_changes_do_not_rebuild_the_active_panel() {
        let owner = Owner::new();
        owner.set();

        let hook = use_dashboard_nav();
        let builds = Arc::new(AtomicUsize::new(0));
        let panels = Arc::new(std::sync::Mutex::new(Vec::<RwSignal<bool>>::new()));

        // Mirrors the dashboard's panel slot: each run builds a panel owning its own state
        let _slot = ImmediateEffect::new({
            let builds = Arc::clone(&builds);
            let panels = Arc::clone(&panels);
            move || {
                let _tab = hook.current.get();
                builds.fetch_add(1, Ordering::SeqCst);
                panels.lock().unwrap().push(RwSignal::new(false));
            }
        });
        assert_eq!(builds.load(Ordering::SeqCst), 1);

        let live_panel = *panels.lock().unwrap().last().unwrap();
        live_panel.set(true);

        hook.toggle_sidebar.run(());
        assert!(hook.nav.with_untracked(|n| n.sidebar_open()));
        hook.close_sidebar.run(());
        hook.toggle_sidebar.run(());

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        let current_panel = *panels.lock().unwrap().last().unwrap();
        assert!(current_panel.get_untracked());
    }

    #[test]
    fn selecting_a_tab_rebuilds_the_panel_and_closes_the_sidebar() {
        let owner = Owner::new();
        owner.set();

        let hook = use_dashboard_nav();
        let builds = Arc::new(AtomicUsize::new(0));
        let _slot = ImmediateEffect::new({
            let builds = Arc::clone(&builds);
            move || {
                let _tab = hook.current.get();
                builds.fetch_add(1, Ordering::SeqCst);
            }
        });

        hook.toggle_sidebar.run(());
        hook.select.run(DashboardTab::Settings);

        assert_eq!(builds.load(Ordering::SeqCst), 2);
        assert_eq!(hook.current.get_untracked(), DashboardTab::Settings);
        assert!(!hook.nav.with_untracked(|n| n.sidebar_open()));
    }
}
