//! Tab and section selection for the dashboard and the settings page.

/// Holds the active tag out of a fixed enumerated set.
///
/// `select` always succeeds; there are no guards and no history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabSelector<T> {
    current: T,
}

impl<T: Copy + PartialEq> TabSelector<T> {
    pub fn current(&self) -> T {
        self.current
    }

    pub fn is_active(&self, tag: T) -> bool {
        self.current == tag
    }

    pub fn select(&mut self, tag: T) {
        self.current = tag;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Overview,
    Projects,
    AiAssistant,
    Optimizer,
    Reports,
    Settings,
}

impl DashboardTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Dashboard",
            DashboardTab::Projects => "Projects",
            DashboardTab::AiAssistant => "AI Assistant",
            DashboardTab::Optimizer => "Optimizer",
            DashboardTab::Reports => "Reports",
            DashboardTab::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "▦",
            DashboardTab::Projects => "▤",
            DashboardTab::AiAssistant => "✦",
            DashboardTab::Optimizer => "⚡",
            DashboardTab::Reports => "▥",
            DashboardTab::Settings => "⚙",
        }
    }

    pub fn all() -> Vec<DashboardTab> {
        vec![
            DashboardTab::Overview,
            DashboardTab::Projects,
            DashboardTab::AiAssistant,
            DashboardTab::Optimizer,
            DashboardTab::Reports,
            DashboardTab::Settings,
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsSection {
    #[default]
    Profile,
    Notifications,
    Appearance,
    DataPrivacy,
    Integrations,
}

impl SettingsSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsSection::Profile => "Profile",
            SettingsSection::Notifications => "Notifications",
            SettingsSection::Appearance => "Appearance",
            SettingsSection::DataPrivacy => "Data & Privacy",
            SettingsSection::Integrations => "Integrations",
        }
    }

    pub fn all() -> Vec<SettingsSection> {
        vec![
            SettingsSection::Profile,
            SettingsSection::Notifications,
            SettingsSection::Appearance,
            SettingsSection::DataPrivacy,
            SettingsSection::Integrations,
        ]
    }
}

/// Dashboard navigation: the active tab plus the slide-in sidebar flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardNav {
    tabs: TabSelector<DashboardTab>,
    sidebar_open: bool,
}

impl DashboardNav {
    pub fn current(&self) -> DashboardTab {
        self.tabs.current()
    }

    pub fn is_active(&self, tab: DashboardTab) -> bool {
        self.tabs.is_active(tab)
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Switches tab and closes the sidebar, whatever its previous state.
    pub fn select(&mut self, tab: DashboardTab) {
        self.tabs.select(tab);
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_tab_is_overview_with_sidebar_closed() {
        let nav = DashboardNav::default();
        assert_eq!(nav.current(), DashboardTab::Overview);
        assert!(!nav.sidebar_open());
    }

    #[test]
    fn every_tab_is_reachable_from_every_tab() {
        for from in DashboardTab::all() {
            for to in DashboardTab::all() {
                let mut nav = DashboardNav::default();
                nav.select(from);
                nav.select(to);
                assert_eq!(nav.current(), to);
                assert!(nav.is_active(to));
            }
        }
    }

    #[test]
    fn selecting_closes_sidebar_regardless_of_prior_state() {
        for open_before in [false, true] {
            for next in DashboardTab::all() {
                let mut nav = DashboardNav::default();
                nav.select(DashboardTab::Projects);
                if open_before {
                    nav.toggle_sidebar();
                }
                assert_eq!(nav.sidebar_open(), open_before);
                nav.select(next);
                assert!(!nav.sidebar_open());
            }
        }
    }

    #[test]
    fn reselecting_current_tab_still_closes_sidebar() {
        let mut nav = DashboardNav::default();
        nav.toggle_sidebar();
        nav.select(DashboardTab::Overview);
        assert_eq!(nav.current(), DashboardTab::Overview);
        assert!(!nav.sidebar_open());
    }

    #[test]
    fn sidebar_toggle_and_close() {
        let mut nav = DashboardNav::default();
        nav.toggle_sidebar();
        assert!(nav.sidebar_open());
        nav.close_sidebar();
        assert!(!nav.sidebar_open());
        nav.close_sidebar();
        assert!(!nav.sidebar_open());
    }

    #[test]
    fn settings_sections_select_unconditionally() {
        let mut sections = TabSelector::<SettingsSection>::default();
        assert_eq!(sections.current(), SettingsSection::Profile);
        for section in SettingsSection::all().into_iter().rev() {
            sections.select(section);
            assert_eq!(sections.current(), section);
        }
    }
}
