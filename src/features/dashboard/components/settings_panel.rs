use leptos::prelude::*;
use crate::core::{BackupFrequency, RetentionPeriod, SettingsSection, SettingsState};

#[component]
fn Toggle(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="toggle"
            class:on=move || checked.get()
            role="switch"
            aria-checked=move || checked.get().to_string()
            on:click=move |_| on_toggle.run(())
        >
            <span class="toggle-knob"></span>
        </button>
    }
}

#[component]
fn SettingRow(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="setting-row">
            <div class="setting-text">
                <h4>{title}</h4>
                <p>{description}</p>
            </div>
            {children()}
        </div>
    }
}

fn profile_section() -> AnyView {
    view! {
        <div class="settings-section">
            <h2>"Profile"</h2>
            <div class="form-group">
                <label>"Full Name"</label>
                <input type="text" value="Alex Morgan" />
            </div>
            <div class="form-group">
                <label>"Email"</label>
                <input type="email" value="alex@lca-studio.dev" />
            </div>
            <div class="form-group">
                <label>"Organization"</label>
                <input type="text" value="Green Metals Ltd." />
            </div>
        </div>
    }
    .into_any()
}

fn notifications_section(settings: RwSignal<SettingsState>) -> AnyView {
    let rows = settings.with_untracked(|s| s.notifications.clone());

    view! {
        <div class="settings-section">
            <h2>"Notifications"</h2>
            {rows.into_iter().map(|setting| {
                let id = setting.id.clone();
                let enabled = Signal::derive({
                    let id = id.clone();
                    move || settings.with(|s| s.notifications.iter().any(|n| n.id == id && n.enabled))
                });
                let on_toggle = Callback::new(move |_| {
                    settings.update(|s| {
                        s.toggle_notification(&id);
                    });
                });
                view! {
                    <SettingRow title=setting.title description=setting.description>
                        <Toggle checked=enabled on_toggle=on_toggle />
                    </SettingRow>
                }
            }).collect_view()}
        </div>
    }
    .into_any()
}

fn appearance_section(settings: RwSignal<SettingsState>) -> AnyView {
    view! {
        <div class="settings-section">
            <h2>"Appearance"</h2>
            <SettingRow title="Dark Mode" description="Use a dark color theme across the dashboard">
                <Toggle
                    checked=Signal::derive(move || settings.with(|s| s.dark_mode))
                    on_toggle=Callback::new(move |_| settings.update(|s| s.toggle_dark_mode()))
                />
            </SettingRow>
        </div>
    }
    .into_any()
}

fn data_section(settings: RwSignal<SettingsState>) -> AnyView {
    view! {
        <div class="settings-section">
            <h2>"Data & Privacy"</h2>
            <SettingRow title="Auto-save" description="Save assessment changes as you work">
                <Toggle
                    checked=Signal::derive(move || settings.with(|s| s.auto_save))
                    on_toggle=Callback::new(move |_| settings.update(|s| s.toggle_auto_save()))
                />
            </SettingRow>
            <div class="form-group">
                <label for="retention-period">"Data Retention"</label>
                <select
                    id="retention-period"
                    on:change=move |ev| {
                        if let Some(period) = RetentionPeriod::from_value(&event_target_value(&ev)) {
                            settings.update(|s| s.set_retention(period));
                        }
                    }
                >
                    {RetentionPeriod::all().into_iter().map(|period| view! {
                        <option value=period.value() selected=move || settings.with(|s| s.retention == period)>
                            {period.as_str()}
                        </option>
                    }).collect_view()}
                </select>
            </div>
            <div class="form-group">
                <label for="backup-frequency">"Backup Frequency"</label>
                <select
                    id="backup-frequency"
                    on:change=move |ev| {
                        if let Some(frequency) = BackupFrequency::from_value(&event_target_value(&ev)) {
                            settings.update(|s| s.set_backup_frequency(frequency));
                        }
                    }
                >
                    {BackupFrequency::all().into_iter().map(|frequency| view! {
                        <option value=frequency.value() selected=move || settings.with(|s| s.backup_frequency == frequency)>
                            {frequency.as_str()}
                        </option>
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
    .into_any()
}

fn integrations_section(settings: RwSignal<SettingsState>) -> AnyView {
    view! {
        <div class="settings-section">
            <h2>"Integrations"</h2>
            <SettingRow title="API Access" description="Allow external tools to read assessment results">
                <Toggle
                    checked=Signal::derive(move || settings.with(|s| s.api_usage))
                    on_toggle=Callback::new(move |_| settings.update(|s| s.toggle_api_usage()))
                />
            </SettingRow>
        </div>
    }
    .into_any()
}

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let settings = RwSignal::new(SettingsState::default());

    // Nothing is persisted; the button only records what would have been saved
    let save_all = move |_| {
        let summary = settings.with_untracked(|s| {
            format!(
                "dark_mode={} auto_save={} api_usage={} retention={} backup={}",
                s.dark_mode,
                s.auto_save,
                s.api_usage,
                s.retention.as_str(),
                s.backup_frequency.as_str()
            )
        });
        web_sys::console::log_1(&format!("Settings not persisted: {}", summary).into());
    };

    view! {
        <section class="panel settings-panel">
            <header class="panel-header">
                <h1>"Settings"</h1>
            </header>
            <div class="settings-layout">
                <nav class="settings-nav">
                    {SettingsSection::all().into_iter().map(|section| view! {
                        <button
                            class="settings-nav-item"
                            class:active=move || settings.with(|s| s.section.is_active(section))
                            on:click=move |_| settings.update(|s| s.select_section(section))
                        >
                            {section.as_str()}
                        </button>
                    }).collect_view()}
                </nav>
                <div class="settings-content">
                    {move || match settings.with(|s| s.section.current()) {
                        SettingsSection::Profile => profile_section(),
                        SettingsSection::Notifications => notifications_section(settings),
                        SettingsSection::Appearance => appearance_section(settings),
                        SettingsSection::DataPrivacy => data_section(settings),
                        SettingsSection::Integrations => integrations_section(settings),
                    }}
                    <div class="settings-actions">
                        <button class="btn-primary" on:click=save_all>"Save All Changes"</button>
                    </div>
                </div>
            </div>
        </section>
    }
}
