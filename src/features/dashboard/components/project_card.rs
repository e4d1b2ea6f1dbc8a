use leptos::prelude::*;
use chrono::{DateTime, Utc};
use crate::core::{Project, ProjectStatus};

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %d, %Y").to_string()
}

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "status-badge status-active",
        ProjectStatus::Draft => "status-badge status-draft",
        ProjectStatus::Completed => "status-badge status-completed",
    }
}

#[component]
pub fn ProjectCard(
    project: Project,
    #[prop(into)] on_edit: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let edit_id = project.id.clone();
    let delete_id = project.id.clone();

    view! {
        <div class="project-card">
            <div class="project-card-header">
                <h3>{project.name.clone()}</h3>
                <span class=status_class(project.status)>{project.status.as_str()}</span>
            </div>
            <p class="project-description">{project.description.clone()}</p>
            <div class="project-meta">
                <span class="material-tag">{project.material.as_str()}</span>
                <span>"Created " {format_date(&project.created_date)}</span>
                <span>"Modified " {format_date(&project.last_modified)}</span>
            </div>
            <div class="project-card-actions">
                <button class="action-btn edit-btn" title="Edit Project" on:click=move |_| on_edit.run(edit_id.clone())>"✎"</button>
                <button class="action-btn delete-btn" title="Delete Project" on:click=move |_| on_delete.run(delete_id.clone())>"🗑"</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn dates_render_month_day_year() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(format_date(&date), "Mar 07, 2024");
    }
}
