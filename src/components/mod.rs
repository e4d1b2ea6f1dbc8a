pub mod edit_project_modal;
pub mod material_select;
pub mod project_modal;

pub use edit_project_modal::EditProjectModal;
pub use material_select::MaterialSelect;
pub use project_modal::ProjectModal;
