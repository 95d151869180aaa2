pub mod patient_panel;
pub mod sidebar;
pub mod visit_panel;

pub use patient_panel::patient_panel;
pub use sidebar::sidebar_panel;
pub use visit_panel::visit_panel;
