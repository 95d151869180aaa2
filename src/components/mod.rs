pub mod field;
pub mod visit_tab;

pub use field::field_block;
pub use visit_tab::visit_tab;
