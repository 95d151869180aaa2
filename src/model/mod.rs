pub mod detail;
pub mod loader;
pub mod record;
pub mod visits;

pub use detail::{FieldDetail, PatientDetail, SectionDetail, VisitDetail, VisitTab};
pub use record::{PatientRecord, VisitRecord};
