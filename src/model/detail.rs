use super::visits::visits_for_patient;
use super::{PatientRecord, VisitRecord};
use crate::utils::render_markup;
use iced::widget::markdown;

/// One label/value pair with the value already parsed as markup.
#[derive(Debug, Clone)]
pub struct FieldDetail {
    pub label: &'static str,
    pub markup: Vec<markdown::Item>,
}

/// A titled group of fields. Only built when at least one field survives
/// the empty-value filter.
#[derive(Debug, Clone)]
pub struct SectionDetail {
    pub title: &'static str,
    pub fields: Vec<FieldDetail>,
}

/// One entry in the visit tab strip. `source_index` points back into the
/// visit table, since the joined set is a sorted copy.
#[derive(Debug, Clone)]
pub struct VisitTab {
    pub label: String,
    pub source_index: usize,
}

/// Everything the chart panel renders for a selected patient.
#[derive(Debug, Clone)]
pub struct PatientDetail {
    pub name: String,
    pub sections: Vec<SectionDetail>,
    pub tabs: Vec<VisitTab>,
}

/// The fields shown for a selected visit. Empty means the pane renders
/// its placeholder instead.
#[derive(Debug, Clone)]
pub struct VisitDetail {
    pub fields: Vec<FieldDetail>,
}

fn visible_fields(fields: &[(&'static str, &str)]) -> Vec<FieldDetail> {
    fields
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(label, value)| FieldDetail {
            label,
            markup: render_markup(value),
        })
        .collect()
}

impl SectionDetail {
    fn build(title: &'static str, fields: &[(&'static str, &str)]) -> Option<Self> {
        let fields = visible_fields(fields);
        if fields.is_empty() {
            None
        } else {
            Some(Self { title, fields })
        }
    }
}

impl PatientDetail {
    pub fn build(patient: &PatientRecord, visits: &[VisitRecord]) -> Self {
        let sections = [
            SectionDetail::build("General Information", &patient.general_fields()),
            SectionDetail::build("Emergency Contact", &patient.emergency_fields()),
            SectionDetail::build("Pre-existing Conditions", &patient.condition_fields()),
        ]
        .into_iter()
        .flatten()
        .collect();

        let tabs = visits_for_patient(visits, &patient.patient_id)
            .into_iter()
            .map(|(source_index, visit)| VisitTab {
                label: visit.visit_date.clone(),
                source_index,
            })
            .collect();

        Self {
            name: patient.patient_name.clone(),
            sections,
            tabs,
        }
    }
}

impl VisitDetail {
    pub fn build(visit: &VisitRecord) -> Self {
        Self {
            fields: visible_fields(&visit.detail_fields()),
        }
    }
}
