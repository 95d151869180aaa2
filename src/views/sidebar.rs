use crate::message::Message;
use crate::model::PatientRecord;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, text, Column};
use iced::Length;

/// The patient roster. One entry per record with both an id and a name,
/// in table order; the selected entry is marked with an arrow.
pub fn sidebar_panel<'a>(
    patients: &'a [PatientRecord],
    selected_patient: Option<&str>,
) -> Column<'a, Message> {
    let root = column![text("Patients").size(20)];

    if patients.is_empty() {
        return root.push(text("No patients loaded")).spacing(6);
    }

    patients
        .iter()
        .filter(|patient| patient.is_listable())
        .fold(root, |column, patient| {
            let is_selected = selected_patient == Some(patient.patient_id.as_str());
            let button_label = if is_selected {
                format!("▶ {}", patient.patient_name)
            } else {
                patient.patient_name.clone()
            };

            column.push(
                button(
                    text(button_label)
                        .wrapping(Wrapping::Word)
                        .width(Length::Fill),
                )
                .on_press(Message::SelectPatient(patient.patient_id.clone())),
            )
        })
        .spacing(6)
}
