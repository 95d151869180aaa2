use crate::components::{field_block, visit_tab};
use crate::message::Message;
use crate::model::{PatientDetail, SectionDetail, VisitDetail};
use crate::views::visit_panel;
use iced::widget::{column, text, Column, Row};
use iced::Element;

/// The chart for the selected patient: name, the visible info sections,
/// and the visit tab strip with the selected visit's pane underneath.
pub fn patient_panel<'a>(
    detail: Option<&'a PatientDetail>,
    visit: Option<&'a VisitDetail>,
    selected_visit: Option<usize>,
    patients_loaded: bool,
) -> Element<'a, Message> {
    let Some(detail) = detail else {
        return if patients_loaded {
            text("Select a patient from the roster to view their chart").into()
        } else {
            text("No patient records loaded").into()
        };
    };

    let mut chart = column![text(&detail.name).size(24)];

    for section in &detail.sections {
        chart = chart.push(section_block(section));
    }

    if !detail.tabs.is_empty() {
        let tabs = detail.tabs.iter().fold(Row::new(), |tabs, tab| {
            tabs.push(visit_tab(
                &tab.label,
                tab.source_index,
                selected_visit == Some(tab.source_index),
            ))
        });

        chart = chart.push(
            column![text("Visits").size(18), tabs.spacing(6), visit_panel(visit)].spacing(10),
        );
    }

    chart.spacing(16).into()
}

fn section_block<'a>(section: &'a SectionDetail) -> Column<'a, Message> {
    section
        .fields
        .iter()
        .fold(column![text(section.title).size(18)], |column, field| {
            column.push(field_block(field))
        })
        .spacing(8)
}
