use crate::components::field_block;
use crate::message::Message;
use crate::model::VisitDetail;
use iced::font;
use iced::widget::{text, Column};
use iced::{Element, Font};

pub fn visit_panel(detail: Option<&VisitDetail>) -> Element<'_, Message> {
    match detail {
        Some(detail) if detail.fields.is_empty() => {
            text("No details available for this visit.")
                .font(Font {
                    style: font::Style::Italic,
                    ..Font::DEFAULT
                })
                .into()
        }
        Some(detail) => detail
            .fields
            .iter()
            .fold(Column::new(), |column, field| {
                column.push(field_block(field))
            })
            .spacing(10)
            .into(),
        None => text("Select a visit to view its details").into(),
    }
}
