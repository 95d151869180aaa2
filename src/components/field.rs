use crate::message::Message;
use crate::model::FieldDetail;
use crate::utils::markdown_style;
use iced::widget::{column, markdown, text, Column};
use iced::Theme;

/// A field label with its markup-rendered value underneath.
pub fn field_block(field: &FieldDetail) -> Column<'_, Message> {
    let label = text(field.label).size(13).style(|theme: &Theme| {
        iced::widget::text::Style {
            color: Some(theme.extended_palette().background.base.text.scale_alpha(0.7)),
        }
    });

    let value = markdown::view(&field.markup, markdown::Settings::default(), markdown_style())
        .map(Message::LinkClicked);

    column![label, value].spacing(2)
}
