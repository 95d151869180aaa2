use crate::message::Message;
use iced::widget::text::Wrapping;
use iced::widget::{button, container, text};
use iced::{Alignment, Background, Color, Length, Shadow, Theme};

/// A single tab in the visit strip, labeled with the visit's raw date
/// string. Pressing it selects the visit at `source_index`.
pub fn visit_tab<'a>(
    label: &'a str,
    source_index: usize,
    is_active: bool,
) -> iced::widget::Button<'a, Message> {
    let content = container(text(label).size(14).wrapping(Wrapping::None))
        .height(Length::Fixed(30.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding([4, 14]);

    button(content)
        .padding(0)
        .on_press(Message::SelectVisit(source_index))
        .style(move |theme, status| tab_style(theme, status, is_active))
}

fn tab_style(
    theme: &Theme,
    status: iced::widget::button::Status,
    is_active: bool,
) -> iced::widget::button::Style {
    let palette = theme.extended_palette();

    let mut background_color = if is_active {
        palette.primary.strong.color
    } else {
        palette.background.strong.color.scale_alpha(0.4)
    };

    match status {
        iced::widget::button::Status::Hovered => {
            background_color = if is_active {
                palette.primary.base.color
            } else {
                palette.background.base.color.scale_alpha(0.8)
            };
        }
        iced::widget::button::Status::Pressed => {
            background_color = if is_active {
                palette.primary.base.color.scale_alpha(0.9)
            } else {
                palette.background.base.color.scale_alpha(0.9)
            };
        }
        iced::widget::button::Status::Disabled => {
            background_color = background_color.scale_alpha(0.5);
        }
        iced::widget::button::Status::Active => {}
    }

    let text_color = if is_active {
        palette.primary.strong.text
    } else {
        palette.background.base.text
    };

    iced::widget::button::Style {
        background: Some(Background::Color(background_color)),
        text_color,
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: iced::border::Radius::new(8.0),
        },
        shadow: Shadow::default(),
    }
}
