use iced::border::{Border, Radius};
use iced::widget::text::Wrapping;
use iced::widget::{button, container, row, text, Container};
use iced::{Alignment, Background, Color, Length, Shadow, Theme};

use crate::message::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentPosition {
    Left,
    Right,
}

/// Two-segment toggle. The active segment is highlighted and inert; pressing
/// the other one emits `on_switch`.
pub fn segmented_toggle(
    left_label: &'static str,
    right_label: &'static str,
    left_active: bool,
    on_switch: Message,
) -> Container<'static, Message> {
    let toggle_row = row![
        segment(
            left_label,
            left_active,
            (!left_active).then(|| on_switch.clone()),
            SegmentPosition::Left,
        )
        .width(Length::FillPortion(1)),
        segment(
            right_label,
            !left_active,
            left_active.then_some(on_switch),
            SegmentPosition::Right,
        )
        .width(Length::FillPortion(1)),
    ]
    .spacing(0);

    container(toggle_row)
        .padding(3)
        .width(Length::Fill)
        .style(segmented_container_style)
}

fn segment(
    label: &'static str,
    is_active: bool,
    on_press: Option<Message>,
    position: SegmentPosition,
) -> iced::widget::Button<'static, Message> {
    let content = container(text(label).size(14).wrapping(Wrapping::None))
        .width(Length::Fill)
        .height(Length::Fixed(32.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding([6, 16]);

    let mut segment = button(content)
        .padding(0)
        .style(move |theme, status| segmented_button_style(theme, status, is_active, position));
    if let Some(message) = on_press {
        segment = segment.on_press(message);
    }
    segment
}

fn segmented_container_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: Border {
            color: palette.background.strong.color.scale_alpha(0.6),
            width: 1.0,
            radius: Radius::new(999.0),
        },
        ..Default::default()
    }
}

fn segmented_button_style(
    theme: &Theme,
    status: iced::widget::button::Status,
    is_active: bool,
    position: SegmentPosition,
) -> iced::widget::button::Style {
    let palette = theme.extended_palette();

    let background_color = match (is_active, status) {
        (true, _) => palette.primary.strong.color,
        (false, iced::widget::button::Status::Hovered) => {
            palette.background.base.color.scale_alpha(0.8)
        }
        (false, iced::widget::button::Status::Pressed) => {
            palette.background.base.color.scale_alpha(0.9)
        }
        (false, _) => palette.background.strong.color.scale_alpha(0.4),
    };

    let text_color = if is_active {
        palette.primary.strong.text
    } else {
        palette.background.base.text
    };

    let radius = match position {
        SegmentPosition::Left => Radius {
            top_left: 999.0,
            top_right: 10.0,
            bottom_right: 10.0,
            bottom_left: 999.0,
        },
        SegmentPosition::Right => Radius {
            top_left: 10.0,
            top_right: 999.0,
            bottom_right: 999.0,
            bottom_left: 10.0,
        },
    };

    iced::widget::button::Style {
        background: Some(Background::Color(background_color)),
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius,
        },
        shadow: Shadow::default(),
    }
}
