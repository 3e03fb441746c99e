use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::message::Message;

pub fn anonymize_bar(prefix: &str) -> Element<'_, Message> {
    row![
        text("Anonymization Prefix:"),
        text_input("Placeholder written over sensitive fields", prefix)
            .on_input(Message::PrefixChanged)
            .width(Length::Fixed(260.0)),
        button("Anonymize DICOM File").on_press(Message::AnonymizeRequested),
        button("Import DICOM File").on_press(Message::ImportRequested),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

pub fn search_bar(term: &str) -> Element<'_, Message> {
    row![
        text("Search:"),
        text_input("Name or value substring", term)
            .on_input(Message::SearchChanged)
            .on_submit(Message::SearchRequested)
            .width(Length::Fill),
        button("Search").on_press(Message::SearchRequested),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
