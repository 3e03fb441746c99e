use iced::widget::text::Wrapping;
use iced::widget::{button, column, pick_list, row, scrollable, text, Row};
use iced::{Element, Length};

use crate::message::Message;
use crate::model::catalogue::{ALL_GROUP, GROUPS};
use crate::model::MetadataEntry;

pub fn metadata_panel<'a>(
    results: &'a [MetadataEntry],
    notice: Option<&'a str>,
    element_names: &'a [String],
    selected_element: Option<&'a String>,
    study_loaded: bool,
) -> Element<'a, Message> {
    let mut panel = column![group_button_row()].spacing(12);

    if study_loaded {
        panel = panel.push(
            pick_list(element_names, selected_element, Message::ElementPicked)
                .placeholder("Select a metadata element")
                .width(Length::Fill),
        );
    }

    let results_content: Element<'a, Message> = if !study_loaded {
        text("Import a DICOM file to browse its metadata").into()
    } else if let Some(notice) = notice {
        text(notice).into()
    } else {
        let mut lines = column![];
        for entry in results {
            lines = lines.push(text(entry.display_line()).wrapping(Wrapping::Word));
        }
        scrollable(lines.spacing(4)).height(Length::Fill).into()
    };

    panel.push(results_content).into()
}

fn group_button_row() -> Row<'static, Message> {
    let mut buttons = row![].spacing(8);
    for (name, _) in GROUPS {
        buttons = buttons.push(button(text(name).size(14)).on_press(Message::GroupSelected(name)));
    }
    buttons.push(button(text("All Data").size(14)).on_press(Message::GroupSelected(ALL_GROUP)))
}
