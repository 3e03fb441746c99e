use iced::widget::{column, slider, text, Image};
use iced::{Alignment, Element, Length};

use crate::components::segmented_toggle;
use crate::message::Message;
use crate::model::{FramePlayback, LoadedStudy};

pub fn image_panel<'a>(
    study: Option<&'a LoadedStudy>,
    playback: Option<&FramePlayback>,
) -> Element<'a, Message> {
    let Some(study) = study else {
        return text("Import a DICOM file to preview its image").into();
    };

    match playback {
        Some(playback) => multi_frame_panel(study, playback),
        None => single_frame_panel(study),
    }
}

fn single_frame_panel<'a>(study: &'a LoadedStudy) -> Element<'a, Message> {
    match study.frames.first() {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => text("No frame preview available").into(),
    }
}

fn multi_frame_panel<'a>(study: &'a LoadedStudy, playback: &FramePlayback) -> Element<'a, Message> {
    let current = playback.frame_index();
    let frame_image: Element<'a, Message> = match study.frames.get(current) {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => text("Frame unavailable").into(),
    };

    let last_frame = playback.frame_count().saturating_sub(1) as u32;
    let controls = column![
        text(format!(
            "Frame {}/{}",
            current + 1,
            playback.frame_count()
        ))
        .size(14),
        slider(0..=last_frame, current as u32, Message::FrameSelected),
        segmented_toggle("Play", "Pause", playback.is_playing(), Message::PlaybackToggled),
    ]
    .spacing(8)
    .width(Length::Fill);

    column![frame_image, controls]
        .spacing(12)
        .align_x(Alignment::Center)
        .into()
}
