use iced::widget::text::Wrapping;
use iced::widget::{column, container, row, text};
use iced::{application, Alignment, Element, Length, Subscription, Task, Theme};
use rfd::AsyncFileDialog;
use std::path::PathBuf;

use crate::message::Message;
use crate::model::anonymizer::anonymize;
use crate::model::loader::load_study;
use crate::model::playback::{FramePlayback, FRAME_INTERVAL};
use crate::model::{query, LoadedStudy, MetadataEntry};
use crate::views::{anonymize_bar, image_panel, metadata_panel, search_bar};

const APP_TITLE: &str = "Dicomveil";

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    application(APP_TITLE, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .run()
}

#[derive(Default)]
pub struct App {
    study: Option<LoadedStudy>,
    playback: Option<FramePlayback>,
    prefix_input: String,
    search_input: String,
    selected_element: Option<String>,
    results: Vec<MetadataEntry>,
    /// Shown in the metadata panel instead of (empty) results.
    notice: Option<String>,
    /// One-line outcome of the last user-triggered action.
    status: Option<String>,
}

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ImportRequested => Task::perform(
                async {
                    AsyncFileDialog::new()
                        .add_filter("DICOM files", &["dcm"])
                        .pick_file()
                        .await
                        .map(|handle| load_study(handle.path().to_path_buf()))
                },
                Message::StudyLoaded,
            ),
            Message::StudyLoaded(None) => {
                self.status = Some("No file selected.".to_owned());
                Task::none()
            }
            Message::StudyLoaded(Some(Ok(study))) => {
                self.playback = study
                    .is_multi_frame()
                    .then(|| FramePlayback::new(study.frame_count));
                self.results.clear();
                self.notice = None;
                self.selected_element = None;
                self.status = Some(format!("Loaded DICOM file: {}", study.file_path.display()));
                self.study = Some(study);
                Task::none()
            }
            Message::StudyLoaded(Some(Err(message))) => {
                // The previously loaded study, if any, stays untouched.
                self.status = Some(message);
                Task::none()
            }
            Message::PrefixChanged(prefix) => {
                self.prefix_input = prefix;
                Task::none()
            }
            Message::AnonymizeRequested => self.anonymize_and_pick_target(),
            Message::SavePathPicked(None) => {
                self.status = Some("File was not saved.".to_owned());
                Task::none()
            }
            Message::SavePathPicked(Some(path)) => {
                self.save_anonymized(path);
                Task::none()
            }
            Message::SearchChanged(term) => {
                self.search_input = term;
                Task::none()
            }
            Message::SearchRequested => {
                if let Some(study) = &self.study {
                    let entries = query::search(&study.dataset, &self.search_input);
                    self.notice = entries.is_empty().then(|| "No matches found.".to_owned());
                    self.results = entries;
                    self.selected_element = None;
                } else {
                    self.status = Some("Load a DICOM file first.".to_owned());
                }
                Task::none()
            }
            Message::GroupSelected(group) => {
                if let Some(study) = &self.study {
                    match query::by_group(&study.dataset, group) {
                        Some(entries) => {
                            self.results = entries;
                            self.notice = None;
                        }
                        None => {
                            self.results.clear();
                            self.notice =
                                Some("No metadata available for this group.".to_owned());
                        }
                    }
                    self.selected_element = None;
                } else {
                    self.status = Some("Load a DICOM file first.".to_owned());
                }
                Task::none()
            }
            Message::ElementPicked(name) => {
                if let Some(study) = &self.study {
                    self.results = query::by_name(&study.dataset, &name).into_iter().collect();
                    self.notice = None;
                    self.selected_element = Some(name);
                }
                Task::none()
            }
            Message::FrameSelected(index) => {
                if let Some(playback) = &mut self.playback {
                    playback.set_frame(index as usize);
                }
                self.report_missing_frame();
                Task::none()
            }
            Message::PlaybackToggled => {
                if let Some(playback) = &mut self.playback {
                    playback.toggle();
                }
                Task::none()
            }
            Message::PlaybackTick => {
                if let Some(playback) = &mut self.playback {
                    playback.tick();
                }
                self.report_missing_frame();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let toolbar = column![
            anonymize_bar(&self.prefix_input),
            search_bar(&self.search_input),
        ]
        .spacing(8);

        let metadata = metadata_panel(
            &self.results,
            self.notice.as_deref(),
            self.study
                .as_ref()
                .map(|study| study.element_names.as_slice())
                .unwrap_or(&[]),
            self.selected_element.as_ref(),
            self.study.is_some(),
        );
        let metadata_panel = container(metadata)
            .padding(16)
            .width(Length::FillPortion(5))
            .height(Length::Fill);

        let image = image_panel(self.study.as_ref(), self.playback.as_ref());
        let image_panel = container(image)
            .padding(16)
            .width(Length::FillPortion(3))
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center);

        let mut content = column![
            toolbar,
            row![metadata_panel, image_panel]
                .spacing(16)
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .spacing(16);

        if let Some(status) = &self.status {
            content = content.push(text(status).size(14).wrapping(Wrapping::Word));
        }

        content.padding(20).into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match &self.playback {
            Some(playback) if playback.is_playing() => {
                iced::time::every(FRAME_INTERVAL).map(|_| Message::PlaybackTick)
            }
            _ => Subscription::none(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn anonymize_and_pick_target(&mut self) -> Task<Message> {
        let prefix = self.prefix_input.clone();
        match &mut self.study {
            None => {
                self.status = Some("Load a DICOM file first.".to_owned());
                Task::none()
            }
            Some(_) if prefix.trim().is_empty() => {
                self.status = Some("Provide an anonymization prefix first.".to_owned());
                Task::none()
            }
            Some(study) => {
                let overwritten = anonymize(&mut study.dataset, &prefix);
                log::info!(
                    "Overwrote {overwritten} sensitive element(s) in {}",
                    study.file_path.display()
                );
                Task::perform(
                    async {
                        AsyncFileDialog::new()
                            .add_filter("DICOM files", &["dcm"])
                            .set_file_name("anonymized.dcm")
                            .save_file()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    Message::SavePathPicked,
                )
            }
        }
    }

    fn save_anonymized(&mut self, mut path: PathBuf) {
        let Some(study) = &self.study else {
            return;
        };

        if path.extension().map(|ext| ext != "dcm").unwrap_or(true) {
            path.set_extension("dcm");
        }

        self.status = Some(match study.dataset.write_to_file(&path) {
            Ok(()) => format!("Anonymized file saved to {}", path.display()),
            Err(err) => {
                let message = format!("{}: failed to save DICOM file ({err})", path.display());
                log::error!("{message}");
                message
            }
        });
    }

    /// A frame the stack could not render was reached: report once and stop
    /// playback so the tick loop does not repeat the failure.
    fn report_missing_frame(&mut self) {
        let missing = match (&self.study, &self.playback) {
            (Some(study), Some(playback)) => study
                .frames
                .get(playback.frame_index())
                .is_none()
                .then(|| playback.frame_index()),
            _ => None,
        };

        if let Some(index) = missing {
            if let Some(playback) = &mut self.playback {
                playback.stop();
            }
            let message = format!("Frame {} could not be displayed; playback stopped.", index + 1);
            log::warn!("{message}");
            self.status = Some(message);
        }
    }
}
