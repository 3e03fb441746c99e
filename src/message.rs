use std::path::PathBuf;

use crate::model::LoadedStudy;

#[derive(Debug, Clone)]
pub enum Message {
    ImportRequested,
    /// `None` when the user dismissed the file picker.
    StudyLoaded(Option<Result<LoadedStudy, String>>),
    PrefixChanged(String),
    AnonymizeRequested,
    /// `None` when the user dismissed the save dialog.
    SavePathPicked(Option<PathBuf>),
    SearchChanged(String),
    SearchRequested,
    GroupSelected(&'static str),
    ElementPicked(String),
    FrameSelected(u32),
    PlaybackToggled,
    PlaybackTick,
}
