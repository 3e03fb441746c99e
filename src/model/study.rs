use dicom::core::Tag;
use dicom::object::DefaultDicomObject;
use iced::widget::image::Handle;
use std::path::PathBuf;

use crate::utils::truncate_value;

/// Everything the application keeps for the currently loaded file. Replaced
/// wholesale on every import; only the anonymizer mutates the dataset.
#[derive(Debug, Clone)]
pub struct LoadedStudy {
    pub file_path: PathBuf,
    pub dataset: DefaultDicomObject,
    /// Rendered frames, in order. May be shorter than `frame_count` when a
    /// frame failed to render; the display boundary reports the gap.
    pub frames: Vec<Handle>,
    /// Frame count declared by the pixel data, fixed at load time.
    pub frame_count: usize,
    /// Alphabetical element-name catalogue, pixel data excluded.
    pub element_names: Vec<String>,
}

impl LoadedStudy {
    pub fn is_multi_frame(&self) -> bool {
        self.frame_count > 1
    }
}

/// One metadata element prepared for display: dictionary name and value
/// already run through the date/time formatting dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    pub tag: Tag,
    pub name: String,
    pub value: String,
}

impl MetadataEntry {
    pub fn display_line(&self) -> String {
        format!(
            "(0x{:04X}, 0x{:04X}) {}: {}",
            self.tag.group(),
            self.tag.element(),
            self.name,
            truncate_value(&self.value)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_line_uses_fixed_width_hex_addresses() {
        let entry = MetadataEntry {
            tag: Tag(0x0008, 0x0020),
            name: "StudyDate".to_owned(),
            value: "2024-01-15".to_owned(),
        };
        assert_eq!(
            entry.display_line(),
            "(0x0008, 0x0020) StudyDate: 2024-01-15"
        );
    }
}
