use dicom::core::Tag;

/// Excluded from every listing and search: far too large to render as text.
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

/// Pseudo-group resolved against the loaded dataset instead of a tag list.
pub const ALL_GROUP: &str = "All";

// Patient identity
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
pub const MEDICAL_RECORD_NUMBER: Tag = Tag(0x0010, 0x0024);

// Study and series identification
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);

// Acquisition and equipment
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0052, 0x0006);
pub const VIEW_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0220);
pub const VIEW_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0222);

// Image geometry and presentation
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);

/// The canonical redaction list. The "Sensitive Data" display group and the
/// anonymizer both reference this slice, so what is shown as sensitive and
/// what gets overwritten can never drift apart.
pub static SENSITIVE_TAGS: [Tag; 19] = [
    PATIENT_NAME,
    PATIENT_ID,
    PATIENT_BIRTH_DATE,
    PATIENT_SEX,
    STUDY_INSTANCE_UID,
    SOP_INSTANCE_UID,
    STUDY_DATE,
    STUDY_TIME,
    REFERRING_PHYSICIAN_NAME,
    ACCESSION_NUMBER,
    MEDICAL_RECORD_NUMBER,
    PROCEDURE_CODE_SEQUENCE,
    IMAGE_TYPE,
    MANUFACTURER,
    DEVICE_SERIAL_NUMBER,
    VIEW_CODE_SEQUENCE,
    VIEW_MODIFIER_CODE_SEQUENCE,
    STUDY_DESCRIPTION,
    IMAGE_COMMENTS,
];

static STUDY_INFORMATION: [Tag; 4] = [
    STUDY_INSTANCE_UID,
    STUDY_DATE,
    STUDY_TIME,
    REFERRING_PHYSICIAN_NAME,
];

static SERIES_INFORMATION: [Tag; 3] = [SERIES_INSTANCE_UID, MODALITY, SERIES_DESCRIPTION];

static PATIENT_INFORMATION: [Tag; 4] =
    [PATIENT_NAME, PATIENT_ID, PATIENT_BIRTH_DATE, PATIENT_SEX];

static ACQUISITION_PARAMETERS: [Tag; 3] = [PATIENT_POSITION, EXPOSURE, EXPOSURE_TIME];

static EQUIPMENT_INFORMATION: [Tag; 2] = [MANUFACTURER, DEVICE_SERIAL_NUMBER];

static IMAGE_SPECIFIC_DATA: [Tag; 2] = [IMAGE_POSITION_PATIENT, IMAGE_ORIENTATION_PATIENT];

static IMAGE_INFORMATION: [Tag; 12] = [
    MODALITY,
    IMAGE_POSITION_PATIENT,
    IMAGE_ORIENTATION_PATIENT,
    PIXEL_SPACING,
    BITS_ALLOCATED,
    BITS_STORED,
    HIGH_BIT,
    WINDOW_CENTER,
    WINDOW_WIDTH,
    RESCALE_INTERCEPT,
    RESCALE_SLOPE,
    SLICE_THICKNESS,
];

/// Display groups in toolbar order. Membership overlaps on purpose: the
/// groups are curated views over the dataset, not a partition of it.
pub static GROUPS: [(&str, &[Tag]); 8] = [
    ("Study Information", &STUDY_INFORMATION),
    ("Series Information", &SERIES_INFORMATION),
    ("Patient Information", &PATIENT_INFORMATION),
    ("Image Acquisition Parameters", &ACQUISITION_PARAMETERS),
    ("Equipment Information", &EQUIPMENT_INFORMATION),
    ("Image-Specific Data", &IMAGE_SPECIFIC_DATA),
    ("Image Information", &IMAGE_INFORMATION),
    ("Sensitive Data", &SENSITIVE_TAGS),
];

pub fn group_tags(name: &str) -> Option<&'static [Tag]> {
    GROUPS
        .iter()
        .find(|(group, _)| *group == name)
        .map(|(_, tags)| *tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitive_group_is_the_anonymizer_tag_list() {
        let displayed = group_tags("Sensitive Data").expect("group must exist");
        assert!(std::ptr::eq(displayed, &SENSITIVE_TAGS[..]));
        assert_eq!(SENSITIVE_TAGS.len(), 19);
    }

    #[test]
    fn groups_may_overlap() {
        let study = group_tags("Study Information").expect("group must exist");
        assert!(study.contains(&STUDY_DATE));
        assert!(SENSITIVE_TAGS.contains(&STUDY_DATE));
    }

    #[test]
    fn unknown_group_has_no_tags() {
        assert!(group_tags("Bogus Group").is_none());
        // "All" is resolved against the dataset, never via the static table.
        assert!(group_tags(ALL_GROUP).is_none());
    }

    #[test]
    fn group_order_matches_toolbar_order() {
        let names: Vec<&str> = GROUPS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.first(), Some(&"Study Information"));
        assert_eq!(names.last(), Some(&"Sensitive Data"));
        assert_eq!(names.len(), 8);
    }
}
