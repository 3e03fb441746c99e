use dicom::core::header::Header;
use dicom::core::value::PrimitiveValue;
use dicom::core::{DataElement, VR};
use dicom::object::InMemDicomObject;

use super::catalogue::SENSITIVE_TAGS;

/// Overwrites every sensitive element present in the dataset with the
/// placeholder, in place. Tags missing from the dataset are skipped, never
/// created. Returns how many elements were overwritten.
pub fn anonymize(dataset: &mut InMemDicomObject, replacement: &str) -> usize {
    let mut overwritten = 0;
    for &tag in &SENSITIVE_TAGS {
        let vr = match dataset.element(tag) {
            Ok(element) => element.vr(),
            Err(_) => continue,
        };
        // A sequence slot cannot hold the textual placeholder.
        let vr = if vr == VR::SQ { VR::LO } else { vr };
        dataset.put(DataElement::new(
            tag,
            vr,
            PrimitiveValue::from(replacement.to_owned()),
        ));
        overwritten += 1;
    }
    overwritten
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalogue::{
        MODALITY, PATIENT_ID, PATIENT_NAME, PROCEDURE_CODE_SEQUENCE, STUDY_DATE,
    };

    fn sample_dataset() -> InMemDicomObject {
        let mut dataset = InMemDicomObject::new_empty();
        dataset.put(DataElement::new(
            PATIENT_NAME,
            VR::PN,
            PrimitiveValue::from("Doe^John".to_owned()),
        ));
        dataset.put(DataElement::new(
            STUDY_DATE,
            VR::DA,
            PrimitiveValue::from("20240115".to_owned()),
        ));
        dataset.put(DataElement::new(
            MODALITY,
            VR::CS,
            PrimitiveValue::from("CT".to_owned()),
        ));
        dataset
    }

    #[test]
    fn sensitive_elements_are_overwritten_with_the_placeholder() {
        let mut dataset = sample_dataset();
        let overwritten = anonymize(&mut dataset, "REDACTED");

        assert_eq!(overwritten, 2);
        for tag in [PATIENT_NAME, STUDY_DATE] {
            let value = dataset
                .element(tag)
                .expect("element must survive")
                .to_str()
                .expect("replacement is textual");
            assert_eq!(value, "REDACTED");
        }
    }

    #[test]
    fn non_sensitive_elements_are_untouched() {
        let mut dataset = sample_dataset();
        anonymize(&mut dataset, "X");

        let modality = dataset
            .element(MODALITY)
            .expect("element must survive")
            .to_str()
            .expect("string value");
        assert_eq!(modality, "CT");
    }

    #[test]
    fn absent_sensitive_tags_are_not_created() {
        let mut dataset = sample_dataset();
        let before = dataset.iter().count();
        anonymize(&mut dataset, "X");

        assert_eq!(dataset.iter().count(), before);
        assert!(dataset.element(PATIENT_ID).is_err());
    }

    #[test]
    fn sequences_are_retyped_to_carry_the_placeholder() {
        let mut dataset = InMemDicomObject::new_empty();
        dataset.put(DataElement::new(
            PROCEDURE_CODE_SEQUENCE,
            VR::SQ,
            PrimitiveValue::Empty,
        ));
        anonymize(&mut dataset, "X");

        let element = dataset
            .element(PROCEDURE_CODE_SEQUENCE)
            .expect("element must survive");
        assert_eq!(element.vr(), VR::LO);
        assert_eq!(element.to_str().expect("string value"), "X");
    }

    #[test]
    fn empty_dataset_is_a_no_op() {
        let mut dataset = InMemDicomObject::new_empty();
        assert_eq!(anonymize(&mut dataset, "X"), 0);
        assert_eq!(dataset.iter().count(), 0);
    }
}
