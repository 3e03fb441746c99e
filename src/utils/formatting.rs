use dicom::core::value::{DicomDate, DicomTime, PrimitiveValue, Value};
use dicom::core::{Tag, VR};

const MAX_VALUE_LEN: usize = 120;

/// Normalizes a DICOM date string to `YYYY-MM-DD`.
///
/// Dots and dashes are stripped first, so already-formatted input reaches
/// the same fixpoint. Anything that does not reduce to eight digits forming
/// a valid calendar date is returned unchanged.
pub fn format_dicom_date(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !matches!(c, '.' | '-')).collect();
    if stripped.len() != 8 || !stripped.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_owned();
    }

    let year = stripped[..4].parse::<u16>();
    let month = stripped[4..6].parse::<u8>();
    let day = stripped[6..8].parse::<u8>();
    match (year, month, day) {
        (Ok(year), Ok(month), Ok(day)) if DicomDate::from_ymd(year, month, day).is_ok() => {
            format!("{year:04}-{month:02}-{day:02}")
        }
        _ => raw.to_owned(),
    }
}

/// Normalizes a DICOM time string to `HH:MM:SS`, dropping fractional
/// seconds. Input that does not reduce to six digits forming a valid time
/// of day is returned unchanged.
pub fn format_dicom_time(raw: &str) -> String {
    let head = raw.split('.').next().unwrap_or_default();
    let stripped: String = head.chars().filter(|c| *c != ':').collect();
    if stripped.len() != 6 || !stripped.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_owned();
    }

    let hour = stripped[..2].parse::<u8>();
    let minute = stripped[2..4].parse::<u8>();
    let second = stripped[4..6].parse::<u8>();
    match (hour, minute, second) {
        (Ok(hour), Ok(minute), Ok(second))
            if DicomTime::from_hms(hour, minute, second).is_ok() =>
        {
            format!("{hour:02}:{minute:02}:{second:02}")
        }
        _ => raw.to_owned(),
    }
}

/// Display dispatch keyed on the element's display name: names containing
/// `Date` go through the date formatter, names containing `Time` through
/// the time formatter, everything else is shown as-is.
pub fn format_element_value(name: &str, raw: &str) -> String {
    if name.contains("Date") {
        format_dicom_date(raw)
    } else if name.contains("Time") {
        format_dicom_time(raw)
    } else {
        raw.to_owned()
    }
}

pub fn format_tag(tag: Tag) -> String {
    format!("{:04X},{:04X}", tag.group(), tag.element())
}

pub fn truncate_value(rendered: &str) -> String {
    if rendered.chars().count() > MAX_VALUE_LEN {
        let mut truncated = rendered.chars().take(MAX_VALUE_LEN).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        rendered.to_owned()
    }
}

pub fn stringify_value<I, P>(value: &Value<I, P>, vr: VR) -> String {
    match value {
        Value::Primitive(primitive) => stringify_primitive(primitive, vr),
        Value::Sequence(sequence) => {
            let count = sequence.multiplicity() as usize;
            let suffix = if count == 1 { "" } else { "s" };
            format!("Sequence ({count} item{suffix})")
        }
        Value::PixelSequence(sequence) => {
            let fragments = sequence.fragments().len();
            let suffix = if fragments == 1 { "" } else { "s" };
            format!("Pixel data ({fragments} fragment{suffix})")
        }
    }
}

fn stringify_primitive(value: &PrimitiveValue, vr: VR) -> String {
    match value {
        PrimitiveValue::Empty => "(empty)".to_owned(),
        PrimitiveValue::Tags(values) => values
            .iter()
            .map(|tag| format_tag(*tag))
            .collect::<Vec<_>>()
            .join("\\"),
        PrimitiveValue::U8(_) if is_binary_vr(vr) => {
            format!("Binary data ({} bytes)", value.calculate_byte_len())
        }
        other => other.to_str().into_owned(),
    }
}

fn is_binary_vr(vr: VR) -> bool {
    matches!(
        vr,
        VR::OB | VR::OD | VR::OF | VR::OL | VR::OV | VR::OW | VR::UN
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_formatting_handles_plain_and_separated_input() {
        assert_eq!(format_dicom_date("20240115"), "2024-01-15");
        assert_eq!(format_dicom_date("2024.01.15"), "2024-01-15");
        assert_eq!(format_dicom_date("2024-01-15"), "2024-01-15");
    }

    #[test]
    fn date_formatting_leaves_unparseable_input_untouched() {
        assert_eq!(format_dicom_date("bad"), "bad");
        assert_eq!(format_dicom_date(""), "");
        assert_eq!(format_dicom_date("2024011"), "2024011");
        // Eight digits, but month 13 is not a date.
        assert_eq!(format_dicom_date("20241301"), "20241301");
        assert_eq!(format_dicom_date("abcdefgh"), "abcdefgh");
    }

    #[test]
    fn date_formatting_is_idempotent() {
        for input in ["20240115", "2024-01-15", "bad", "20241301", "2024011"] {
            let once = format_dicom_date(input);
            assert_eq!(format_dicom_date(&once), once);
        }
    }

    #[test]
    fn time_formatting_strips_fraction_and_separators() {
        assert_eq!(format_dicom_time("235959"), "23:59:59");
        assert_eq!(format_dicom_time("23:59:59.500"), "23:59:59");
        assert_eq!(format_dicom_time("120000.000001"), "12:00:00");
    }

    #[test]
    fn time_formatting_leaves_unparseable_input_untouched() {
        assert_eq!(format_dicom_time("noon"), "noon");
        assert_eq!(format_dicom_time("2400"), "2400");
        // Hour 25 is out of range.
        assert_eq!(format_dicom_time("255959"), "255959");
    }

    #[test]
    fn dispatch_is_keyed_on_display_name() {
        assert_eq!(format_element_value("StudyDate", "20240115"), "2024-01-15");
        assert_eq!(format_element_value("StudyTime", "080000"), "08:00:00");
        assert_eq!(format_element_value("Modality", "20240115"), "20240115");
    }

    #[test]
    fn long_values_are_truncated_with_ellipsis() {
        let long = "x".repeat(200);
        let truncated = truncate_value(&long);
        assert_eq!(truncated.chars().count(), 121);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncate_value("short"), "short");
    }

    #[test]
    fn tags_render_as_fixed_width_hex() {
        assert_eq!(format_tag(Tag(0x0010, 0x0020)), "0010,0020");
        assert_eq!(format_tag(Tag(0x7FE0, 0x0010)), "7FE0,0010");
    }
}
