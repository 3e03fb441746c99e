pub mod formatting;

pub use formatting::{
    format_dicom_date, format_dicom_time, format_element_value, format_tag, stringify_value,
    truncate_value,
};
