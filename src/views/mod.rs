pub mod image_viewer;
pub mod metadata_panel;
pub mod toolbar;

pub use image_viewer::image_panel;
pub use metadata_panel::metadata_panel;
pub use toolbar::{anonymize_bar, search_bar};
