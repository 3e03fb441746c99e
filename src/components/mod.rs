pub mod segmented_toggle;

pub use segmented_toggle::segmented_toggle;
