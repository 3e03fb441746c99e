pub mod anonymizer;
pub mod catalogue;
pub mod loader;
pub mod playback;
pub mod query;
pub mod study;

pub use playback::FramePlayback;
pub use study::{LoadedStudy, MetadataEntry};
