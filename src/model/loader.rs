use std::path::PathBuf;

use dicom::object::open_file;

use super::query;
use super::study::LoadedStudy;
use crate::image_pipeline::FrameImagePipeline;

/// Opens a DICOM file and prepares everything the UI needs: the parsed
/// dataset, the element-name catalogue, and the rendered frame stack.
/// Only a parse failure fails the load; an undecodable image degrades to a
/// metadata-only study.
pub fn load_study(path: PathBuf) -> Result<LoadedStudy, String> {
    log::info!("Loading DICOM file: {}", path.display());
    let dataset = open_file(&path).map_err(|err| {
        let message = format!("{}: failed to open DICOM file ({err})", path.display());
        log::error!("{message}");
        message
    })?;

    let element_names = query::element_names(&dataset);

    let (frame_count, frames) = match FrameImagePipeline::render_stack(&dataset) {
        Ok(stack) => {
            if stack.handles.len() < stack.frame_count {
                log::warn!(
                    "Rendered {} of {} declared frames",
                    stack.handles.len(),
                    stack.frame_count
                );
            }
            (stack.frame_count, stack.handles)
        }
        Err(err) => {
            log::warn!("No frame preview for {}: {err}", path.display());
            (0, Vec::new())
        }
    };

    Ok(LoadedStudy {
        file_path: path,
        dataset,
        frames,
        frame_count,
        element_names,
    })
}
