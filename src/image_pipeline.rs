use dicom::object::DefaultDicomObject;
use dicom::pixeldata::{DecodedPixelData, PhotometricInterpretation, PixelDecoder};
use iced::widget::image::Handle;

/// Frames rendered for display. `frame_count` is what the pixel data
/// declares; `handles` stops short when a frame fails to render, and the
/// display boundary reports the gap when it is reached.
pub struct RenderedStack {
    pub frame_count: usize,
    pub handles: Vec<Handle>,
}

pub struct FrameImagePipeline;

impl FrameImagePipeline {
    pub fn render_stack(object: &DefaultDicomObject) -> Result<RenderedStack, String> {
        let decoded = object
            .decode_pixel_data()
            .map_err(|err| format!("Failed to decode pixel data: {err}"))?;

        let frame_count = decoded.number_of_frames() as usize;
        let mut handles = Vec::with_capacity(frame_count);
        for index in 0..frame_count {
            match Self::frame_to_handle(&decoded, index as u32) {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    log::warn!("Frame {index} could not be rendered: {err}");
                    break;
                }
            }
        }

        Ok(RenderedStack {
            frame_count,
            handles,
        })
    }

    fn frame_to_handle(decoded: &DecodedPixelData<'_>, frame_idx: u32) -> Result<Handle, String> {
        if decoded.photometric_interpretation().is_monochrome() {
            Self::monochrome_frame(decoded, frame_idx)
        } else {
            Self::color_frame(decoded, frame_idx)
        }
    }

    fn monochrome_frame(
        decoded: &DecodedPixelData<'_>,
        frame_idx: u32,
    ) -> Result<Handle, String> {
        let width = decoded.columns();
        let height = decoded.rows();
        let invert = matches!(
            decoded.photometric_interpretation(),
            PhotometricInterpretation::Monochrome1
        );

        let rgba = if decoded.bits_allocated() <= 8 {
            let samples = decoded
                .to_vec_frame::<u8>(frame_idx)
                .map_err(|err| format!("Failed to materialize frame data: {err}"))?;
            gray8_to_rgba(&samples, invert)
        } else {
            let samples = decoded
                .to_vec_frame::<u16>(frame_idx)
                .map_err(|err| format!("Failed to materialize frame data: {err}"))?;
            gray16_to_rgba(&samples, invert)
        };

        Ok(Handle::from_rgba(width, height, rgba))
    }

    fn color_frame(decoded: &DecodedPixelData<'_>, frame_idx: u32) -> Result<Handle, String> {
        decoded
            .to_dynamic_image(frame_idx)
            .map_err(|err| format!("Failed to render frame: {err}"))
            .map(|image| {
                let rgba = image.into_rgba8();
                let (width, height) = rgba.dimensions();
                Handle::from_rgba(width, height, rgba.into_raw())
            })
    }
}

fn gray8_to_rgba(samples: &[u8], invert: bool) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(samples.len() * 4);
    for &gray in samples {
        let value = if invert {
            255u8.saturating_sub(gray)
        } else {
            gray
        };
        rgba.extend_from_slice(&[value, value, value, 255]);
    }
    rgba
}

fn gray16_to_rgba(samples: &[u16], invert: bool) -> Vec<u8> {
    let (min, max) = min_max_u16(samples).unwrap_or((0, 0));
    let mut rgba = Vec::with_capacity(samples.len() * 4);
    for &sample in samples {
        let mut gray = normalize_u16(sample, min, max);
        if invert {
            gray = 255 - gray;
        }
        rgba.extend_from_slice(&[gray, gray, gray, 255]);
    }
    rgba
}

fn min_max_u16(values: &[u16]) -> Option<(u16, u16)> {
    values.iter().copied().fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}

fn normalize_u16(value: u16, min: u16, max: u16) -> u8 {
    if max <= min {
        return 0;
    }

    let range = (max - min) as f32;
    let normalized = (value.saturating_sub(min)) as f32 / range;
    (normalized * 255.0).clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray8_expands_to_opaque_rgba() {
        let rgba = gray8_to_rgba(&[0, 128, 255], false);
        assert_eq!(rgba, [0, 0, 0, 255, 128, 128, 128, 255, 255, 255, 255, 255]);
    }

    #[test]
    fn gray8_inversion_flips_luminance() {
        let rgba = gray8_to_rgba(&[0, 255], true);
        assert_eq!(rgba, [255, 255, 255, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn gray16_normalizes_the_sample_range() {
        let rgba = gray16_to_rgba(&[100, 300, 500], false);
        assert_eq!(rgba[0], 0);
        assert_eq!(rgba[4], 128);
        assert_eq!(rgba[8], 255);
    }

    #[test]
    fn flat_gray16_frames_render_black_instead_of_dividing_by_zero() {
        let rgba = gray16_to_rgba(&[700, 700], false);
        assert_eq!(rgba, [0, 0, 0, 255, 0, 0, 0, 255]);
    }
}
