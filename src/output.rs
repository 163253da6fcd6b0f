//! # Output Module
//!
//! Turns a traced [`Raster`] into image files:
//! - PNG export with 8-bit RGBA pixels, clamped to the display range
//! - OpenEXR export with linear, unclamped HDR values
//!
//! The tracer works in image-plane orientation where row 0 is the bottom of
//! the view. Both writers flip rows so the camera's up vector points up in the
//! saved file. Pixels the tracer left unset are written with a fallback, the
//! fully transparent [`UNSET_PIXEL`] by default.

use std::path::Path;

use exr::prelude::write_rgba_file;
use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};
use log::info;
use thiserror::Error;

use crate::render::Raster;

/// Fallback written for pixels that produced no color.
pub const UNSET_PIXEL: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Upper bound of a color channel.
const CHANNEL_MAX: f64 = 255.0;

/// Image export errors
#[derive(Debug, Error)]
pub enum OutputError {
    /// PNG encoding or file I/O failed.
    #[error("failed to write PNG: {0}")]
    Png(#[from] image::ImageError),
    /// EXR encoding or file I/O failed.
    #[error("failed to write EXR: {0}")]
    Exr(#[from] exr::error::Error),
    /// The output path has an extension no writer handles.
    #[error("unsupported file extension '{0}', only .png and .exr are supported")]
    UnsupportedExtension(String),
}

/// Clamp a real channel value into `u8`.
fn to_channel(value: f64) -> u8 {
    value.clamp(0.0, CHANNEL_MAX) as u8
}

/// Convert a raster to 8-bit RGBA.
///
/// The image is flipped vertically relative to raster row order: raster row
/// `y` becomes image row `height - 1 - y`, so raster row 0 (the bottom of
/// the view) is the last image row and the camera's up vector points up in
/// the image. Each channel becomes `min(max(c, 0), 255)` truncated to an
/// integer, with an opaque alpha. Unset pixels take `fallback`.
pub fn to_rgba8(raster: &Raster, fallback: Rgba<u8>) -> RgbaImage {
    let height = raster.height();
    ImageBuffer::from_fn(raster.width(), height, |x, y| {
        match raster.get(x, height - 1 - y) {
            Some(color) => Rgba([
                to_channel(color.x),
                to_channel(color.y),
                to_channel(color.z),
                u8::MAX,
            ]),
            None => fallback,
        }
    })
}

/// Save a raster as an 8-bit PNG.
pub fn save_image_as_png(raster: &Raster, output_path: &Path) -> Result<(), OutputError> {
    to_rgba8(raster, UNSET_PIXEL).save_with_format(output_path, ImageFormat::Png)?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save a raster as an OpenEXR file with full precision.
///
/// Like [`to_rgba8`], the file is flipped vertically relative to raster row
/// order: raster row `y` is written as file row `height - 1 - y`. Channels
/// are written as `c / 255` without clamping, so overexposed highlights keep
/// values above 1.0. Unset pixels have zero alpha.
pub fn save_image_as_exr(raster: &Raster, output_path: &Path) -> Result<(), OutputError> {
    let width = raster.width() as usize;
    let height = raster.height() as usize;

    write_rgba_file(output_path, width, height, |x, y| {
        match raster.get(x as u32, (height - 1 - y) as u32) {
            Some(color) => {
                let linear = (color / CHANNEL_MAX).as_vec3();
                (linear.x, linear.y, linear.z, 1.0_f32)
            }
            None => (0.0, 0.0, 0.0, 0.0),
        }
    })?;

    info!("HDR image saved as EXR: {}", output_path.display());
    Ok(())
}

/// Save a raster, choosing the format from the file extension.
pub fn save_image(raster: &Raster, output_path: &Path) -> Result<(), OutputError> {
    let extension = output_path
        .extension()
        .map(|extension| extension.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => save_image_as_png(raster, output_path),
        "exr" => save_image_as_exr(raster, output_path),
        _ => Err(OutputError::UnsupportedExtension(extension)),
    }
}
