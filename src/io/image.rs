//! PNG loading and export

use crate::io::configuration::MAX_IMAGE_DIMENSION;
use crate::io::error::{MosaicError, Result, invalid_source};
use crate::render::canvas::Canvas;
use crate::spatial::pixels::PixelBuffer;
use std::path::Path;

/// Decode an image file into a read-only pixel buffer
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - Either dimension is zero
/// - Either dimension exceeds [`MAX_IMAGE_DIMENSION`]
pub fn load_pixel_buffer(path: &Path) -> Result<PixelBuffer> {
    let image = image::open(path)
        .map_err(|e| MosaicError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgba8();

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(invalid_source(format!(
            "image '{}' has a zero dimension ({width}x{height})",
            path.display()
        )));
    }
    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(invalid_source(format!(
            "image '{}' exceeds the maximum dimension of {MAX_IMAGE_DIMENSION} ({width}x{height})",
            path.display()
        )));
    }

    Ok(PixelBuffer::from_rgba(&image))
}

/// Save the canvas as a PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be encoded and written.
pub fn export_canvas_as_png(canvas: &Canvas, output_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .image()
        .save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
