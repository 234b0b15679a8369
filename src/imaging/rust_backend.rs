//! Pure Rust codec backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, BMP, GIF) | `image::ImageReader` with content sniffing |
//! | Encode | `DynamicImage::write_to` into an in-memory buffer |
//!
//! Decoding sniffs the file content rather than trusting the extension, so a
//! source named `photo` with no extension still decodes. Encoding picks the
//! format from the derived output extension.

use super::backend::{BackendError, ImageBackend};
use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Output extensions and the encoder each maps to.
const OUTPUT_FORMATS: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("bmp", ImageFormat::Bmp),
    ("gif", ImageFormat::Gif),
];

/// Look up the encoder for a lowercase extension.
pub fn output_format(extension: &str) -> Option<ImageFormat> {
    OUTPUT_FORMATS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, fmt)| *fmt)
}

/// Codec backend using the `image` crate ecosystem.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert `image` into a pixel layout the target encoder accepts.
///
/// JPEG stores neither alpha nor 16-bit samples, so anything but 8-bit gray
/// or RGB is flattened to RGB8. GIF and BMP encode 8-bit RGBA.
fn prepare_for(image: &DynamicImage, format: ImageFormat) -> Option<DynamicImage> {
    let color = image.color();
    match format {
        ImageFormat::Jpeg if !matches!(color, ColorType::L8 | ColorType::Rgb8) => {
            Some(DynamicImage::ImageRgb8(image.to_rgb8()))
        }
        ImageFormat::Gif if color != ColorType::Rgba8 => {
            Some(DynamicImage::ImageRgba8(image.to_rgba8()))
        }
        ImageFormat::Bmp
            if !matches!(
                color,
                ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8
            ) =>
        {
            Some(DynamicImage::ImageRgba8(image.to_rgba8()))
        }
        _ => None,
    }
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        if reader.format().is_none() {
            return Err(BackendError::Decode {
                path: path.display().to_string(),
                reason: "unrecognized image data".to_string(),
            });
        }
        reader.decode().map_err(|e| BackendError::Decode {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn encode(&self, image: &DynamicImage, format: &str) -> Result<Vec<u8>, BackendError> {
        let image_format = output_format(format)
            .filter(|f| f.writing_enabled())
            .ok_or_else(|| BackendError::UnsupportedFormat(format.to_string()))?;

        let converted = prepare_for(image, image_format);
        let image = converted.as_ref().unwrap_or(image);

        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, image_format)
            .map_err(|e| BackendError::Encode {
                format: format.to_string(),
                reason: e.to_string(),
            })?;
        Ok(buffer.into_inner())
    }
}
