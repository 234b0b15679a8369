//! Image codec backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two codec operations the batch
//! orchestrator needs: decode a file into a raster, and encode a raster into
//! the bytes of a named format.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording `MockBackend` below so orchestration logic
//! can be exercised without real codecs.

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("Failed to encode {format}: {reason}")]
    Encode { format: String, reason: String },
}

/// Width and height of a raster, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(image: &DynamicImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Trait for image codec backends.
///
/// Both operations are synchronous and release any file handle before
/// returning, whether they succeed or fail.
pub trait ImageBackend {
    /// Read and decode the file at `path` into an in-memory raster.
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError>;

    /// Encode `image` in the format named by `format` (a lowercase file
    /// extension such as `"png"`) and return the encoded bytes.
    fn encode(&self, image: &DynamicImage, format: &str) -> Result<Vec<u8>, BackendError>;
}
