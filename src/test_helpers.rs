//! Shared test utilities for the bulk-resizer test suite.
//!
//! Writes small synthetic images and deliberately broken files into temp
//! directories so codec and batch tests run against real bytes on disk.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let a = tmp.path().join("a.jpg");
//! write_test_jpeg(&a, 400, 300);
//! write_corrupt_file(&tmp.path().join("b.jpg"));
//! ```

use image::{ImageEncoder, Rgb, RgbImage};
use std::path::{Path, PathBuf};

// =========================================================================
// Synthetic images
// =========================================================================

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Write a small valid JPEG with the given dimensions.
pub fn write_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = gradient(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Write a small valid PNG with the given dimensions.
///
/// The format is fixed regardless of the file extension, which lets tests
/// create extension-less sources.
pub fn write_test_png(path: &Path, width: u32, height: u32) {
    let img = gradient(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::png::PngEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Write bytes that no decoder accepts.
pub fn write_corrupt_file(path: &Path) {
    std::fs::write(path, b"this is definitely not an image").unwrap();
}

// =========================================================================
// Output directory inspection
// =========================================================================

/// File names in `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Dimensions of the image file at `path`.
pub fn image_size(path: impl Into<PathBuf>) -> (u32, u32) {
    image::image_dimensions(path.into()).unwrap()
}
