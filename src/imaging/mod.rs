//! Image processing — pure Rust, built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (content-sniffed) |
//! | **Center crop** | `DynamicImage::crop_imm` at the clamped, centered region |
//! | **Resize** | `DynamicImage::resize_exact` with `Triangle` (bilinear) |
//! | **Encode** | `DynamicImage::write_to` (JPEG, PNG, BMP, GIF) |
//!
//! The module is split into:
//! - **Calculations**: Pure crop geometry (unit testable)
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: [`crop_to_center`] and [`resize`] on decoded rasters

pub mod backend;
mod calculations;
pub mod operations;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{CropRegion, center_crop_region};
pub use operations::{crop_to_center, resize};
pub use rust_backend::RustBackend;
