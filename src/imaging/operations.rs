//! The two raster operations applied to every batch item.
//!
//! Both take the source by reference and return a new [`DynamicImage`] in the
//! same pixel format as the source. The source is never mutated.

use super::backend::Dimensions;
use super::calculations::center_crop_region;
use image::DynamicImage;
use image::imageops::FilterType;

/// Resize `image` to exactly `width` x `height` with bilinear interpolation.
///
/// The whole source extent maps onto the whole target extent, so the aspect
/// ratio is not preserved. Both dimensions must be positive; the request
/// parser guarantees this for batch runs.
pub fn resize(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    debug_assert!(width > 0 && height > 0, "resize target must be positive");
    image.resize_exact(width, height, FilterType::Triangle)
}

/// Crop the centered `width` x `height` region out of `image`.
///
/// Oversized requests are clamped to the image bounds instead of failing,
/// see [`center_crop_region`].
pub fn crop_to_center(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let region = center_crop_region(Dimensions::of(image), Dimensions::new(width, height));
    image.crop_imm(region.x, region.y, region.width, region.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        }))
    }

    // =========================================================================
    // resize
    // =========================================================================

    #[test]
    fn resize_hits_exact_dimensions() {
        let img = gradient(400, 300);
        let out = resize(&img, 200, 200);
        assert_eq!(out.dimensions(), (200, 200));
    }

    #[test]
    fn resize_can_upscale() {
        let img = gradient(10, 5);
        let out = resize(&img, 37, 91);
        assert_eq!(out.dimensions(), (37, 91));
    }

    #[test]
    fn resize_preserves_pixel_format() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 4])));
        let out = resize(&img, 4, 4);
        assert_eq!(out.color(), img.color());
    }

    #[test]
    fn resize_leaves_source_untouched() {
        let img = gradient(50, 40);
        let before = img.clone();
        let _ = resize(&img, 5, 5);
        assert_eq!(img, before);
    }

    #[test]
    fn resize_uniform_image_stays_uniform() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(30, 20, Rgb([90, 90, 90])));
        let out = resize(&img, 7, 13).to_rgb8();
        assert!(out.pixels().all(|p| *p == Rgb([90, 90, 90])));
    }

    // =========================================================================
    // crop_to_center
    // =========================================================================

    #[test]
    fn crop_takes_centered_region() {
        let img = gradient(400, 300);
        let out = crop_to_center(&img, 200, 100);
        assert_eq!(out.dimensions(), (200, 100));
        // Top-left of the crop is source pixel (100, 100)
        assert_eq!(out.get_pixel(0, 0), img.get_pixel(100, 100));
    }

    #[test]
    fn crop_clamps_oversized_request() {
        let img = gradient(400, 300);
        let out = crop_to_center(&img, 500, 100);
        assert_eq!(out.dimensions(), (400, 100));
        assert_eq!(out.get_pixel(0, 0), img.get_pixel(0, 100));
    }

    #[test]
    fn full_frame_crop_is_identity() {
        let img = gradient(33, 17);
        let out = crop_to_center(&img, 33, 17);
        assert_eq!(out, img);
    }

    #[test]
    fn crop_preserves_pixel_format() {
        let img = DynamicImage::ImageLuma8(image::GrayImage::new(10, 10));
        let out = crop_to_center(&img, 5, 5);
        assert_eq!(out.color(), image::ColorType::L8);
    }

    #[test]
    fn crop_then_resize_scenario() {
        // 400x300, crop 500x100 → clamps to 400x100 at (0, 100), then 200x200
        let img = gradient(400, 300);
        let cropped = crop_to_center(&img, 500, 100);
        assert_eq!(cropped.dimensions(), (400, 100));
        let resized = resize(&cropped, 200, 200);
        assert_eq!(resized.dimensions(), (200, 200));
    }
}
