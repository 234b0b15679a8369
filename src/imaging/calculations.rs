//! Pure calculation functions for crop geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::Dimensions;

/// A rectangular region inside a source raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Calculate the centered crop region for a requested crop size.
///
/// Requested dimensions larger than the source are silently clamped to the
/// source dimensions. The offset is `(source - clamped) / 2` with floor
/// division, so an odd leftover pixel goes to the right/bottom edge.
///
/// # Examples
/// ```
/// # use bulk_resizer::imaging::{center_crop_region, CropRegion, Dimensions};
/// let region = center_crop_region(Dimensions::new(400, 300), Dimensions::new(500, 100));
/// assert_eq!(region, CropRegion { x: 0, y: 100, width: 400, height: 100 });
/// ```
pub fn center_crop_region(source: Dimensions, requested: Dimensions) -> CropRegion {
    let width = requested.width.min(source.width);
    let height = requested.height.min(source.height);

    CropRegion {
        x: (source.width - width) / 2,
        y: (source.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(src: (u32, u32), req: (u32, u32)) -> CropRegion {
        center_crop_region(Dimensions::new(src.0, src.1), Dimensions::new(req.0, req.1))
    }

    #[test]
    fn crop_smaller_than_source_is_centered() {
        assert_eq!(
            region((400, 300), (200, 100)),
            CropRegion {
                x: 100,
                y: 100,
                width: 200,
                height: 100
            }
        );
    }

    #[test]
    fn oversized_width_clamps_to_source() {
        // 500 wide on a 400 wide source → full width, offset 0
        assert_eq!(
            region((400, 300), (500, 100)),
            CropRegion {
                x: 0,
                y: 100,
                width: 400,
                height: 100
            }
        );
    }

    #[test]
    fn oversized_both_is_full_frame() {
        assert_eq!(
            region((64, 48), (1000, 1000)),
            CropRegion {
                x: 0,
                y: 0,
                width: 64,
                height: 48
            }
        );
    }

    #[test]
    fn odd_leftover_uses_floor_division() {
        // (11 - 4) / 2 = 3, (10 - 3) / 2 = 3
        let r = region((11, 10), (4, 3));
        assert_eq!((r.x, r.y), (3, 3));
    }

    #[test]
    fn zero_request_yields_empty_region() {
        let r = region((10, 10), (0, 0));
        assert_eq!((r.width, r.height), (0, 0));
        assert_eq!((r.x, r.y), (5, 5));
    }
}
