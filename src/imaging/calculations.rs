//! Pure calculation functions for image geometry.
//!
//! No I/O and no pixels: these functions only do dimension math, so every
//! edge case is covered by plain unit tests.

use super::backend::{BackendError, Dimensions};

/// A rectangle inside a source image, in pixel coordinates.
///
/// Covers `[left, left + width) x [top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Compute the centered crop of `target` size inside `source`.
///
/// Odd leftover pixels go to the right/bottom side (offsets round down).
///
/// # Errors
///
/// [`BackendError::InvalidCropSize`] if the target is wider or taller than
/// the source.
pub fn calculate_center_crop(
    source: Dimensions,
    target: Dimensions,
) -> Result<CropRegion, BackendError> {
    if target.width > source.width || target.height > source.height {
        return Err(BackendError::InvalidCropSize {
            requested: target,
            actual: source,
        });
    }

    Ok(CropRegion {
        left: (source.width - target.width) / 2,
        top: (source.height - target.height) / 2,
        width: target.width,
        height: target.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    #[test]
    fn exact_size_crops_at_origin() {
        let region = calculate_center_crop(dims(1200, 675), dims(1200, 675)).unwrap();
        assert_eq!(
            region,
            CropRegion {
                left: 0,
                top: 0,
                width: 1200,
                height: 675
            }
        );
    }

    #[test]
    fn larger_source_is_centered() {
        let region = calculate_center_crop(dims(1920, 1080), dims(1200, 675)).unwrap();
        assert_eq!(region.left, 360);
        assert_eq!(region.top, 202);
        assert_eq!(region.left + region.width, 1560);
        assert_eq!(region.top + region.height, 877);
    }

    #[test]
    fn odd_remainder_rounds_offset_down() {
        let region = calculate_center_crop(dims(1201, 676), dims(1200, 675)).unwrap();
        assert_eq!((region.left, region.top), (0, 0));

        let region = calculate_center_crop(dims(1203, 678), dims(1200, 675)).unwrap();
        assert_eq!((region.left, region.top), (1, 1));
    }

    #[test]
    fn one_axis_larger_centers_only_that_axis() {
        let region = calculate_center_crop(dims(1200, 1000), dims(1200, 675)).unwrap();
        assert_eq!((region.left, region.top), (0, 162));
    }

    #[test]
    fn offsets_match_floor_formula() {
        for (w, h) in [(1200, 675), (1300, 700), (2048, 2048), (4001, 3001)] {
            let region = calculate_center_crop(dims(w, h), dims(1200, 675)).unwrap();
            assert_eq!(region.left, (w - 1200) / 2, "left for {w}x{h}");
            assert_eq!(region.top, (h - 675) / 2, "top for {w}x{h}");
            assert!(region.left + region.width <= w && region.top + region.height <= h);
        }
    }

    #[test]
    fn narrow_source_is_rejected() {
        let err = calculate_center_crop(dims(800, 600), dims(1200, 675)).unwrap_err();
        assert!(matches!(
            err,
            BackendError::InvalidCropSize {
                requested: Dimensions {
                    width: 1200,
                    height: 675
                },
                actual: Dimensions {
                    width: 800,
                    height: 600
                },
            }
        ));
        assert_eq!(
            err.to_string(),
            "Invalid crop size: cannot crop to 1200x675 from 800x600"
        );
    }

    #[test]
    fn short_source_is_rejected() {
        assert!(calculate_center_crop(dims(2000, 674), dims(1200, 675)).is_err());
    }
}
