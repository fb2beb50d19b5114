use image::{GrayImage, Rgb, RgbImage};

use crate::common::error::{RainbowError, RainbowResult};
use crate::common::metadata::Channel;

// Compositor
//------------------------------------------------------------------------------

/// Merges three monochrome symbol images into one composite color image, one
/// plane per channel in channel order.
///
/// The red plane's dimensions are the canvas dimensions; the other planes
/// must match them exactly or the merge fails fast with
/// [`RainbowError::DimensionMismatch`]. A composite pixel's component is 255
/// where the corresponding plane's intensity exceeds the threshold, 0
/// otherwise; the three components are written independently.
pub(crate) fn compose(planes: &[GrayImage; 3], threshold: u8) -> RainbowResult<RgbImage> {
    let (w, h) = planes[Channel::Red.index()].dimensions();
    for ch in Channel::ALL {
        let actual = planes[ch.index()].dimensions();
        if actual != (w, h) {
            return Err(RainbowError::DimensionMismatch {
                channel: ch,
                expected: (w, h),
                actual,
            });
        }
    }

    let mut canvas = RgbImage::new(w, h);
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let mut rgb = [0u8; 3];
        for ch in Channel::ALL {
            let intensity = planes[ch.index()].get_pixel(x, y).0[0];
            rgb[ch.index()] = if intensity > threshold { 255 } else { 0 };
        }
        *pixel = Rgb(rgb);
    }

    Ok(canvas)
}

#[cfg(test)]
mod compose_tests {
    use image::Luma;

    use super::*;
    use crate::common::metadata::COLOR_THRESHOLD;

    fn plane(w: u32, h: u32, value: u8) -> GrayImage {
        GrayImage::from_pixel(w, h, Luma([value]))
    }

    #[test]
    fn test_channels_land_in_own_component() {
        let planes = [plane(4, 4, 255), plane(4, 4, 0), plane(4, 4, 255)];
        let composite = compose(&planes, COLOR_THRESHOLD).unwrap();
        assert!(composite.pixels().all(|p| p.0 == [255, 0, 255]));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Exactly at the threshold counts as off; one above counts as on.
        let planes = [plane(2, 2, COLOR_THRESHOLD), plane(2, 2, COLOR_THRESHOLD + 1), plane(2, 2, 0)];
        let composite = compose(&planes, COLOR_THRESHOLD).unwrap();
        assert!(composite.pixels().all(|p| p.0 == [0, 255, 0]));
    }

    #[test]
    fn test_dimension_mismatch_fails_fast() {
        let planes = [plane(4, 4, 255), plane(4, 4, 255), plane(3, 4, 255)];
        let err = compose(&planes, COLOR_THRESHOLD).unwrap_err();
        assert_eq!(
            err,
            RainbowError::DimensionMismatch {
                channel: Channel::Blue,
                expected: (4, 4),
                actual: (3, 4),
            }
        );
    }

    #[test]
    fn test_output_matches_red_plane_dimensions() {
        let planes = [plane(8, 6, 0), plane(8, 6, 255), plane(8, 6, 0)];
        let composite = compose(&planes, COLOR_THRESHOLD).unwrap();
        assert_eq!(composite.dimensions(), (8, 6));
    }
}
