use image::{GrayImage, Luma, RgbImage};
use imageproc::map::map_colors;

use crate::common::metadata::Channel;

// Decompositor
//------------------------------------------------------------------------------

/// Splits a composite color image back into three monochrome symbol planes,
/// one per channel in channel order.
///
/// Each pixel component is classified independently: above the threshold the
/// reconstructed plane gets a white pixel, otherwise a black one. The
/// reconstruction is exact whenever the composite's components are already 0
/// or 255, which holds for anything produced by the compositor and stored
/// losslessly.
pub(crate) fn decompose(composite: &RgbImage, threshold: u8) -> [GrayImage; 3] {
    Channel::ALL.map(|ch| {
        map_colors(composite, |p| {
            if p.0[ch.index()] > threshold {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        })
    })
}
