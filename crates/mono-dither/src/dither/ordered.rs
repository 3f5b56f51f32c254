//! Ordered dithering with an 8x8 Bayer matrix.
//!
//! Each pixel is compared against a position-dependent threshold taken from
//! the matrix tiled over the frame. There is no error state, so output at
//! one pixel never depends on another.

use image::GrayImage;
use rand::RngCore;

use crate::output::DitheredFrame;

use super::{Dither, BLACK, WHITE};

/// Recursive 8x8 Bayer index matrix, `BAYER_8X8[row][col]`.
///
/// Holds every value in `0..64` exactly once.
pub const BAYER_8X8: [[u8; 8]; 8] = [
    [0, 48, 12, 60, 3, 51, 15, 63],
    [32, 16, 44, 28, 35, 19, 47, 31],
    [8, 56, 4, 52, 11, 59, 7, 55],
    [40, 24, 36, 20, 43, 27, 39, 23],
    [2, 50, 14, 62, 1, 49, 13, 61],
    [34, 18, 46, 30, 33, 17, 45, 29],
    [10, 58, 6, 54, 9, 57, 5, 53],
    [42, 26, 38, 22, 41, 25, 37, 21],
];

/// Ordered dithering against [`BAYER_8X8`].
///
/// A pixel at `(x, y)` turns white when `value / 255` is strictly greater
/// than `BAYER_8X8[y % 8][x % 8] / 64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ordered;

impl Ordered {
    /// Normalized threshold for a pixel position.
    #[inline]
    pub fn threshold_at(x: u32, y: u32) -> f64 {
        BAYER_8X8[(y % 8) as usize][(x % 8) as usize] as f64 / 64.0
    }
}

impl Dither for Ordered {
    fn dither(&self, image: &GrayImage, _noise: &mut dyn RngCore) -> DitheredFrame {
        let mut out = image.clone();
        for (x, y, pixel) in out.enumerate_pixels_mut() {
            let level = pixel.0[0] as f64 / 255.0;
            pixel.0[0] = if level > Ordered::threshold_at(x, y) {
                WHITE
            } else {
                BLACK
            };
        }
        DitheredFrame::new(out)
    }
}
