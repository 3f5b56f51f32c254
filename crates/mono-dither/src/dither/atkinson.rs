//! Atkinson error diffusion dithering algorithm.
//!
//! Atkinson propagates only part of the quantization error, so highlights
//! and shadows clip earlier and flat areas stay clean. This gives the
//! high-contrast look familiar from early Macintosh graphics.

use image::GrayImage;
use rand::RngCore;

use crate::output::DitheredFrame;

use super::{dither_with_kernel, Dither, ATKINSON};

/// Atkinson error diffusion dithering.
///
/// # Algorithm
///
/// This variant diffuses to five neighbors, each receiving 1/8:
///
/// ```text
///        X   1   1
///        1   1
///        1
/// ```
///
/// Total: 5/8 = 62.5% error propagation. The bottom-left neighbor of the
/// textbook six-neighbor kernel is omitted for output compatibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(&self, image: &GrayImage, _noise: &mut dyn RngCore) -> DitheredFrame {
        dither_with_kernel(image, &ATKINSON)
    }
}
