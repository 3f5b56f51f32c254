//! Stucki error diffusion dithering algorithm.

use image::GrayImage;
use rand::RngCore;

use crate::output::DitheredFrame;

use super::{dither_with_kernel, Dither, STUCKI};

/// Stucki error diffusion.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///        1   2   1
/// ```
///
/// Divisor 42 over a narrowed third row, so 36/42 of the error propagates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stucki;

impl Dither for Stucki {
    fn dither(&self, image: &GrayImage, _noise: &mut dyn RngCore) -> DitheredFrame {
        dither_with_kernel(image, &STUCKI)
    }
}
