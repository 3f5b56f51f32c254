//! Sierra error diffusion dithering algorithm.

use image::GrayImage;
use rand::RngCore;

use crate::output::DitheredFrame;

use super::{dither_with_kernel, Dither, SIERRA};

/// Sierra error diffusion with compatibility weights.
///
/// ```text
///        X   2   1
///    1   2   1
/// ```
///
/// Divisor 4, so 7/4 of the error is propagated. Over-propagation makes the
/// output noticeably noisier than the other kernels; the weights are kept
/// as-is so existing assets render identically.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sierra;

impl Dither for Sierra {
    fn dither(&self, image: &GrayImage, _noise: &mut dyn RngCore) -> DitheredFrame {
        dither_with_kernel(image, &SIERRA)
    }
}
