//! Burkes error diffusion dithering algorithm.

use image::GrayImage;
use rand::RngCore;

use crate::output::DitheredFrame;

use super::{dither_with_kernel, Dither, BURKES};

/// Burkes error diffusion.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
/// ```
///
/// Divisor 32, 100% propagation over two rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct Burkes;

impl Dither for Burkes {
    fn dither(&self, image: &GrayImage, _noise: &mut dyn RngCore) -> DitheredFrame {
        dither_with_kernel(image, &BURKES)
    }
}
