//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Floyd-Steinberg distributes 100% of the quantization error to 4
//! neighbors, producing smooth gradients at the cost of "worm" artifacts in
//! flat midtones.

use image::GrayImage;
use rand::RngCore;

use crate::output::DitheredFrame;

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Total: 16/16 = 100% error propagation.
///
/// # Example
///
/// ```
/// use image::{GrayImage, Luma};
/// use mono_dither::{Dither, FloydSteinberg};
///
/// let gray = GrayImage::from_pixel(4, 4, Luma([64]));
/// let out = FloydSteinberg.dither(&gray, &mut rand::thread_rng());
/// assert!(out.is_binary());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: &GrayImage, _noise: &mut dyn RngCore) -> DitheredFrame {
        dither_with_kernel(image, &FLOYD_STEINBERG)
    }
}
