//! Random-noise dithering.

use image::GrayImage;
use rand::{Rng, RngCore};

use crate::output::DitheredFrame;

use super::{quantize, Dither};

/// Noise values are drawn uniformly from this range.
pub const NOISE_RANGE: std::ops::Range<u16> = 0..64;

/// Add uniform noise in [`NOISE_RANGE`] to every sample, then cut at 127.
///
/// One noise value is drawn per pixel in row-major order, and the sum
/// saturates at 255. With a seeded source the output is reproducible.
///
/// # Example
///
/// ```
/// use image::{GrayImage, Luma};
/// use mono_dither::{Dither, RandomNoise};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let gray = GrayImage::from_pixel(16, 16, Luma([100]));
/// let a = RandomNoise.dither(&gray, &mut StdRng::seed_from_u64(9));
/// let b = RandomNoise.dither(&gray, &mut StdRng::seed_from_u64(9));
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNoise;

impl Dither for RandomNoise {
    fn dither(&self, image: &GrayImage, noise: &mut dyn RngCore) -> DitheredFrame {
        let mut out = image.clone();
        for sample in out.iter_mut() {
            let jitter = noise.gen_range(NOISE_RANGE);
            let noisy = (*sample as u16 + jitter).min(255);
            *sample = quantize(noisy as f64);
        }
        DitheredFrame::new(out)
    }
}
