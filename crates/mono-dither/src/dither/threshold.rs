//! Plain threshold quantization.

use image::GrayImage;
use rand::RngCore;

use crate::output::DitheredFrame;

use super::{quantize, Dither};

/// Cut at 127: samples above it become white, the rest black.
///
/// No error is carried, so applying it to an already binary frame is a
/// no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct Threshold;

impl Dither for Threshold {
    fn dither(&self, image: &GrayImage, _noise: &mut dyn RngCore) -> DitheredFrame {
        let mut out = image.clone();
        for sample in out.iter_mut() {
            *sample = quantize(*sample as f64);
        }
        DitheredFrame::new(out)
    }
}
