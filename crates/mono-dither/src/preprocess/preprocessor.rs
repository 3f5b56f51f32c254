//! Per-frame preprocessing: geometry normalization followed by tone.
//!
//! The [`Preprocessor`] turns one decoded frame of any size and channel
//! layout into a grayscale frame of exactly the target dimensions, ready
//! for dithering.
//!
//! # Processing Order
//!
//! 1. **Center crop** to the target aspect ratio
//! 2. **Resize** to the exact target dimensions
//! 3. **Grayscale** (BT.601 luma)
//! 4. **Range filter**, **exposure**, **inversion** as configured
//!
//! Resize happens before grayscale so resampling sees the original colors.

use image::GrayImage;

use super::error::GeometryError;
use super::options::ToneOptions;
use super::resize::normalize_geometry;
use super::tone::apply_tone;
use crate::frame::Frame;

/// Frame preprocessor for a fixed target canvas.
///
/// Holds only immutable configuration, so a single instance can be shared
/// across threads that process independent frames.
///
/// # Example
///
/// ```
/// use image::{Rgb, RgbImage};
/// use mono_dither::{Frame, Preprocessor, ToneOptions};
///
/// let preprocessor = Preprocessor::new(168, 384, ToneOptions::new());
/// let frame = Frame::from(RgbImage::from_pixel(100, 100, Rgb([200, 200, 200])));
///
/// let gray = preprocessor.process(&frame).unwrap();
/// assert_eq!(gray.dimensions(), (168, 384));
/// ```
#[derive(Debug, Clone)]
pub struct Preprocessor {
    target_width: u32,
    target_height: u32,
    tone: ToneOptions,
}

impl Preprocessor {
    #[inline]
    pub fn new(target_width: u32, target_height: u32, tone: ToneOptions) -> Self {
        Self {
            target_width,
            target_height,
            tone,
        }
    }

    #[inline]
    pub fn target_dimensions(&self) -> (u32, u32) {
        (self.target_width, self.target_height)
    }

    #[inline]
    pub fn tone(&self) -> &ToneOptions {
        &self.tone
    }

    /// Normalize geometry and apply tone adjustment to one frame.
    ///
    /// # Errors
    ///
    /// Fails when the source or target has a zero dimension, or when the
    /// center crop collapses to nothing.
    pub fn process(&self, frame: &Frame) -> Result<GrayImage, GeometryError> {
        let normalized = normalize_geometry(frame, self.target_width, self.target_height)?;
        Ok(apply_tone(&normalized, &self.tone))
    }
}
