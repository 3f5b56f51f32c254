//! Frame and frame sequence types shared by every pipeline stage.
//!
//! A [`Frame`] is a row-major raster with its origin at the top-left. Two
//! representations occur: RGB (before tone adjustment) and single-channel
//! luma (from tone adjustment onward). Both are plain `image` buffers so the
//! geometry stage can use `image::imageops` directly.

use image::{GrayImage, RgbImage};

/// A single decoded frame, either RGB or grayscale.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Three 8-bit samples per pixel.
    Rgb(RgbImage),
    /// One 8-bit sample per pixel.
    Luma(GrayImage),
}

impl Frame {
    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        match self {
            Frame::Rgb(img) => img.width(),
            Frame::Luma(img) => img.width(),
        }
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        match self {
            Frame::Rgb(img) => img.height(),
            Frame::Luma(img) => img.height(),
        }
    }

    /// `(width, height)` in pixels.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Samples per pixel: 3 for RGB, 1 for luma.
    #[inline]
    pub fn channels(&self) -> u8 {
        match self {
            Frame::Rgb(_) => 3,
            Frame::Luma(_) => 1,
        }
    }

    /// True when the frame has no pixels at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

impl From<RgbImage> for Frame {
    fn from(img: RgbImage) -> Self {
        Frame::Rgb(img)
    }
}

impl From<GrayImage> for Frame {
    fn from(img: GrayImage) -> Self {
        Frame::Luma(img)
    }
}

/// An ordered list of frames sharing one nominal frame rate.
///
/// The frame rate is supplied by the caller; it is never derived from the
/// frames. A still image is a one-frame sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    fps: f64,
}

impl FrameSequence {
    /// Create a sequence from frames in display order.
    ///
    /// `fps` must be positive.
    pub fn new(frames: Vec<Frame>, fps: f64) -> Self {
        debug_assert!(fps > 0.0, "fps must be positive, got {fps}");
        Self { frames, fps }
    }

    /// A one-frame sequence holding a still image.
    pub fn still(frame: impl Into<Frame>, fps: f64) -> Self {
        Self::new(vec![frame.into()], fps)
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn fps(&self) -> f64 {
        self.fps
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Consume the sequence, returning its frames.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    /// Duration in seconds at the nominal frame rate.
    pub fn duration_secs(&self) -> f64 {
        self.frames.len() as f64 / self.fps
    }

    /// Build a sibling sequence with the same frame rate.
    pub(crate) fn with_frames(&self, frames: Vec<Frame>) -> Self {
        Self {
            frames,
            fps: self.fps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_dimensions_and_channels() {
        let rgb = Frame::from(RgbImage::new(4, 3));
        assert_eq!(rgb.dimensions(), (4, 3));
        assert_eq!(rgb.channels(), 3);

        let luma = Frame::from(GrayImage::new(2, 5));
        assert_eq!(luma.dimensions(), (2, 5));
        assert_eq!(luma.channels(), 1);
    }

    #[test]
    fn test_frame_is_empty() {
        assert!(Frame::from(GrayImage::new(0, 5)).is_empty());
        assert!(Frame::from(RgbImage::new(5, 0)).is_empty());
        assert!(!Frame::from(GrayImage::new(1, 1)).is_empty());
    }

    #[test]
    fn test_sequence_duration() {
        let frames = vec![Frame::from(GrayImage::new(1, 1)); 25];
        let seq = FrameSequence::new(frames, 10.0);
        assert_eq!(seq.len(), 25);
        assert!((seq.duration_secs() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_still_is_single_frame() {
        let seq = FrameSequence::still(GrayImage::new(3, 3), 10.0);
        assert_eq!(seq.len(), 1);
        assert!(!seq.is_empty());
    }
}
