//! Binary frame and sequence containers.

use image::{GrayImage, Luma};

use crate::dither::{BLACK, WHITE};

/// One dithered frame.
///
/// Wraps a [`GrayImage`] in which every sample is [`BLACK`] or [`WHITE`].
///
/// # Example
///
/// ```
/// use mono_dither::DitheredFrame;
///
/// let samples = vec![255, 0, 0, 0, 0, 0, 0, 0, 255, 255];
/// let frame = DitheredFrame::from_samples(10, 1, samples).unwrap();
/// assert!(frame.is_binary());
/// assert_eq!(frame.white_count(), 3);
///
/// // 10 pixels pack into 2 bytes, MSB first.
/// assert_eq!(frame.to_packed_bits(), vec![0b1000_0000, 0b1100_0000]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DitheredFrame {
    image: GrayImage,
}

impl DitheredFrame {
    /// Wrap a binary grayscale image.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that every sample is 0 or 255.
    pub fn new(image: GrayImage) -> Self {
        debug_assert!(
            image.iter().all(|&v| v == BLACK || v == WHITE),
            "dithered frame contains non-binary samples"
        );
        Self { image }
    }

    /// Build from row-major samples.
    ///
    /// Returns `None` unless `samples.len() == width * height`.
    pub fn from_samples(width: u32, height: u32, samples: Vec<u8>) -> Option<Self> {
        GrayImage::from_raw(width, height, samples).map(Self::new)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Sample at `(x, y)`, or `None` outside the frame.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.image.get_pixel_checked(x, y).map(|Luma([v])| *v)
    }

    /// Row-major samples.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    #[inline]
    pub fn as_image(&self) -> &GrayImage {
        &self.image
    }

    pub fn into_image(self) -> GrayImage {
        self.image
    }

    /// True when every sample is 0 or 255.
    pub fn is_binary(&self) -> bool {
        self.image.iter().all(|&v| v == BLACK || v == WHITE)
    }

    /// Number of white pixels.
    pub fn white_count(&self) -> usize {
        self.image.iter().filter(|&&v| v == WHITE).count()
    }

    /// Pack to 1 bit per pixel.
    ///
    /// White is `1`, black is `0`. Bits are MSB first and each row starts on
    /// a fresh byte, so a row takes `ceil(width / 8)` bytes.
    pub fn to_packed_bits(&self) -> Vec<u8> {
        let width = self.width() as usize;
        let stride = width.div_ceil(8);
        let mut packed = vec![0u8; stride * self.height() as usize];
        if width == 0 {
            return packed;
        }
        for (row_idx, row) in self.image.as_raw().chunks_exact(width).enumerate() {
            let out = &mut packed[row_idx * stride..(row_idx + 1) * stride];
            for (x, &v) in row.iter().enumerate() {
                if v == WHITE {
                    out[x / 8] |= 0x80 >> (x % 8);
                }
            }
        }
        packed
    }
}

impl From<DitheredFrame> for GrayImage {
    fn from(frame: DitheredFrame) -> Self {
        frame.image
    }
}

/// Dithered frames in display order with their playback rate.
#[derive(Debug, Clone, PartialEq)]
pub struct DitheredSequence {
    frames: Vec<DitheredFrame>,
    fps: f64,
}

impl DitheredSequence {
    pub fn new(frames: Vec<DitheredFrame>, fps: f64) -> Self {
        Self { frames, fps }
    }

    #[inline]
    pub fn frames(&self) -> &[DitheredFrame] {
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

    /// Frame dimensions, taken from the first frame.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.frames.first().map(DitheredFrame::dimensions)
    }

    /// Per-frame display time in whole milliseconds, `floor(1000 / fps)`.
    pub fn frame_delay_ms(&self) -> u32 {
        (1000.0 / self.fps).floor() as u32
    }

    pub fn into_frames(self) -> Vec<DitheredFrame> {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_samples_dimensions() {
        let frame = DitheredFrame::from_samples(3, 2, vec![0, 255, 0, 255, 0, 255]).unwrap();
        assert_eq!(frame.dimensions(), (3, 2));
        assert_eq!(frame.get(1, 0), Some(255));
        assert_eq!(frame.get(1, 1), Some(0));
        assert_eq!(frame.get(3, 0), None);
    }

    #[test]
    fn test_from_samples_rejects_length_mismatch() {
        assert!(DitheredFrame::from_samples(3, 2, vec![0, 255, 0, 255, 0]).is_none());
        assert!(DitheredFrame::from_samples(2, 2, vec![0; 5]).is_none());
    }

    #[test]
    fn test_white_count() {
        let frame = DitheredFrame::from_samples(2, 2, vec![255, 255, 0, 255]).unwrap();
        assert_eq!(frame.white_count(), 3);
    }

    #[test]
    fn test_packed_bits_row_padding() {
        // 3 pixels wide: each row fits in one byte, low bits are padding.
        let frame = DitheredFrame::from_samples(3, 2, vec![255, 0, 255, 0, 255, 255]).unwrap();
        assert_eq!(frame.to_packed_bits(), vec![0b1010_0000, 0b0110_0000]);
    }

    #[test]
    fn test_packed_bits_full_byte() {
        let samples = vec![255, 255, 255, 255, 0, 0, 0, 255];
        let frame = DitheredFrame::from_samples(8, 1, samples).unwrap();
        assert_eq!(frame.to_packed_bits(), vec![0b1111_0001]);
    }

    #[test]
    fn test_packed_bits_length_for_display() {
        let frame = DitheredFrame::new(GrayImage::new(168, 384));
        assert_eq!(frame.to_packed_bits().len(), 21 * 384);
    }

    #[test]
    fn test_frame_delay() {
        let seq = DitheredSequence::new(Vec::new(), 10.0);
        assert_eq!(seq.frame_delay_ms(), 100);
        let seq = DitheredSequence::new(Vec::new(), 3.0);
        assert_eq!(seq.frame_delay_ms(), 333);
    }

    #[test]
    fn test_sequence_dimensions() {
        let frames = vec![DitheredFrame::new(GrayImage::new(4, 5)); 2];
        let seq = DitheredSequence::new(frames, 10.0);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.dimensions(), Some((4, 5)));
        assert_eq!(DitheredSequence::new(Vec::new(), 10.0).dimensions(), None);
    }
}
