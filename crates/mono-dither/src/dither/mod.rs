//! Binary dithering algorithms.
//!
//! This module converts a continuous-tone grayscale frame into a binary
//! frame where every sample is exactly 0 or 255.
//!
//! # Algorithms
//!
//! Eight algorithms are available via [`DitherAlgorithm`]:
//!
//! - **Error diffusion**: Floyd-Steinberg, Atkinson, Sierra, Burkes, Stucki
//! - **Ordered**: 8x8 Bayer threshold matrix
//! - **Threshold**: plain cut at 127
//! - **Random**: uniform noise in `[0, 64)` added before the cut
//!
//! # Architecture
//!
//! All algorithms implement the [`Dither`] trait. The error diffusion
//! variants share one scan ([`dither_with_kernel`]): row-major, single pass,
//! each pixel's quantization error handed to unvisited neighbors through a
//! frame-local [`ErrorBuffer`]. Because later pixels see corrections from
//! earlier ones, the scan is sequential within a frame; independent frames
//! can be dithered in parallel.
//!
//! # Example
//!
//! ```
//! use image::{GrayImage, Luma};
//! use mono_dither::DitherAlgorithm;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let gray = GrayImage::from_pixel(8, 8, Luma([128]));
//! let algorithm: DitherAlgorithm = "floyd-steinberg".parse().unwrap();
//!
//! let mut noise = StdRng::seed_from_u64(7);
//! let result = algorithm.apply(&gray, &mut noise);
//! assert!(result.is_binary());
//! ```

mod atkinson;
mod burkes;
mod floyd_steinberg;
mod kernel;
mod ordered;
mod random;
mod sierra;
mod stucki;
mod threshold;

pub use atkinson::Atkinson;
pub use burkes::Burkes;
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;
pub use ordered::{Ordered, BAYER_8X8};
pub use random::{RandomNoise, NOISE_RANGE};
pub use sierra::Sierra;
pub use stucki::Stucki;
pub use threshold::Threshold;

use std::fmt;
use std::str::FromStr;

use image::GrayImage;
use rand::RngCore;

use crate::output::DitheredFrame;

/// Output sample for "on" pixels.
pub const WHITE: u8 = 255;
/// Output sample for "off" pixels.
pub const BLACK: u8 = 0;
/// Samples strictly above this value turn white.
pub const THRESHOLD: u8 = 127;

/// Dither algorithm selection.
///
/// A closed set: parsing any other name fails with
/// [`ParseAlgorithmError`], and dispatch is an exhaustive `match`.
/// Error diffusion variants carry their kernel table, see
/// [`DitherAlgorithm::kernel`].
///
/// # Example
///
/// ```
/// use mono_dither::DitherAlgorithm;
///
/// let algorithm: DitherAlgorithm = "Atkinson".parse().unwrap();
/// assert_eq!(algorithm, DitherAlgorithm::Atkinson);
/// assert_eq!(algorithm.to_string(), "atkinson");
///
/// assert!("halftone".parse::<DitherAlgorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitherAlgorithm {
    /// Floyd-Steinberg error diffusion (100% propagation, 4 neighbors).
    #[default]
    FloydSteinberg,

    /// 8x8 Bayer ordered dithering. No error state.
    Ordered,

    /// Atkinson error diffusion, five neighbors (5/8 propagation).
    Atkinson,

    /// Sierra error diffusion, compatibility weights (7/4 propagation).
    Sierra,

    /// Burkes error diffusion (100% propagation, 7 neighbors).
    Burkes,

    /// Stucki error diffusion, compatibility weights (36/42 propagation).
    Stucki,

    /// Plain threshold at 127.
    Threshold,

    /// Uniform noise in `[0, 64)` added before thresholding.
    Random,
}

impl DitherAlgorithm {
    /// Every algorithm, in command-line listing order.
    pub const ALL: [DitherAlgorithm; 8] = [
        DitherAlgorithm::FloydSteinberg,
        DitherAlgorithm::Ordered,
        DitherAlgorithm::Atkinson,
        DitherAlgorithm::Sierra,
        DitherAlgorithm::Burkes,
        DitherAlgorithm::Stucki,
        DitherAlgorithm::Threshold,
        DitherAlgorithm::Random,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            DitherAlgorithm::FloydSteinberg => "floyd-steinberg",
            DitherAlgorithm::Ordered => "ordered",
            DitherAlgorithm::Atkinson => "atkinson",
            DitherAlgorithm::Sierra => "sierra",
            DitherAlgorithm::Burkes => "burkes",
            DitherAlgorithm::Stucki => "stucki",
            DitherAlgorithm::Threshold => "threshold",
            DitherAlgorithm::Random => "random",
        }
    }

    /// Diffusion kernel for error diffusion variants, `None` otherwise.
    pub fn kernel(&self) -> Option<&'static Kernel> {
        match self {
            DitherAlgorithm::FloydSteinberg => Some(&FLOYD_STEINBERG),
            DitherAlgorithm::Atkinson => Some(&ATKINSON),
            DitherAlgorithm::Sierra => Some(&SIERRA),
            DitherAlgorithm::Burkes => Some(&BURKES),
            DitherAlgorithm::Stucki => Some(&STUCKI),
            DitherAlgorithm::Ordered | DitherAlgorithm::Threshold | DitherAlgorithm::Random => {
                None
            }
        }
    }

    /// True when the output depends on the noise source.
    #[inline]
    pub fn uses_noise(&self) -> bool {
        matches!(self, DitherAlgorithm::Random)
    }

    /// Dither one grayscale frame.
    ///
    /// `noise` is only consumed by [`DitherAlgorithm::Random`]; every other
    /// variant is a pure function of `image`.
    pub fn apply(&self, image: &GrayImage, noise: &mut dyn RngCore) -> DitheredFrame {
        match self {
            DitherAlgorithm::FloydSteinberg => FloydSteinberg.dither(image, noise),
            DitherAlgorithm::Ordered => Ordered.dither(image, noise),
            DitherAlgorithm::Atkinson => Atkinson.dither(image, noise),
            DitherAlgorithm::Sierra => Sierra.dither(image, noise),
            DitherAlgorithm::Burkes => Burkes.dither(image, noise),
            DitherAlgorithm::Stucki => Stucki.dither(image, noise),
            DitherAlgorithm::Threshold => Threshold.dither(image, noise),
            DitherAlgorithm::Random => RandomNoise.dither(image, noise),
        }
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DitherAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        DitherAlgorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseAlgorithmError {
                name: s.to_string(),
            })
    }
}

/// An algorithm name outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm: {name}")]
pub struct ParseAlgorithmError {
    /// The rejected name, as given.
    pub name: String,
}

/// Trait for binary dithering algorithms.
///
/// Implementors map a grayscale frame to a frame whose samples are exactly
/// [`BLACK`] or [`WHITE`]. They hold no state between frames.
pub trait Dither {
    /// Dither a grayscale frame.
    ///
    /// # Arguments
    ///
    /// * `image` - Input samples, row-major, `0..=255`
    /// * `noise` - Uniform random source; ignored by deterministic algorithms
    fn dither(&self, image: &GrayImage, noise: &mut dyn RngCore) -> DitheredFrame;
}

/// Frame-local accumulator for error diffusion.
///
/// Holds a sliding window of rows as `f64` working values: `rows[0]` is the
/// row being scanned, `rows[k]` the row `k` below it. Rows enter the window
/// carrying their source samples, and diffused error is added in place, so
/// each pixel is quantized from its sample plus every correction made so
/// far, summed in scan order.
///
/// # Usage Pattern
///
/// 1. Create with `new(width, row_depth)` and `load_row` the first rows
/// 2. For each pixel, `take(x)` the working value and `add_error` to
///    unvisited neighbors
/// 3. After each row, `advance_row()` and `load_row` the row entering the
///    window
#[derive(Debug)]
pub struct ErrorBuffer {
    /// Working rows: rows[0] is current row, rows[1] is next, etc.
    rows: Vec<Vec<f64>>,
    /// Image width
    width: usize,
}

impl ErrorBuffer {
    /// Create a zeroed buffer.
    ///
    /// # Arguments
    ///
    /// * `width` - Image width in pixels
    /// * `row_depth` - Number of rows to track (kernel's `max_dy + 1`)
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![0.0; width]).collect(),
            width,
        }
    }

    /// Overwrite the row at `row_offset` with source samples.
    pub fn load_row(&mut self, row_offset: usize, samples: &[u8]) {
        if let Some(row) = self.rows.get_mut(row_offset) {
            for (slot, &v) in row.iter_mut().zip(samples) {
                *slot = v as f64;
            }
        }
    }

    /// Working value of pixel `x` in the current row.
    #[inline]
    pub fn take(&self, x: usize) -> f64 {
        self.rows[0][x]
    }

    /// Add error to a future pixel.
    ///
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: f64) {
        if x < self.width && row_offset < self.rows.len() {
            self.rows[row_offset][x] += error;
        }
    }

    /// Advance to the next row.
    ///
    /// Rotates the window: the first row is discarded, subsequent rows shift
    /// forward, and the last row is zeroed for the caller to load.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill(0.0);
        }
    }

    /// Rows tracked by the window.
    #[inline]
    pub fn depth(&self) -> usize {
        self.rows.len()
    }
}

/// Binary quantizer shared by all threshold-style algorithms.
#[inline]
pub(crate) fn quantize(value: f64) -> u8 {
    if value > THRESHOLD as f64 {
        WHITE
    } else {
        BLACK
    }
}

/// Core error diffusion scan parameterized by kernel.
///
/// Row-major, top-to-bottom, left-to-right, single pass. Each pixel is
/// quantized at 127 and `error = old - new` is handed to the kernel's
/// neighbors as `error * weight / divisor`. Neighbors outside the frame are
/// skipped; their share is lost.
pub(crate) fn dither_with_kernel(image: &GrayImage, kernel: &Kernel) -> DitheredFrame {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let samples = image.as_raw();
    let row = |y: usize| &samples[y * width..(y + 1) * width];

    let mut frame = GrayImage::new(image.width(), image.height());
    let output: &mut [u8] = &mut frame;
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);
    for dy in 0..error_buf.depth().min(height) {
        error_buf.load_row(dy, row(dy));
    }

    let divisor = kernel.divisor as f64;
    for y in 0..height {
        for x in 0..width {
            let old = error_buf.take(x);
            let new = quantize(old);
            output[y * width + x] = new;

            let error = old - new as f64;
            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + dx as i64;
                let ny = y + dy as usize;
                if nx >= 0 && (nx as usize) < width && ny < height {
                    error_buf.add_error(nx as usize, dy as usize, error * weight as f64 / divisor);
                }
            }
        }

        error_buf.advance_row();
        let entering = y + error_buf.depth();
        if entering < height {
            error_buf.load_row(error_buf.depth() - 1, row(entering));
        }
    }

    DitheredFrame::new(frame)
}
