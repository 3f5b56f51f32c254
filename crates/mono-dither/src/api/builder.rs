//! FrameConverter builder -- the primary ergonomic entry point for the crate.
//!
//! [`FrameConverter`] wraps the whole pipeline (temporal selection, geometry,
//! tone, dithering) behind fluent configuration.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::dither::DitherAlgorithm;
use crate::frame::{Frame, FrameSequence};
use crate::output::{DitheredFrame, DitheredSequence};
use crate::preprocess::{Preprocessor, ToneOptions};
use crate::temporal;

use super::ConvertError;

/// Default canvas width, landscape.
pub const DEFAULT_TARGET_WIDTH: u32 = 384;
/// Default canvas height, landscape.
pub const DEFAULT_TARGET_HEIGHT: u32 = 168;

/// Progress is logged after every this many converted frames, and after the
/// last one.
const PROGRESS_INTERVAL: usize = 10;

fn reports_progress(finished: usize, total: usize) -> bool {
    finished % PROGRESS_INTERVAL == 0 || finished == total
}

/// High-level converter from a frame sequence to a dithered sequence.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`convert()`](Self::convert) takes `&self`, so one converter can be
///   reused across clips
/// - Frames are processed in parallel; output order always equals input
///   order
///
/// # Example
///
/// ```
/// use image::{Rgb, RgbImage};
/// use mono_dither::{DitherAlgorithm, Frame, FrameConverter, FrameSequence};
///
/// let frames = vec![Frame::from(RgbImage::from_pixel(100, 100, Rgb([200, 10, 10]))); 3];
/// let clip = FrameSequence::new(frames, 10.0);
///
/// let converter = FrameConverter::new()
///     .target_size(168, 384)
///     .algorithm(DitherAlgorithm::Threshold);
///
/// let out = converter.convert(clip).unwrap();
/// assert_eq!(out.len(), 3);
/// assert_eq!(out.dimensions(), Some((168, 384)));
/// ```
#[derive(Debug, Clone)]
pub struct FrameConverter {
    target_width: u32,
    target_height: u32,
    algorithm: DitherAlgorithm,
    max_frames: Option<usize>,
    start_time: Option<f64>,
    end_time: Option<f64>,
    tone: ToneOptions,
    seed: Option<u64>,
}

impl Default for FrameConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameConverter {
    /// Create a converter with default settings.
    ///
    /// Target 384x168, Floyd-Steinberg, no frame budget, no time window,
    /// neutral tone, fresh random seed per conversion.
    pub fn new() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            target_height: DEFAULT_TARGET_HEIGHT,
            algorithm: DitherAlgorithm::default(),
            max_frames: None,
            start_time: None,
            end_time: None,
            tone: ToneOptions::new(),
            seed: None,
        }
    }

    /// Set the output canvas size.
    #[inline]
    pub fn target_size(mut self, width: u32, height: u32) -> Self {
        self.target_width = width;
        self.target_height = height;
        self
    }

    #[inline]
    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Select the algorithm by name (case-insensitive kebab-case).
    pub fn algorithm_name(self, name: &str) -> Result<Self, ConvertError> {
        let algorithm = name.parse::<DitherAlgorithm>()?;
        Ok(self.algorithm(algorithm))
    }

    /// Cap the number of output frames. `None` keeps every frame.
    #[inline]
    pub fn max_frames(mut self, max_frames: Option<usize>) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Keep only frames inside `[start, end)` seconds.
    #[inline]
    pub fn time_window(mut self, start: Option<f64>, end: Option<f64>) -> Self {
        self.start_time = start;
        self.end_time = end;
        self
    }

    #[inline]
    pub fn tone(mut self, tone: ToneOptions) -> Self {
        self.tone = tone;
        self
    }

    /// Fix the noise seed so [`DitherAlgorithm::Random`] is reproducible.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[inline]
    pub fn target_dimensions(&self) -> (u32, u32) {
        (self.target_width, self.target_height)
    }

    #[inline]
    pub fn selected_algorithm(&self) -> DitherAlgorithm {
        self.algorithm
    }

    /// Run the full pipeline over a clip.
    ///
    /// Steps, in order: trim to the time window, sample down to the frame
    /// budget, then per frame normalize geometry, reduce to gray, adjust
    /// tone and dither. Any frame failing aborts the whole conversion.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::EmptyInput`] when the clip (or the trimmed clip)
    ///   has no frames
    /// - [`ConvertError::InvalidFrameBudget`] for a budget of zero
    /// - [`ConvertError::Geometry`] for zero-sized frames or targets
    pub fn convert(&self, sequence: FrameSequence) -> Result<DitheredSequence, ConvertError> {
        if sequence.is_empty() {
            return Err(ConvertError::EmptyInput);
        }
        if self.max_frames == Some(0) {
            return Err(ConvertError::InvalidFrameBudget);
        }

        let fps = sequence.fps();
        let mut selected = temporal::trim(sequence, self.start_time, self.end_time);
        if selected.is_empty() {
            return Err(ConvertError::EmptyInput);
        }
        if let Some(max_frames) = self.max_frames {
            selected = temporal::sample(selected, max_frames);
        }

        let base_seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let preprocessor = Preprocessor::new(self.target_width, self.target_height, self.tone);
        let total = selected.len();
        let done = AtomicUsize::new(0);

        tracing::info!(
            frames = total,
            width = self.target_width,
            height = self.target_height,
            algorithm = %self.algorithm,
            "Converting frames"
        );

        let frames = selected
            .frames()
            .par_iter()
            .enumerate()
            .map(|(index, frame)| {
                let dithered = self.convert_one(&preprocessor, frame, base_seed, index)?;
                let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
                if reports_progress(finished, total) {
                    tracing::info!("Processing frame {finished}/{total}");
                }
                Ok(dithered)
            })
            .collect::<Result<Vec<_>, ConvertError>>()?;

        Ok(DitheredSequence::new(frames, fps))
    }

    /// Convert a single frame, bypassing temporal selection.
    ///
    /// Uses the configured seed (or a fresh one) as frame index 0.
    pub fn convert_frame(&self, frame: &Frame) -> Result<DitheredFrame, ConvertError> {
        let base_seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let preprocessor = Preprocessor::new(self.target_width, self.target_height, self.tone);
        self.convert_one(&preprocessor, frame, base_seed, 0)
    }

    fn convert_one(
        &self,
        preprocessor: &Preprocessor,
        frame: &Frame,
        base_seed: u64,
        index: usize,
    ) -> Result<DitheredFrame, ConvertError> {
        let gray = preprocessor.process(frame)?;
        let mut noise = StdRng::seed_from_u64(base_seed.wrapping_add(index as u64));
        Ok(self.algorithm.apply(&gray, &mut noise))
    }
}
