#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! mono-dither: monochrome frame pipeline for small embedded displays
//!
//! This library turns decoded video or still frames into fixed-size binary
//! frames for a 1-bit panel. It covers temporal selection, aspect-preserving
//! crop and resize, grayscale tone adjustment, and eight halftoning
//! algorithms.
//!
//! # Quick Start
//!
//! The [`FrameConverter`] builder is the primary entry point:
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use mono_dither::{DitherAlgorithm, Frame, FrameConverter, FrameSequence, ToneOptions};
//!
//! let still = RgbImage::from_pixel(640, 480, Rgb([90, 140, 200]));
//! let clip = FrameSequence::still(still, 10.0);
//!
//! let converter = FrameConverter::new()
//!     .target_size(384, 168)
//!     .algorithm(DitherAlgorithm::Atkinson)
//!     .tone(ToneOptions::new().exposure(0.5));
//!
//! let result = converter.convert(clip).unwrap();
//! assert_eq!(result.frames()[0].dimensions(), (384, 168));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! FrameSequence
//!   -> trim        (time window in seconds -> frame indices)
//!   -> sample      (even index sampling down to a frame budget)
//!   -> per frame, in parallel:
//!        center crop to target ratio -> resize
//!        -> gray (BT.601) -> range filter -> exposure -> invert
//!        -> dither
//!   -> DitheredSequence (same order, same fps)
//! ```
//!
//! Every stage is also usable on its own: see [`temporal`], [`preprocess`]
//! and [`dither`].
//!
//! # Algorithms
//!
//! | Name | Kind | Error carried |
//! |------|------|---------------|
//! | `floyd-steinberg` | diffusion | 16/16 |
//! | `ordered` | 8x8 Bayer | none |
//! | `atkinson` | diffusion | 5/8 |
//! | `sierra` | diffusion | 7/4 |
//! | `burkes` | diffusion | 32/32 |
//! | `stucki` | diffusion | 36/42 |
//! | `threshold` | cut at 127 | none |
//! | `random` | noise `[0, 64)` then cut | none |
//!
//! The Sierra and Stucki weights differ from the textbook kernels; they are
//! kept so previously converted assets stay byte-identical.
//!
//! # Determinism
//!
//! Every algorithm except `random` is a pure function of the input frame.
//! `random` draws from a per-frame [`rand::rngs::StdRng`] seeded with
//! `seed + frame_index`; set [`FrameConverter::seed`] to make it
//! reproducible.

pub mod api;
pub mod dither;
pub mod frame;
pub mod output;
pub mod preprocess;
pub mod temporal;


pub use api::{ConvertError, FrameConverter, DEFAULT_TARGET_HEIGHT, DEFAULT_TARGET_WIDTH};
pub use dither::{
    Atkinson, Burkes, Dither, DitherAlgorithm, FloydSteinberg, Ordered, ParseAlgorithmError,
    RandomNoise, Sierra, Stucki, Threshold,
};
pub use frame::{Frame, FrameSequence};
pub use output::{DitheredFrame, DitheredSequence};
pub use preprocess::{GeometryError, Preprocessor, RangeFilter, ToneOptions};
