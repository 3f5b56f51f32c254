//! Output types for the dithering pipeline.
//!
//! [`DitheredFrame`] is the canonical result of dithering one frame: a
//! grayscale buffer whose samples are only ever 0 or 255. A converted clip
//! is a [`DitheredSequence`], which keeps the playback rate alongside the
//! frames.
//!
//! # Output Formats
//!
//! - **Grayscale** ([`DitheredFrame::as_image`]): 8-bit samples, ready for
//!   any `image` encoder
//! - **Packed bits** ([`DitheredFrame::to_packed_bits`]): 1 bit per pixel,
//!   MSB first, rows padded to a whole byte

mod dithered_frame;

pub use dithered_frame::{DitheredFrame, DitheredSequence};
