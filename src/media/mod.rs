//! File I/O around the conversion pipeline.
//!
//! Decoding turns an input file (still image, animated GIF, or a video read
//! through FFmpeg) into a [`FrameSequence`](mono_dither::FrameSequence);
//! encoding writes a [`DitheredSequence`](mono_dither::DitheredSequence) as
//! a 1-bit PNG or a looping GIF. The container is chosen from the file
//! extension on both sides.

pub mod decode;
pub mod encode;
pub mod video;

use std::path::Path;

pub use decode::{load_sequence, InputKind};
pub use encode::{encode_gif, encode_png, write_sequence};

/// Container written for an output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// First frame only, 1-bit grayscale.
    Png,
    /// Every frame, looping forever.
    Gif,
}

impl OutputKind {
    /// `.png` (any case) selects PNG; every other path gets a GIF.
    pub fn from_path(path: &Path) -> Self {
        if has_extension(path, &["png"]) {
            OutputKind::Png
        } else {
            OutputKind::Gif
        }
    }
}

/// Case-insensitive extension check.
pub(crate) fn has_extension(path: &Path, candidates: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| candidates.iter().any(|c| ext.eq_ignore_ascii_case(c)))
}
