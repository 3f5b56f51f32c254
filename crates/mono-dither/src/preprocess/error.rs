//! Geometry errors for degenerate frame or canvas sizes.

use thiserror::Error;

/// Reasons the geometry stage refuses a frame.
///
/// A zero-sized source or target has no meaningful aspect ratio; the stage
/// fails fast instead of producing an empty or garbage frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The source frame has zero width or height.
    #[error("source frame is empty ({width}x{height})")]
    EmptySource { width: u32, height: u32 },

    /// The requested target canvas has zero width or height.
    #[error("target size must be non-zero ({width}x{height})")]
    EmptyTarget { width: u32, height: u32 },

    /// Center-cropping a very thin source to the target ratio left no pixels.
    #[error("center crop of {width}x{height} source to ratio {target_width}:{target_height} is empty")]
    DegenerateCrop {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },
}
