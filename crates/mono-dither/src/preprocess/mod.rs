//! Frame preprocessing before dithering.
//!
//! Two per-frame stages run here, in strict order:
//!
//! 1. **Geometry** ([`normalize_geometry`]) - center crop to the target
//!    aspect ratio, then resize to the exact target size
//! 2. **Tone** ([`apply_tone`]) - grayscale, optional range remap, optional
//!    exposure, optional inversion
//!
//! [`Preprocessor`] composes both. After this module every frame has
//! exactly `target_width x target_height` pixels and a single channel.

mod error;
mod options;
mod preprocessor;
mod resize;
mod tone;

pub use error::GeometryError;
pub use options::{RangeFilter, ToneOptions};
pub use preprocessor::Preprocessor;
pub use resize::{center_crop_rect, normalize_geometry, CropRect};
pub use tone::{adjust_exposure, apply_tone, filter_range, invert, luma_bt601, to_gray};
