//! Public API for the mono-dither crate.
//!
//! This module provides the high-level API: the [`FrameConverter`] builder
//! and the [`ConvertError`] unified error type.

mod builder;
mod error;

pub use builder::{FrameConverter, DEFAULT_TARGET_HEIGHT, DEFAULT_TARGET_WIDTH};
pub use error::ConvertError;
