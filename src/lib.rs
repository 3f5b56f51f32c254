//! pocket-dither - monochrome clips for small embedded displays
//!
//! Converts videos, still images and animated GIFs into dithered 1-bit PNG or GIF
//! output. The pipeline itself lives in the `mono-dither` crate; this
//! library exposes the file handling for the CLI and integration tests.

pub mod convert;
pub mod error;
pub mod media;
pub mod models;
pub mod report;

pub use convert::convert_file;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "pocket_dither=info,mono_dither=info";

/// Log filter used with `--quiet`.
pub const QUIET_LOG_FILTER: &str = "pocket_dither=warn,mono_dither=warn";
