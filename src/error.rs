use std::path::PathBuf;

use mono_dither::ConvertError;
use thiserror::Error;

/// Any failure of a whole file conversion
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    #[error("Media error: {0}")]
    Media(#[from] MediaError),
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Unsupported input format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Nothing to encode")]
    NoFrames,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for MediaError {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => MediaError::Io(io),
            image::ImageError::Encoding(_) => MediaError::Encode(e.to_string()),
            other => MediaError::Decode(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read profile {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse profile {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid profile value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}
