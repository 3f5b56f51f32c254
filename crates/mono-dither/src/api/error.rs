//! Unified error type for the mono-dither public API.

use crate::dither::ParseAlgorithmError;
use crate::preprocess::GeometryError;

/// Unified error type for the mono-dither public API.
///
/// Every failure aborts the whole conversion; no partial sequence is
/// returned.
///
/// # Example
///
/// ```
/// use mono_dither::{ConvertError, DitherAlgorithm};
///
/// fn pick(name: &str) -> Result<DitherAlgorithm, ConvertError> {
///     Ok(name.parse::<DitherAlgorithm>()?)
/// }
///
/// assert!(matches!(pick("sparkle"), Err(ConvertError::UnknownAlgorithm(_))));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// Algorithm name outside the supported set.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Nothing to convert, either from the start or after trimming.
    #[error("input contains no frames")]
    EmptyInput,

    /// A frame or the target cannot be cropped and resized.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// A frame budget of zero.
    #[error("frame budget must be at least 1")]
    InvalidFrameBudget,
}

impl From<ParseAlgorithmError> for ConvertError {
    fn from(err: ParseAlgorithmError) -> Self {
        ConvertError::UnknownAlgorithm(err.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ConvertError::UnknownAlgorithm("halftone".into()).to_string(),
            "unknown algorithm: halftone"
        );
        assert_eq!(ConvertError::EmptyInput.to_string(), "input contains no frames");
        assert_eq!(
            ConvertError::InvalidFrameBudget.to_string(),
            "frame budget must be at least 1"
        );
    }

    #[test]
    fn test_from_parse_error() {
        let err: ConvertError = ParseAlgorithmError {
            name: "bayer".into(),
        }
        .into();
        assert_eq!(err, ConvertError::UnknownAlgorithm("bayer".into()));
    }

    #[test]
    fn test_geometry_source() {
        use std::error::Error;

        let err = ConvertError::from(GeometryError::EmptyTarget {
            width: 0,
            height: 10,
        });
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("geometry error: "));
    }
}
