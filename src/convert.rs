//! File-to-file conversion: decode, run the pipeline, encode, report.

use std::path::Path;

use crate::error::{AppError, MediaError};
use crate::media;
use crate::models::ConvertProfile;
use crate::report::OutputReport;

/// Convert `input` into a dithered PNG or GIF at `output`.
///
/// The output is written only after every frame converted successfully.
pub fn convert_file(
    input: &Path,
    output: &Path,
    profile: &ConvertProfile,
) -> Result<OutputReport, AppError> {
    if !input.exists() {
        return Err(AppError::InputNotFound(input.to_path_buf()));
    }

    let fps = profile.fps()?;
    let converter = profile.converter()?;

    let sequence = media::load_sequence(input, fps as f64)?;
    let dithered = converter.convert(sequence)?;

    let kind = media::write_sequence(output, &dithered)?;
    let report = OutputReport::from_written(output, kind, &dithered, fps)
        .map_err(MediaError::from)?;
    Ok(report)
}
