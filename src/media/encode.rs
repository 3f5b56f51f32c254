//! Output encoding: 1-bit PNG and looping GIF.

use std::io::Cursor;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage};
use mono_dither::{DitheredFrame, DitheredSequence};

use super::OutputKind;
use crate::error::MediaError;

/// GIF quantizer speed; output frames have two colors, so quality is moot.
const GIF_ENCODE_SPEED: i32 = 10;

/// Encode and write a dithered sequence, choosing the container from the
/// output extension.
///
/// The file is encoded in memory first and written in one go, so a failed
/// encode never leaves a partial file behind.
pub fn write_sequence(path: &Path, sequence: &DitheredSequence) -> Result<OutputKind, MediaError> {
    let kind = OutputKind::from_path(path);
    let bytes = match kind {
        OutputKind::Png => {
            let first = sequence.frames().first().ok_or(MediaError::NoFrames)?;
            if sequence.len() > 1 {
                tracing::info!(
                    dropped = sequence.len() - 1,
                    "PNG output keeps only the first frame"
                );
            }
            encode_png(first)?
        }
        OutputKind::Gif => encode_gif(sequence)?,
    };

    std::fs::write(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), kind = ?kind, "Saved output");
    Ok(kind)
}

/// Encode one frame as a 1-bit grayscale PNG.
///
/// The frame is written with fast settings and then re-compressed with
/// oxipng; if optimization fails the unoptimized bytes are kept.
pub fn encode_png(frame: &DitheredFrame) -> Result<Vec<u8>, MediaError> {
    let (width, height) = frame.dimensions();
    let packed = frame.to_packed_bits();

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::One);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| MediaError::Encode(e.to_string()))?;
        writer
            .write_image_data(&packed)
            .map_err(|e| MediaError::Encode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    );
    match optimized {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
            Ok(png_bytes)
        }
    }
}

/// Encode every frame as an infinitely looping GIF.
///
/// Each frame is shown for `floor(1000 / fps)` milliseconds.
pub fn encode_gif(sequence: &DitheredSequence) -> Result<Vec<u8>, MediaError> {
    if sequence.is_empty() {
        return Err(MediaError::NoFrames);
    }
    let delay = Delay::from_numer_denom_ms(sequence.frame_delay_ms(), 1);

    let mut buf = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut buf, GIF_ENCODE_SPEED);
        encoder.set_repeat(Repeat::Infinite)?;
        let frames = sequence.frames().iter().map(|frame| {
            let rgba = DynamicImage::ImageLuma8(frame.as_image().clone()).to_rgba8();
            image::Frame::from_parts(rgba, 0, 0, delay)
        });
        encoder.encode_frames(frames)?;
    }
    Ok(buf)
}
