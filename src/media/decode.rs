//! Input decoding: stills and animated GIFs.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage, ImageReader};
use mono_dither::{Frame, FrameSequence};

use super::{has_extension, video};
use crate::error::MediaError;

const STILL_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "mkv", "webm", "avi"];

/// How an input file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// One frame.
    Still,
    /// Every frame of an animated GIF.
    Animation,
    /// Every frame of a video, decoded by FFmpeg.
    Video,
}

impl InputKind {
    /// Classify by extension. Unknown extensions are rejected.
    pub fn from_path(path: &Path) -> Result<Self, MediaError> {
        if has_extension(path, &["gif"]) {
            Ok(InputKind::Animation)
        } else if has_extension(path, STILL_EXTENSIONS) {
            Ok(InputKind::Still)
        } else if has_extension(path, VIDEO_EXTENSIONS) {
            Ok(InputKind::Video)
        } else {
            Err(MediaError::UnsupportedFormat(path.to_path_buf()))
        }
    }
}

/// Decode a file into an RGB frame sequence at the given nominal rate.
///
/// Alpha is dropped, not composited. The frame rate is the caller's; GIF
/// frame delays and video frame rates are ignored.
pub fn load_sequence(path: &Path, fps: f64) -> Result<FrameSequence, MediaError> {
    let kind = InputKind::from_path(path)?;
    let frames = match kind {
        InputKind::Still => vec![load_still(path)?],
        InputKind::Animation => load_gif(path)?,
        InputKind::Video => video::load_video(path)?,
    };

    tracing::info!(
        path = %path.display(),
        kind = ?kind,
        frames = frames.len(),
        "Loaded input"
    );
    Ok(FrameSequence::new(frames, fps))
}

fn load_still(path: &Path) -> Result<Frame, MediaError> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(Frame::Rgb(image.to_rgb8()))
}

fn load_gif(path: &Path) -> Result<Vec<Frame>, MediaError> {
    let decoder = GifDecoder::new(BufReader::new(File::open(path)?))?;
    let frames = decoder.into_frames().collect_frames()?;
    Ok(frames
        .into_iter()
        .map(|frame| Frame::Rgb(DynamicImage::ImageRgba8(frame.into_buffer()).to_rgb8()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_kind_from_path() {
        assert_eq!(
            InputKind::from_path(Path::new("a.GIF")).unwrap(),
            InputKind::Animation
        );
        for still in ["a.png", "a.jpg", "a.JPEG", "a.bmp"] {
            assert_eq!(InputKind::from_path(Path::new(still)).unwrap(), InputKind::Still);
        }
    }

    #[test]
    fn test_video_extensions() {
        for clip in ["clip.mp4", "clip.MOV", "clip.mkv", "clip.webm"] {
            assert_eq!(InputKind::from_path(Path::new(clip)).unwrap(), InputKind::Video, "{clip}");
        }
    }

    #[test]
    fn test_unknown_extension_rejected() {
        for name in ["notes.txt", "clip"] {
            let err = InputKind::from_path(Path::new(name)).unwrap_err();
            assert!(matches!(err, MediaError::UnsupportedFormat(_)), "{name}");
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_sequence(Path::new("/definitely/not/here.png"), 10.0).unwrap_err();
        assert!(matches!(err, MediaError::Io(_)));
    }
}
