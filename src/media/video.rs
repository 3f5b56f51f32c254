//! Video decoding through the `ffprobe` and `ffmpeg` command-line tools.
//!
//! `ffprobe` reports the size of the first video stream, then `ffmpeg`
//! streams every frame of that stream as raw `rgb24` on stdout. Frames are
//! taken at the container's native rate; the pipeline's fps only drives
//! trimming and playback.

use std::path::Path;
use std::process::Command;

use image::RgbImage;
use mono_dither::Frame;
use serde::Deserialize;

use crate::error::MediaError;

const FFMPEG: &str = "ffmpeg";
const FFPROBE: &str = "ffprobe";

/// Size of the decoded video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoInfo {
    pub width: u32,
    pub height: u32,
}

impl VideoInfo {
    fn frame_bytes(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

#[derive(Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Deserialize)]
struct ProbeStream {
    width: Option<u32>,
    height: Option<u32>,
}

/// Decode every frame of the first video stream in `path`.
pub fn load_video(path: &Path) -> Result<Vec<Frame>, MediaError> {
    let info = probe(path)?;
    tracing::debug!(width = info.width, height = info.height, "Probed video stream");

    // Rotation metadata is ignored on both sides so the probed size matches
    // the raw frames.
    let raw = run_tool(
        Command::new(FFMPEG)
            .args(["-v", "error", "-nostdin", "-noautorotate", "-i"])
            .arg(path)
            .args(["-map", "0:v:0", "-an", "-f", "rawvideo", "-pix_fmt", "rgb24", "-"]),
    )?;
    split_frames(raw, info)
}

/// Width and height of the first video stream.
pub fn probe(path: &Path) -> Result<VideoInfo, MediaError> {
    let stdout = run_tool(
        Command::new(FFPROBE)
            .args(["-v", "error", "-select_streams", "v:0"])
            .args(["-show_entries", "stream=width,height", "-of", "json"])
            .arg(path),
    )?;
    parse_probe(&stdout).ok_or_else(|| {
        MediaError::Decode(format!("no video stream in {}", path.display()))
    })
}

fn parse_probe(stdout: &[u8]) -> Option<VideoInfo> {
    let output: ProbeOutput = serde_json::from_slice(stdout).ok()?;
    output.streams.iter().find_map(|stream| match (stream.width, stream.height) {
        (Some(width), Some(height)) if width > 0 && height > 0 => {
            Some(VideoInfo { width, height })
        }
        _ => None,
    })
}

/// Cut raw `rgb24` output into frames. A truncated trailing frame is dropped.
fn split_frames(raw: Vec<u8>, info: VideoInfo) -> Result<Vec<Frame>, MediaError> {
    let frame_bytes = info.frame_bytes();
    let remainder = raw.len() % frame_bytes;
    if remainder != 0 {
        tracing::warn!(bytes = remainder, "Dropping truncated trailing video frame");
    }

    let frames: Vec<Frame> = raw
        .chunks_exact(frame_bytes)
        .filter_map(|chunk| RgbImage::from_raw(info.width, info.height, chunk.to_vec()))
        .map(Frame::Rgb)
        .collect();
    if frames.is_empty() {
        return Err(MediaError::Decode("video stream decoded to no frames".to_string()));
    }
    Ok(frames)
}

/// Run an external tool and return its stdout.
///
/// A tool that is not installed, or one that exits unsuccessfully, is a
/// decode error carrying the tool's name and stderr.
fn run_tool(command: &mut Command) -> Result<Vec<u8>, MediaError> {
    let program = command.get_program().to_string_lossy().into_owned();
    let output = command.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MediaError::Decode(format!("{program} not found; install FFmpeg to read video"))
        } else {
            MediaError::Decode(format!("failed to run {program}: {e}"))
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(MediaError::Decode(format!(
            "{program} failed: {}",
            stderr.trim()
        )));
    }
    Ok(output.stdout)
}
