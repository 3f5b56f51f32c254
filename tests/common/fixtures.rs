//! Test fixtures: input media written to scratch directories.

use std::path::{Path, PathBuf};
use std::time::Duration;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Rgb, RgbImage, Rgba, RgbaImage};

/// Solid gray levels used for the animated fixture, one per frame.
pub const FRAME_LEVELS: [u8; 6] = [0, 255, 0, 255, 0, 255];

/// Write a horizontal RGB gradient as a PNG and return its path.
pub fn write_gradient_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let image = RgbImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / width.max(2).saturating_sub(1)).min(255) as u8;
        Rgb([v, v, v])
    });
    image.save(&path).expect("write gradient png");
    path
}

/// Write a solid-color PNG and return its path.
pub fn write_solid_png(dir: &Path, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(rgb))
        .save(&path)
        .expect("write solid png");
    path
}

/// Write an animated GIF whose frame `i` is solid `levels[i]` gray.
pub fn write_level_gif(dir: &Path, name: &str, width: u32, height: u32, levels: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).expect("create gif");
    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Infinite).expect("set repeat");
    let frames = levels.iter().map(|&v| {
        let buffer = RgbaImage::from_pixel(width, height, Rgba([v, v, v, 255]));
        image::Frame::from_parts(buffer, 0, 0, Delay::from_saturating_duration(Duration::from_millis(50)))
    });
    encoder.encode_frames(frames).expect("encode gif");
    path
}

/// Write a YAML profile and return its path.
pub fn write_profile(dir: &Path, name: &str, yaml: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, yaml).expect("write profile");
    path
}

/// Whether the FFmpeg tools needed for video input are installed.
pub fn ffmpeg_available() -> bool {
    ["ffmpeg", "ffprobe"].iter().all(|tool| {
        std::process::Command::new(tool)
            .arg("-version")
            .output()
            .is_ok_and(|output| output.status.success())
    })
}

/// Encode a solid white MP4 of `frames` frames at 5 fps with FFmpeg.
///
/// Returns `None` when FFmpeg is missing or cannot produce the clip, so
/// callers can skip.
pub fn write_white_mp4(dir: &Path, name: &str, width: u32, height: u32, frames: u32) -> Option<PathBuf> {
    if !ffmpeg_available() {
        return None;
    }
    let path = dir.join(name);
    let source = format!("color=c=white:s={width}x{height}:r=5");
    let status = std::process::Command::new("ffmpeg")
        .args(["-v", "error", "-nostdin", "-y", "-f", "lavfi", "-i", &source])
        .args(["-frames:v", &frames.to_string()])
        .args(["-c:v", "mpeg4", "-q:v", "2", "-pix_fmt", "yuv420p"])
        .arg(&path)
        .status()
        .ok()?;
    status.success().then_some(path)
}
