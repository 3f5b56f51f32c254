//! Human-readable summary of a written output file.

use std::fmt;
use std::path::{Path, PathBuf};

use mono_dither::DitheredSequence;

use crate::media::OutputKind;
use crate::models::DisplayTarget;

const RULE_WIDTH: usize = 50;

/// Facts about a finished conversion, printed after the file is written.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputReport {
    pub path: PathBuf,
    pub kind: OutputKind,
    pub width: u32,
    pub height: u32,
    pub frames: usize,
    pub fps: u32,
    pub file_size: u64,
}

impl OutputReport {
    /// Build a report for a file that has just been written.
    pub fn from_written(
        path: &Path,
        kind: OutputKind,
        sequence: &DitheredSequence,
        fps: u32,
    ) -> std::io::Result<Self> {
        let file_size = std::fs::metadata(path)?.len();
        let (width, height) = sequence.dimensions().unwrap_or((0, 0));
        let frames = match kind {
            OutputKind::Png => sequence.len().min(1),
            OutputKind::Gif => sequence.len(),
        };
        Ok(Self {
            path: path.to_path_buf(),
            kind,
            width,
            height,
            frames,
            fps,
            file_size,
        })
    }

    /// Output canvas of the written frames.
    pub fn target(&self) -> DisplayTarget {
        DisplayTarget::new(self.width, self.height)
    }

    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frames as f64 / self.fps as f64
    }
}

impl fmt::Display for OutputReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let title = match self.kind {
            OutputKind::Png => "PNG",
            OutputKind::Gif => "GIF",
        };
        writeln!(f, "{rule}")?;
        writeln!(f, "Output specifications ({title})")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "File:       {}", self.path.display())?;
        let target = self.target();
        writeln!(
            f,
            "Dimensions: {}x{} pixels ({})",
            self.width,
            self.height,
            target.orientation()
        )?;
        writeln!(
            f,
            "Frame data: {} bytes packed at 1 bit per pixel",
            group_thousands(target.packed_frame_bytes() as u64)
        )?;
        match self.kind {
            OutputKind::Gif => {
                writeln!(f, "Frames:     {}", self.frames)?;
                writeln!(f, "FPS:        {}", self.fps)?;
                writeln!(f, "Duration:   {:.2} seconds", self.duration_secs())?;
                writeln!(
                    f,
                    "File size:  {:.2} MB ({} bytes)",
                    self.file_size as f64 / (1024.0 * 1024.0),
                    group_thousands(self.file_size)
                )?;
                writeln!(f, "Format:     Monochrome (1-bit)")?;
                writeln!(f, "Loop:       Infinite")?;
            }
            OutputKind::Png => {
                writeln!(
                    f,
                    "File size:  {:.2} KB ({} bytes)",
                    self.file_size as f64 / 1024.0,
                    group_thousands(self.file_size)
                )?;
                writeln!(f, "Format:     Monochrome (1-bit)")?;
                writeln!(f, "Type:       Single frame")?;
            }
        }
        write!(f, "{rule}")
    }
}

/// `1234567` -> `"1,234,567"`
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
