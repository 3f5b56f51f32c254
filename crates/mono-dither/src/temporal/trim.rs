//! Time-window trimming.

use std::ops::Range;

use crate::frame::FrameSequence;

/// Compute the half-open frame range covering `[start_time, end_time)`.
///
/// - `start_frame = clamp(floor(start_time * fps), 0, total - 1)`, or 0
/// - `end_frame = clamp(floor(end_time * fps), start_frame + 1, total)`,
///   or `total`
///
/// The clamps guarantee at least one frame whenever `total > 0`, even for a
/// window lying entirely past the end of the sequence.
pub fn trim_window(
    total: usize,
    fps: f64,
    start_time: Option<f64>,
    end_time: Option<f64>,
) -> Range<usize> {
    if total == 0 {
        return 0..0;
    }
    let last = total as i64 - 1;

    let start_frame = match start_time {
        Some(t) => frame_at(t, fps).clamp(0, last) as usize,
        None => 0,
    };

    let end_frame = match end_time {
        Some(t) => frame_at(t, fps)
            .min(total as i64)
            .max(start_frame as i64 + 1) as usize,
        None => total,
    };

    start_frame..end_frame
}

/// Frame index at time `t`; float-to-int casts saturate and map NaN to 0.
#[inline]
fn frame_at(t: f64, fps: f64) -> i64 {
    (t * fps).floor() as i64
}

/// Restrict a sequence to a time window given in seconds.
///
/// With both bounds absent the input is returned unchanged. The sequence's
/// own nominal frame rate converts times to frame indices.
pub fn trim(seq: FrameSequence, start_time: Option<f64>, end_time: Option<f64>) -> FrameSequence {
    if start_time.is_none() && end_time.is_none() {
        return seq;
    }

    let total = seq.len();
    let window = trim_window(total, seq.fps(), start_time, end_time);
    tracing::info!(
        start_frame = window.start,
        end_frame = window.end,
        start_secs = start_time.unwrap_or(0.0),
        end_secs = end_time.unwrap_or(total as f64 / seq.fps()),
        "Cutting frames"
    );

    let fps = seq.fps();
    let frames: Vec<_> = seq
        .into_frames()
        .into_iter()
        .skip(window.start)
        .take(window.len())
        .collect();
    FrameSequence::new(frames, fps)
}
