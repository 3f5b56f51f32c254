//! Frame-budget sampling.

use crate::frame::FrameSequence;

/// Indices selected when reducing `total` frames to at most `max_frames`.
///
/// Returns `0..total` when the sequence already fits. Otherwise
/// `step = total / max_frames` and the `i`-th selected index is
/// `floor(i * step)`. Indices never reach `total`. Duplicates are allowed;
/// the goal is even coverage, not deduplication.
pub fn sample_indices(total: usize, max_frames: usize) -> Vec<usize> {
    if total <= max_frames {
        return (0..total).collect();
    }

    let step = total as f64 / max_frames as f64;
    (0..max_frames)
        .map(|i| (i as f64 * step) as usize)
        .filter(|&idx| idx < total)
        .collect()
}

/// Reduce a sequence to at most `max_frames` frames by even index sampling.
///
/// A sequence that already fits is returned unchanged. Order is preserved;
/// frames are never reordered.
pub fn sample(seq: FrameSequence, max_frames: usize) -> FrameSequence {
    if seq.len() <= max_frames {
        return seq;
    }

    let indices = sample_indices(seq.len(), max_frames);
    let frames = indices.iter().map(|&i| seq.frames()[i].clone()).collect();
    let reduced = seq.with_frames(frames);
    tracing::info!(
        from = seq.len(),
        to = reduced.len(),
        "Reduced frame count"
    );
    reduced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;
    use image::GrayImage;

    fn blank(count: usize) -> FrameSequence {
        FrameSequence::new(vec![Frame::from(GrayImage::new(1, 1)); count], 10.0)
    }

    #[test]
    fn test_fits_budget_unchanged() {
        let seq = blank(5);
        assert_eq!(sample(seq.clone(), 5), seq);
        assert_eq!(sample(seq.clone(), 100), seq);
    }

    #[test]
    fn test_exact_budget_length() {
        for (n, m) in [(10, 3), (100, 7), (11, 10), (1000, 999)] {
            assert_eq!(sample(blank(n), m).len(), m, "n={n} m={m}");
        }
    }

    #[test]
    fn test_even_indices() {
        // step = 2.5
        assert_eq!(sample_indices(10, 4), vec![0, 2, 5, 7]);
        // step = 3.0
        assert_eq!(sample_indices(9, 3), vec![0, 3, 6]);
    }

    #[test]
    fn test_indices_monotonic_and_in_range() {
        let idx = sample_indices(97, 13);
        assert!(idx.windows(2).all(|w| w[0] <= w[1]));
        assert!(idx.iter().all(|&i| i < 97));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(sample_indices(123, 17), sample_indices(123, 17));
    }
}
