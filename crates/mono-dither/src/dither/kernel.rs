//! Error diffusion kernel definitions.
//!
//! This module defines the diffusion kernels for the five error diffusion
//! algorithms. Each kernel specifies how quantization error is distributed
//! to neighboring pixels that have not been visited yet.
//!
//! The weights are fixed for output compatibility, including kernels that
//! do not propagate exactly 100% of the error: [`ATKINSON`] (5/8),
//! [`SIERRA`] (7/4) and [`STUCKI`] (36/42).

/// An error diffusion kernel.
///
/// The kernel defines how quantization error is distributed to neighboring
/// pixels that haven't been processed yet. Each entry specifies an offset
/// (dx, dy) and a weight for that neighbor.
///
/// # Error Propagation
///
/// The total error propagated is `sum(weights) / divisor`. Offsets outside
/// the frame are skipped and their share is lost, never redistributed.
///
/// # Buffer Sizing
///
/// The `max_dy` field indicates how many rows ahead the kernel reaches,
/// which determines the error buffer depth needed: `max_dy + 1` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (0 = current row, positive = rows below)
    /// - `weight`: numerator; each neighbor receives `error * weight / divisor`
    pub entries: &'static [(i32, i32, u8)],

    /// Divisor shared by all weights.
    pub divisor: u8,

    /// Maximum dy value in entries.
    pub max_dy: usize,
}

impl Kernel {
    /// Fraction of the quantization error the kernel hands on.
    pub fn propagation(&self) -> f64 {
        let sum: u32 = self.entries.iter().map(|&(_, _, w)| w as u32).sum();
        sum as f64 / self.divisor as f64
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    max_dy: 1,
};

/// Atkinson dithering kernel, five-neighbor variant.
///
/// The classic kernel has six neighbors; this one omits bottom-left, so
/// only 5/8 of the error is carried and 3/8 is discarded at every pixel.
///
/// ```text
///        X   1   1
///        1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1), // right
        (0, 1, 1), // bottom
        (1, 1, 1), // bottom-right
        (2, 0, 1), // two right
        (0, 2, 1), // two below
    ],
    divisor: 8,
    max_dy: 2,
};

/// Sierra kernel, compatibility variant.
///
/// Shaped like Sierra Lite extended by one column, with weights summing to
/// 7/4 of the error. The error is amplified rather than conserved.
///
/// ```text
///        X   2   1
///    1   2   1
/// ```
pub const SIERRA: Kernel = Kernel {
    entries: &[
        (1, 0, 2),
        (2, 0, 1),
        (-1, 1, 1),
        (0, 1, 2),
        (1, 1, 1),
    ],
    divisor: 4,
    max_dy: 1,
};

/// Burkes dithering kernel.
///
/// Distributes error to 7 neighbors over 2 rows with 100% propagation (32/32).
///
/// ```text
///            X   8   4
///    2   4   8   4   2
/// ```
pub const BURKES: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
    ],
    divisor: 32,
    max_dy: 1,
};

/// Stucki kernel, compatibility variant.
///
/// The third row is narrower than textbook Stucki (three entries instead
/// of five), so 36/42 of the error is carried.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///        1   2   1
/// ```
pub const STUCKI: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-1, 2, 1),
        (0, 2, 2),
        (1, 2, 1),
    ],
    divisor: 42,
    max_dy: 2,
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [(&str, Kernel); 5] = [
        ("floyd-steinberg", FLOYD_STEINBERG),
        ("atkinson", ATKINSON),
        ("sierra", SIERRA),
        ("burkes", BURKES),
        ("stucki", STUCKI),
    ];

    fn weight_sum(kernel: &Kernel) -> u32 {
        kernel.entries.iter().map(|&(_, _, w)| w as u32).sum()
    }

    #[test]
    fn test_floyd_steinberg_propagation_100_percent() {
        assert_eq!(weight_sum(&FLOYD_STEINBERG), 16);
        assert_eq!(FLOYD_STEINBERG.divisor, 16);
    }

    #[test]
    fn test_atkinson_propagation_five_eighths() {
        assert_eq!(weight_sum(&ATKINSON), 5, "Atkinson should have 5 weight units");
        assert_eq!(ATKINSON.divisor, 8);
        assert!((ATKINSON.propagation() - 0.625).abs() < f64::EPSILON);
        assert!(
            !ATKINSON.entries.iter().any(|&(dx, dy, _)| (dx, dy) == (-1, 1)),
            "bottom-left neighbor must stay omitted"
        );
    }

    #[test]
    fn test_sierra_amplifies_error() {
        assert_eq!(weight_sum(&SIERRA), 7);
        assert_eq!(SIERRA.divisor, 4);
        assert!((SIERRA.propagation() - 1.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_burkes_propagation_100_percent() {
        assert_eq!(weight_sum(&BURKES), 32);
        assert_eq!(BURKES.divisor, 32);
    }

    #[test]
    fn test_stucki_weights() {
        assert_eq!(weight_sum(&STUCKI), 36);
        assert_eq!(STUCKI.divisor, 42);
    }

    #[test]
    fn test_max_dy_matches_entries() {
        for (name, kernel) in ALL {
            let actual = kernel
                .entries
                .iter()
                .map(|&(_, dy, _)| dy as usize)
                .max()
                .unwrap();
            assert_eq!(actual, kernel.max_dy, "{name} max_dy mismatch");
        }
    }

    #[test]
    fn test_only_unvisited_neighbors() {
        // Row-major scan: same-row targets must lie to the right.
        for (name, kernel) in ALL {
            for &(dx, dy, _) in kernel.entries {
                assert!(dy > 0 || dx > 0, "{name} diffuses backwards to ({dx}, {dy})");
            }
        }
    }

    #[test]
    fn test_kernel_entry_count() {
        assert_eq!(FLOYD_STEINBERG.entries.len(), 4);
        assert_eq!(ATKINSON.entries.len(), 5);
        assert_eq!(SIERRA.entries.len(), 5);
        assert_eq!(BURKES.entries.len(), 7);
        assert_eq!(STUCKI.entries.len(), 10);
    }
}
