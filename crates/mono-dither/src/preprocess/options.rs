//! Tone adjustment options.
//!
//! This module provides [`ToneOptions`], the immutable configuration for
//! the tone stage, and [`RangeFilter`], a validated range-remap window.

/// A validated `[min, max)` window for the range filter.
///
/// Only constructible with `min < max`; a reversed or empty window means
/// "no filter", which [`RangeFilter::new`] expresses as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFilter {
    min: u8,
    max: u8,
}

impl RangeFilter {
    /// Returns `None` when `min >= max` (the filter is then a no-op).
    pub fn new(min: u8, max: u8) -> Option<Self> {
        (min < max).then_some(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> u8 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> u8 {
        self.max
    }
}

/// Configuration for the tone stage.
///
/// `ToneOptions` controls the sub-operations applied after grayscale
/// conversion, always in this order:
///
/// 1. Range filter (when a [`RangeFilter`] is set)
/// 2. Exposure (when `exposure != 0.0`)
/// 3. Inversion (when `invert` is set; `keep_black` leaves zeros alone)
///
/// # Defaults
///
/// The default is the neutral configuration: exposure 0.0, no range
/// filter, no inversion.
///
/// # Example
///
/// ```
/// use mono_dither::ToneOptions;
///
/// let options = ToneOptions::new()
///     .range(Some(50), Some(200))
///     .exposure(0.5)
///     .invert(true)
///     .keep_black(true);
///
/// assert_eq!(options.range_filter().map(|r| (r.min(), r.max())), Some((50, 200)));
///
/// // min >= max disables the filter instead of failing
/// let options = ToneOptions::new().range(Some(200), Some(50));
/// assert!(options.range_filter().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToneOptions {
    /// Exposure in stops; samples are scaled by `2^exposure`.
    ///
    /// Nominal domain is `[-2.0, 2.0]`. Negative darkens, positive brightens.
    pub exposure: f64,

    /// Effective range filter, already validated.
    range: Option<RangeFilter>,

    /// Invert the image before dithering.
    pub invert: bool,

    /// With `invert`, keep pure black (0) samples black.
    pub keep_black: bool,
}

impl ToneOptions {
    /// Create neutral tone options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set range filter bounds.
    ///
    /// The filter is enabled when either bound is supplied. A missing
    /// minimum defaults to 0 and a missing maximum to 255. When the
    /// resulting `min >= max` the filter is disabled.
    pub fn range(mut self, min: Option<u8>, max: Option<u8>) -> Self {
        self.range = if min.is_none() && max.is_none() {
            None
        } else {
            RangeFilter::new(min.unwrap_or(0), max.unwrap_or(255))
        };
        self
    }

    /// Set exposure in stops.
    #[inline]
    pub fn exposure(mut self, exposure: f64) -> Self {
        self.exposure = exposure;
        self
    }

    /// Set inversion.
    #[inline]
    pub fn invert(mut self, enabled: bool) -> Self {
        self.invert = enabled;
        self
    }

    /// Set keep-black mode (only meaningful with inversion).
    #[inline]
    pub fn keep_black(mut self, enabled: bool) -> Self {
        self.keep_black = enabled;
        self
    }

    /// The validated range filter, if any.
    #[inline]
    pub fn range_filter(&self) -> Option<RangeFilter> {
        self.range
    }

    /// True when no sub-operation would change a grayscale frame.
    pub fn is_neutral(&self) -> bool {
        self.range.is_none() && self.exposure == 0.0 && !self.invert
    }
}
