//! Tone adjustment: grayscale, range filter, exposure, inversion.
//!
//! Every operation returns a new grayscale frame. Results that leave the
//! 8-bit domain are clamped to `[0, 255]` and then truncated.

use image::{GrayImage, Luma};

use super::options::{RangeFilter, ToneOptions};
use crate::frame::Frame;

/// BT.601 luma in 14-bit fixed point with rounding.
///
/// `Y = (4899 R + 9617 G + 1868 B + 2^13) >> 14`
#[inline]
pub fn luma_bt601(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 4899 + g as u32 * 9617 + b as u32 * 1868 + (1 << 13)) >> 14) as u8
}

/// Reduce a frame to one channel. Luma frames pass through unchanged.
pub fn to_gray(frame: &Frame) -> GrayImage {
    match frame {
        Frame::Luma(img) => img.clone(),
        Frame::Rgb(img) => GrayImage::from_fn(img.width(), img.height(), |x, y| {
            let [r, g, b] = img.get_pixel(x, y).0;
            Luma([luma_bt601(r, g, b)])
        }),
    }
}

/// Remap `[min, max]` linearly onto `[0, 255]`.
///
/// `v' = clamp((v - min) / (max - min) * 255, 0, 255)`, truncated.
pub fn filter_range(img: &GrayImage, filter: RangeFilter) -> GrayImage {
    let min = filter.min() as f64;
    let span = (filter.max() - filter.min()) as f64;
    map_samples(img, |v| clamp_u8((v as f64 - min) / span * 255.0))
}

/// Scale every sample by `2^exposure`, clamped to `[0, 255]`.
///
/// Exposure 0.0 returns an exact copy.
pub fn adjust_exposure(img: &GrayImage, exposure: f64) -> GrayImage {
    if exposure == 0.0 {
        return img.clone();
    }
    let gain = 2.0_f64.powf(exposure);
    map_samples(img, |v| clamp_u8(v as f64 * gain))
}

/// Negate every sample (`255 - v`).
///
/// With `keep_black`, samples equal to 0 stay 0 and only samples above 0
/// are negated, so masked or letterboxed regions remain black.
pub fn invert(img: &GrayImage, keep_black: bool) -> GrayImage {
    if keep_black {
        map_samples(img, |v| if v == 0 { 0 } else { 255 - v })
    } else {
        map_samples(img, |v| 255 - v)
    }
}

/// Run the full tone stage on one frame.
pub fn apply_tone(frame: &Frame, options: &ToneOptions) -> GrayImage {
    let mut gray = to_gray(frame);

    if let Some(filter) = options.range_filter() {
        gray = filter_range(&gray, filter);
    }
    if options.exposure != 0.0 {
        gray = adjust_exposure(&gray, options.exposure);
    }
    if options.invert {
        gray = invert(&gray, options.keep_black);
    }
    gray
}

#[inline]
fn clamp_u8(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

fn map_samples(img: &GrayImage, f: impl Fn(u8) -> u8) -> GrayImage {
    let mut out = img.clone();
    for sample in out.iter_mut() {
        *sample = f(*sample);
    }
    out
}
