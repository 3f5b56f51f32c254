//! Geometry normalization: aspect-preserving center crop, then resize.
//!
//! The output always exactly fills the target canvas. Content at the crop
//! edges is lost; no letterboxing or padding is ever introduced.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Pixel};

use super::error::GeometryError;
use crate::frame::Frame;

/// Region of the source frame kept by the center crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Compute the center crop matching the target aspect ratio `W / H`.
///
/// - Source wider than target: keep full height, crop width to
///   `floor(h * W / H)`, offset `(w - new_w) / 2`
/// - Otherwise: keep full width, crop height to `floor(w / (W / H))`,
///   offset `(h - new_h) / 2`
pub fn center_crop_rect(
    width: u32,
    height: u32,
    target_width: u32,
    target_height: u32,
) -> Result<CropRect, GeometryError> {
    if width == 0 || height == 0 {
        return Err(GeometryError::EmptySource { width, height });
    }
    if target_width == 0 || target_height == 0 {
        return Err(GeometryError::EmptyTarget {
            width: target_width,
            height: target_height,
        });
    }

    let target_ratio = target_width as f64 / target_height as f64;
    let current_ratio = width as f64 / height as f64;

    let rect = if current_ratio > target_ratio {
        let new_w = ((height as f64 * target_ratio) as u32).min(width);
        CropRect {
            x: (width - new_w) / 2,
            y: 0,
            width: new_w,
            height,
        }
    } else {
        let new_h = ((width as f64 / target_ratio) as u32).min(height);
        CropRect {
            x: 0,
            y: (height - new_h) / 2,
            width,
            height: new_h,
        }
    };

    if rect.width == 0 || rect.height == 0 {
        return Err(GeometryError::DegenerateCrop {
            width,
            height,
            target_width,
            target_height,
        });
    }
    Ok(rect)
}

/// Center-crop a frame to the target ratio and resize it to exactly
/// `target_width x target_height`.
///
/// Resampling uses a linear (triangle) filter. The channel layout of the
/// input is preserved.
pub fn normalize_geometry(
    frame: &Frame,
    target_width: u32,
    target_height: u32,
) -> Result<Frame, GeometryError> {
    let (width, height) = frame.dimensions();
    let rect = center_crop_rect(width, height, target_width, target_height)?;

    Ok(match frame {
        Frame::Rgb(img) => Frame::Rgb(crop_and_resize(img, rect, target_width, target_height)),
        Frame::Luma(img) => Frame::Luma(crop_and_resize(img, rect, target_width, target_height)),
    })
}

fn crop_and_resize<P>(
    img: &ImageBuffer<P, Vec<u8>>,
    rect: CropRect,
    target_width: u32,
    target_height: u32,
) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let cropped = imageops::crop_imm(img, rect.x, rect.y, rect.width, rect.height).to_image();
    if cropped.dimensions() == (target_width, target_height) {
        return cropped;
    }
    imageops::resize(&cropped, target_width, target_height, FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn test_wide_source_crops_width() {
        // 384x168 target, ratio ~2.2857; 1000x100 source is wider
        let rect = center_crop_rect(1000, 100, 384, 168).unwrap();
        assert_eq!(rect.height, 100);
        assert_eq!(rect.width, 228); // floor(100 * 384/168) = floor(228.57)
        assert_eq!(rect.x, (1000 - 228) / 2);
        assert_eq!(rect.y, 0);
    }

    #[test]
    fn test_tall_source_crops_height() {
        // 168x384 target, ratio 0.4375; 100x100 source is wider -> crop width
        let rect = center_crop_rect(100, 100, 168, 384).unwrap();
        assert_eq!(rect.width, 43); // floor(100 * 0.4375)
        assert_eq!(rect.x, 28);

        // 384x168 target; 100x100 source is taller -> crop height
        let rect = center_crop_rect(100, 100, 384, 168).unwrap();
        assert_eq!(rect.width, 100);
        assert_eq!(rect.height, 43); // floor(100 / 2.2857)
        assert_eq!(rect.y, 28);
    }

    #[test]
    fn test_matching_ratio_keeps_everything() {
        let rect = center_crop_rect(768, 336, 384, 168).unwrap();
        assert_eq!(
            rect,
            CropRect {
                x: 0,
                y: 0,
                width: 768,
                height: 336
            }
        );
    }

    #[test]
    fn test_output_dimensions_always_match_target() {
        let sources = [(1, 1), (100, 100), (1920, 1080), (37, 811), (500, 3)];
        for (w, h) in sources {
            let frame = Frame::from(RgbImage::from_pixel(w, h, Rgb([10, 20, 30])));
            for (tw, th) in [(168, 384), (384, 168), (8, 8)] {
                match normalize_geometry(&frame, tw, th) {
                    Ok(out) => assert_eq!(out.dimensions(), (tw, th), "{w}x{h} -> {tw}x{th}"),
                    Err(GeometryError::DegenerateCrop { .. }) => {
                        // only a 1-pixel-thin source can collapse to nothing
                        assert!(w == 1 || h == 1 || w < 8 || h < 8, "{w}x{h}");
                    }
                    Err(e) => panic!("unexpected error {e}"),
                }
            }
        }
    }

    #[test]
    fn test_channel_layout_preserved() {
        let luma = Frame::from(GrayImage::from_pixel(50, 50, Luma([77])));
        let out = normalize_geometry(&luma, 20, 10).unwrap();
        assert_eq!(out.channels(), 1);
        match out {
            Frame::Luma(img) => assert!(img.pixels().all(|p| p[0] == 77)),
            Frame::Rgb(_) => panic!("expected luma frame"),
        }
    }

    #[test]
    fn test_center_crop_takes_middle() {
        // 3 vertical bands: left black, middle white, right black.
        let img = GrayImage::from_fn(30, 10, |x, _| {
            if (10..20).contains(&x) {
                Luma([255])
            } else {
                Luma([0])
            }
        });
        // square target keeps the middle 10 columns only
        let out = normalize_geometry(&Frame::from(img), 10, 10).unwrap();
        match out {
            Frame::Luma(img) => assert!(img.pixels().all(|p| p[0] == 255)),
            Frame::Rgb(_) => panic!("expected luma frame"),
        }
    }

    #[test]
    fn test_empty_source_fails() {
        let frame = Frame::from(GrayImage::new(0, 10));
        assert_eq!(
            normalize_geometry(&frame, 10, 10),
            Err(GeometryError::EmptySource {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_empty_target_fails() {
        let frame = Frame::from(GrayImage::new(10, 10));
        assert!(matches!(
            normalize_geometry(&frame, 0, 10),
            Err(GeometryError::EmptyTarget { .. })
        ));
    }
}
