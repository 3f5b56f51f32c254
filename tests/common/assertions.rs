//! Assertion helpers for tests.

use std::path::Path;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, GrayImage};
use pretty_assertions::assert_eq;

/// Decoded animation frames as grayscale, with per-frame delays in ms.
pub struct DecodedGif {
    pub frames: Vec<GrayImage>,
    pub delays_ms: Vec<u32>,
}

/// Read back a GIF written by the converter.
pub fn read_gif(path: &Path) -> DecodedGif {
    let file = std::io::BufReader::new(std::fs::File::open(path).expect("open gif"));
    let decoder = GifDecoder::new(file).expect("decode gif header");
    let frames = decoder.into_frames().collect_frames().expect("decode gif frames");

    let delays_ms = frames
        .iter()
        .map(|f| {
            let (numer, denom) = f.delay().numer_denom_ms();
            numer / denom.max(1)
        })
        .collect();
    let frames = frames
        .into_iter()
        .map(|f| image::DynamicImage::ImageRgba8(f.into_buffer()).to_luma8())
        .collect();
    DecodedGif { frames, delays_ms }
}

/// Read back a PNG as grayscale.
pub fn read_png(path: &Path) -> GrayImage {
    image::open(path).expect("open png").to_luma8()
}

/// Assert every sample is 0 or 255
pub fn assert_binary(image: &GrayImage) {
    let stray = image.iter().find(|&&v| v != 0 && v != 255);
    assert_eq!(stray, None, "Expected only 0 and 255 samples");
}

/// Assert the file starts with the PNG signature
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path).expect("read output");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert the file starts with a GIF signature
pub fn assert_gif_file(path: &Path) {
    let bytes = std::fs::read(path).expect("read output");
    assert!(
        bytes.starts_with(b"GIF89a") || bytes.starts_with(b"GIF87a"),
        "Expected GIF, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..6.min(bytes.len())]
    );
}
