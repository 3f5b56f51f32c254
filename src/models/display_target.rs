use mono_dither::{DEFAULT_TARGET_HEIGHT, DEFAULT_TARGET_WIDTH};

/// Output canvas for the pocket display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTarget {
    pub width: u32,
    pub height: u32,
}

impl DisplayTarget {
    /// Landscape canvas: 384x168 (the tool's default)
    pub const LANDSCAPE: Self = Self {
        width: DEFAULT_TARGET_WIDTH,
        height: DEFAULT_TARGET_HEIGHT,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    pub fn orientation(&self) -> &'static str {
        if self.is_portrait() {
            "portrait"
        } else {
            "landscape"
        }
    }

    /// Bytes per frame at 1 bit per pixel with byte-aligned rows
    pub fn packed_frame_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8) * self.height as usize
    }
}

impl Default for DisplayTarget {
    fn default() -> Self {
        Self::LANDSCAPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_landscape() {
        let target = DisplayTarget::default();
        assert_eq!((target.width, target.height), (384, 168));
        assert!(!target.is_portrait());
    }

    #[test]
    fn test_orientation() {
        assert_eq!(DisplayTarget::new(168, 384).orientation(), "portrait");
        assert_eq!(DisplayTarget::LANDSCAPE.orientation(), "landscape");
        assert_eq!(DisplayTarget::new(50, 50).orientation(), "landscape");
    }

    #[test]
    fn test_packed_frame_bytes() {
        assert_eq!(DisplayTarget::LANDSCAPE.packed_frame_bytes(), 48 * 168);
        assert_eq!(DisplayTarget::new(168, 384).packed_frame_bytes(), 21 * 384);
        assert_eq!(DisplayTarget::new(9, 2).packed_frame_bytes(), 4);
    }
}
