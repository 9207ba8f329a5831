//! Parameter types for thumbnail rendering.
//!
//! These structs describe *what* to produce, not *how* to produce it. They
//! are the interface between [`thumbs`](crate::thumbs) (which decides which
//! thumbnails are needed) and the [`backend`](super::backend) (which does the
//! rasterizing and encoding). Swapping the backend — the mock in tests, the
//! pdfium one in production — never changes the cache logic.

use std::path::PathBuf;

/// Quality setting for image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(80)
    }
}

/// WebP encoder configuration, passed through to the encoder as-is.
///
/// Both fields are carried literally: `lossless` selects the encoder mode,
/// and `quality` is whatever that mode makes of it (the lossless encoder
/// ignores it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebpParams {
    pub quality: Quality,
    pub lossless: bool,
}

impl Default for WebpParams {
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            lossless: true,
        }
    }
}

/// Full specification for one thumbnail: which page of which document,
/// rendered at what scale, framed to what size, written where.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Page to rasterize. Always 0 in this pipeline.
    pub page_index: u16,
    /// Rasterization scale relative to the 72-DPI page baseline.
    pub render_scale: f32,
    /// Final output frame; the raster is resampled to exactly this size.
    pub frame_width: u32,
    pub frame_height: u32,
    pub webp: WebpParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(80).value(), 80);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_80() {
        assert_eq!(Quality::default().value(), 80);
    }

    #[test]
    fn webp_default_is_lossless_at_80() {
        let webp = WebpParams::default();
        assert!(webp.lossless);
        assert_eq!(webp.quality.value(), 80);
    }
}
