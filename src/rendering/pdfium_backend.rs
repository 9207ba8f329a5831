//! pdfium-backed thumbnail renderer.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Rasterize PDF page | `pdfium-render` (`render_with_config` → `as_image`) |
//! | Resample to frame | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → WebP | `image::codecs::webp::WebPEncoder` (lossless) |
//! | Atomic write | `tempfile::NamedTempFile` + rename into place |
//!
//! The pdfium library itself is bound lazily, on the first cache miss. A run
//! where every thumbnail already exists never loads it at all.

use super::backend::{BackendError, RenderBackend};
use super::params::{ThumbnailParams, WebpParams};
use image::DynamicImage;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use once_cell::unsync::OnceCell;
use pdfium_render::prelude::*;
use std::path::Path;

/// Production backend driving the PDFium library.
pub struct PdfiumBackend {
    pdfium: OnceCell<Pdfium>,
}

impl PdfiumBackend {
    pub fn new() -> Self {
        Self {
            pdfium: OnceCell::new(),
        }
    }

    /// Bind the PDFium library on first use.
    ///
    /// Search order: the executable's directory, the working directory, then
    /// the system library.
    fn pdfium(&self) -> Result<&Pdfium, BackendError> {
        self.pdfium.get_or_try_init(|| {
            if let Some(exe_dir) = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(Path::to_path_buf))
                && let Ok(bindings) =
                    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&exe_dir))
            {
                return Ok(Pdfium::new(bindings));
            }

            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| Pdfium::bind_to_system_library())
                .map(Pdfium::new)
                .map_err(|e| {
                    BackendError::ProcessingFailed(format!("failed to load pdfium: {e:?}"))
                })
        })
    }
}

impl Default for PdfiumBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for PdfiumBackend {
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError> {
        let pdfium = self.pdfium()?;

        // Document, page, and bitmap handles all live inside this block and
        // are released before the encode, so a failing document cannot hold
        // resources across the next one.
        let raster: DynamicImage = {
            let document = pdfium
                .load_pdf_from_file(&params.source, None)
                .map_err(|e| {
                    BackendError::ProcessingFailed(format!(
                        "failed to open {}: {e}",
                        params.source.display()
                    ))
                })?;
            let page = document.pages().get(params.page_index).map_err(|e| {
                BackendError::ProcessingFailed(format!(
                    "no page {} in {}: {e}",
                    params.page_index,
                    params.source.display()
                ))
            })?;
            let config = PdfRenderConfig::new().scale_page_by_factor(params.render_scale);
            page.render_with_config(&config)
                .map_err(|e| {
                    BackendError::ProcessingFailed(format!(
                        "failed to rasterize {}: {e}",
                        params.source.display()
                    ))
                })?
                .as_image()
        };

        let framed = raster.resize_exact(
            params.frame_width,
            params.frame_height,
            FilterType::Lanczos3,
        );
        save_webp(&framed, &params.output, &params.webp)
    }
}

/// Encode to WebP and move into place.
///
/// The encode goes to a named temp file in the destination directory and is
/// renamed onto the final path afterwards, so a concurrent existence check
/// never observes a half-written thumbnail.
fn save_webp(img: &DynamicImage, output: &Path, webp: &WebpParams) -> Result<(), BackendError> {
    if !webp.lossless {
        // The image crate ships a lossless-only WebP encoder; the quality
        // setting is configuration the encoder does not consult.
        return Err(BackendError::ProcessingFailed(
            "lossy WebP output is not supported".into(),
        ));
    }

    let dir = output.parent().ok_or_else(|| {
        BackendError::ProcessingFailed(format!("no parent directory for {}", output.display()))
    })?;
    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    let encoder = WebPEncoder::new_lossless(&mut staged);
    img.write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("WebP encode failed: {e}")))?;
    staged.persist(output).map_err(|e| BackendError::Io(e.error))?;
    Ok(())
}
