//! Rendering backend trait and shared error type.
//!
//! The [`RenderBackend`] trait is the seam between the cache layer and the
//! pixel work. One operation covers the whole render path: rasterize the
//! requested page, resample to the output frame, encode, write. The
//! production implementation is
//! [`PdfiumBackend`](super::pdfium_backend::PdfiumBackend); tests use a
//! recording mock that never touches a PDF.

use super::params::ThumbnailParams;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for thumbnail rendering backends.
///
/// The pipeline is single-threaded, so implementations are free to keep
/// lazily-initialized state behind plain interior mutability.
pub trait RenderBackend {
    /// Produce the thumbnail described by `params`. On success the output
    /// file exists in full at `params.output`; on error no partial file is
    /// left visible at that path.
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError>;
}
