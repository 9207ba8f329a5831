//! Thumbnail rendering — PDF page in, framed WebP out.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Rasterize page 0** | `pdfium-render` at 300/72 page scale |
//! | **Resample** | `image` Lanczos3 `resize_exact` to 332×443 |
//! | **Encode** | `image` lossless WebP encoder |
//!
//! The module is split into:
//! - **Parameters**: data structures describing one thumbnail operation
//! - **Backend**: [`RenderBackend`] trait + [`PdfiumBackend`]

pub mod backend;
mod params;
pub mod pdfium_backend;

pub use backend::{BackendError, RenderBackend};
pub use params::{Quality, ThumbnailParams, WebpParams};
pub use pdfium_backend::PdfiumBackend;
