//! The build pipeline: explicit stages over one immutable context.
//!
//! Execution order is fixed:
//!
//! ```text
//! 1. Scan       pdfs/            →  ScanReport   (documents + extras)
//! 2. Thumbnails ScanReport       →  pdfs/static/<stem>.webp  (cache-skipped)
//! 3. Logo       —                →  pdfs/static/logo.webp
//! 4. Favicon    logo             →  pdfs/static/favicon.ico
//! 5. Manifest   site name        →  pdfs/static/site.webmanifest
//! 6. Worker     ScanReport       →  pdfs/static/service-worker.js
//! 7. Assemble   ScanReport       →  gallery.html
//! ```
//!
//! Stages 2, 6, and 7 consume the *same* `ScanReport`, borrowed immutably —
//! on-page order, asset-list order, and on-disk thumbnail keys cannot drift
//! because there is exactly one discovery pass and nothing mutates it.
//!
//! Only stage 1 and output writes can fail the build. Per-document rendering
//! failures stay inside the stage-2 report.

use crate::rendering::{PdfiumBackend, RenderBackend};
use crate::scan::{self, ScanError, ScanReport};
use crate::thumbs::{self, ThumbReport, ThumbStore};
use crate::{assemble, assets, naming, offline};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Documents directory name under the process root.
pub const DOCS_DIR: &str = "pdfs";

/// Gallery output file at the process root.
pub const GALLERY_FILE: &str = "gallery.html";

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("scan failed: {0}")]
    Scan(#[from] ScanError),
    #[error("asset generation failed: {0}")]
    Asset(#[from] assets::AssetError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything a finished run reports back to the CLI.
#[derive(Debug)]
pub struct BuildReport {
    pub scan: ScanReport,
    pub thumbs: ThumbReport,
    pub gallery_path: PathBuf,
}

/// Run the full pipeline against a process root with the production backend.
pub fn build(root: &Path) -> Result<BuildReport, BuildError> {
    build_with_backend(root, &PdfiumBackend::new())
}

/// Run the full pipeline with a specific backend (allows testing with the
/// mock).
pub fn build_with_backend(
    root: &Path,
    backend: &impl RenderBackend,
) -> Result<BuildReport, BuildError> {
    let docs_dir = root.join(DOCS_DIR);
    let static_dir = thumbs::static_dir(&docs_dir);

    // Discovery first: a missing or unreadable documents root is fatal
    // before anything is written.
    let scan = scan::scan(root, &docs_dir)?;
    fs::create_dir_all(&static_dir)?;

    let store = ThumbStore::new(&static_dir);
    let thumbs = thumbs::generate_all(&store, backend, &scan.documents);

    let logo_path = static_dir.join("logo.webp");
    assets::write_logo(&logo_path)?;
    assets::write_favicon(&logo_path, &static_dir.join("favicon.ico"))?;

    let site_name = site_name(root);
    assets::write_manifest(&static_dir.join("site.webmanifest"), &site_name)?;

    let worker = offline::service_worker(&scan.documents)?;
    fs::write(static_dir.join("service-worker.js"), worker)?;

    let gallery_path = root.join(GALLERY_FILE);
    assemble::write_gallery(&gallery_path, &site_name, &scan.documents, &scan.extras)?;

    Ok(BuildReport {
        scan,
        thumbs,
        gallery_path,
    })
}

/// Sanitized basename of the process root — the site and manifest name.
fn site_name(root: &Path) -> String {
    let canonical = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    let base = canonical
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    naming::display_title(&base)
}
