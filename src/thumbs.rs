//! Thumbnail cache for idempotent builds.
//!
//! Rendering a PDF page is the expensive step of the pipeline, so each
//! document's thumbnail is generated at most once and reused forever after.
//!
//! # Design
//!
//! The cache has no index structure: [`ThumbStore`] maps a key to a path
//! under the static directory, and the presence of a file at that path *is*
//! the cache entry. There is no modification-time or content check — a
//! present thumbnail is treated as valid even when its source PDF has
//! changed since. Regeneration happens only when the file is missing, which
//! in practice means a new document or a renamed one (renames orphan the old
//! key and populate a new one).
//!
//! ## Cache keys
//!
//! The key is the document filename stem plus `.webp`
//! ([`naming::thumb_key`]). Two source names that share a stem share one
//! thumbnail slot; the scan stage treats that as out of contract and nothing
//! here defends against it.
//!
//! ## Failure containment
//!
//! A document that fails to rasterize or encode is recorded in the
//! [`ThumbReport`] and skipped; the run continues with the remaining
//! documents. Later stages never see these failures — the failed document
//! still gets a gallery tile and an asset-list entry pointing at the missing
//! thumbnail.

use crate::naming;
use crate::rendering::{BackendError, RenderBackend, ThumbnailParams, WebpParams};
use crate::scan::Document;
use std::fmt;
use std::path::{Path, PathBuf};

/// Fixed output frame for every thumbnail.
pub const FRAME_WIDTH: u32 = 332;
pub const FRAME_HEIGHT: u32 = 443;

/// Rasterization scale: 300 DPI against the 72-DPI page baseline.
const RENDER_SCALE: f32 = 300.0 / 72.0;

/// Key→existence content store backed by the static directory.
pub struct ThumbStore {
    dir: PathBuf,
}

impl ThumbStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Cache key for a document.
    pub fn key_for(document: &Document) -> String {
        naming::thumb_key(&document.relative_name)
    }

    /// Filesystem path a key maps to.
    pub fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Whether the key is cached. Existence is the entire validity signal.
    pub fn contains(&self, key: &str) -> bool {
        self.path(key).exists()
    }
}

/// What [`ensure_thumbnail`] did for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbOutcome {
    /// The backend rendered and wrote a new thumbnail.
    Generated,
    /// The output path already existed; no work was performed.
    Cached,
}

/// Make sure a document's thumbnail exists, rendering it if absent.
pub fn ensure_thumbnail(
    store: &ThumbStore,
    backend: &impl RenderBackend,
    document: &Document,
) -> Result<ThumbOutcome, BackendError> {
    let key = ThumbStore::key_for(document);
    if store.contains(&key) {
        return Ok(ThumbOutcome::Cached);
    }

    backend.thumbnail(&ThumbnailParams {
        source: document.source_path.clone(),
        output: store.path(&key),
        page_index: 0,
        render_scale: RENDER_SCALE,
        frame_width: FRAME_WIDTH,
        frame_height: FRAME_HEIGHT,
        webp: WebpParams::default(),
    })?;
    Ok(ThumbOutcome::Generated)
}

/// One contained per-document failure.
#[derive(Debug, Clone)]
pub struct ThumbFailure {
    pub document: String,
    pub error: String,
}

/// Summary of a thumbnail pass.
#[derive(Debug, Default)]
pub struct ThumbReport {
    pub generated: u32,
    pub cached: u32,
    pub failures: Vec<ThumbFailure>,
}

impl ThumbReport {
    pub fn total(&self) -> u32 {
        self.generated + self.cached + self.failures.len() as u32
    }
}

impl fmt::Display for ThumbReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.is_empty() {
            write!(
                f,
                "{} rendered, {} cached ({} total)",
                self.generated,
                self.cached,
                self.total()
            )
        } else {
            write!(
                f,
                "{} rendered, {} cached, {} failed ({} total)",
                self.generated,
                self.cached,
                self.failures.len(),
                self.total()
            )
        }
    }
}

/// Run the cache pass over the whole document list, in order.
///
/// Never fails as a whole: per-document errors are collected into the
/// report and the remaining documents are still processed.
pub fn generate_all(
    store: &ThumbStore,
    backend: &impl RenderBackend,
    documents: &[Document],
) -> ThumbReport {
    let mut report = ThumbReport::default();
    for document in documents {
        match ensure_thumbnail(store, backend, document) {
            Ok(ThumbOutcome::Generated) => report.generated += 1,
            Ok(ThumbOutcome::Cached) => report.cached += 1,
            Err(error) => report.failures.push(ThumbFailure {
                document: document.relative_name.clone(),
                error: error.to_string(),
            }),
        }
    }
    report
}

/// Resolve the static directory path for a documents root.
pub fn static_dir(docs_dir: &Path) -> PathBuf {
    docs_dir.join("static")
}
