//! Filesystem discovery: primary documents and extra files.
//!
//! Stage 1 of the build pipeline. Two independent scans over the documents
//! root produce the ordered lists every later stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! .                                # Process root
//! ├── gallery.html                 # Generated gallery page
//! └── pdfs/                        # Documents root
//!     ├── Magazine-issue-1.pdf     # Primary document
//!     ├── Magazine-issue-2.pdf
//!     ├── worksheets/
//!     │   ├── algebra.ggb          # Extra file (whitelisted extension)
//!     │   └── notes.txt            # Extra file
//!     └── static/                  # Generated assets (thumbnails, logo, …)
//! ```
//!
//! ## Ordering
//!
//! - **Documents**: whatever order the directory listing yields. That native
//!   order is the canonical display order for the whole run — the thumbnail
//!   pass, the asset list, and the gallery tiles all consume this list as-is.
//! - **Extra files**: sorted case-insensitively by filename, the one place an
//!   explicit sort is required regardless of host filesystem ordering.
//!
//! ## Failure
//!
//! An unreadable documents root or subtree aborts the scan. A partial gallery
//! is worse than no gallery, so nothing is silently omitted.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("documents root {0} is not readable")]
    RootUnreadable(PathBuf, #[source] std::io::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// One primary PDF, located directly in the documents root.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Path to the PDF on disk.
    pub source_path: PathBuf,
    /// Filename component; derives the display title and the thumbnail key.
    /// Assumed unique within a run — colliding stems share a thumbnail slot.
    pub relative_name: String,
}

/// One non-PDF auxiliary file found anywhere under the documents tree.
#[derive(Debug, Clone, Serialize)]
pub struct ExtraFile {
    /// Original filename, shown as the link text.
    pub display_name: String,
    /// Path relative to the process root, `/`-separated on every platform.
    pub relative_path: String,
}

/// Result of the discovery stage. Immutable once built; later stages borrow
/// it and never reorder it.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub documents: Vec<Document>,
    pub extras: Vec<ExtraFile>,
}

/// Extensions picked up by the extra-file scan (matched case-insensitively).
const EXTRA_EXTENSIONS: &[&str] = &[
    "ggb", "zip", "rar", "7z", "doc", "docx", "xlsx", "ods", "odt", "txt", "ppt", "pptx", "py",
    "ipynb",
];

/// Run both scans over the documents root.
///
/// `process_root` anchors the relative paths recorded for extra files;
/// `docs_dir` is the directory listed for primary documents and walked for
/// extras.
pub fn scan(process_root: &Path, docs_dir: &Path) -> Result<ScanReport, ScanError> {
    let documents = scan_documents(docs_dir)?;
    let extras = scan_extras(process_root, docs_dir)?;
    Ok(ScanReport { documents, extras })
}

/// Non-recursive listing of the documents root. `.pdf` files (any case)
/// become Documents in native enumeration order — no sort is applied.
fn scan_documents(docs_dir: &Path) -> Result<Vec<Document>, ScanError> {
    let entries =
        fs::read_dir(docs_dir).map_err(|e| ScanError::RootUnreadable(docs_dir.to_path_buf(), e))?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !has_extension(&path, &["pdf"]) {
            continue;
        }
        let relative_name = entry.file_name().to_string_lossy().into_owned();
        documents.push(Document {
            source_path: path,
            relative_name,
        });
    }
    Ok(documents)
}

/// Recursive walk for whitelisted extra files, sorted case-insensitively by
/// filename. Walk errors (unreadable subtree) propagate as fatal.
fn scan_extras(process_root: &Path, docs_dir: &Path) -> Result<Vec<ExtraFile>, ScanError> {
    let mut extras = Vec::new();
    for entry in WalkDir::new(docs_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() || !has_extension(entry.path(), EXTRA_EXTENSIONS) {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(process_root)
            .unwrap_or(entry.path());
        extras.push(ExtraFile {
            display_name: entry.file_name().to_string_lossy().into_owned(),
            relative_path: relative.to_string_lossy().replace('\\', "/"),
        });
    }

    extras.sort_by_key(|extra| extra.display_name.to_lowercase());
    Ok(extras)
}

/// Case-insensitive extension membership test.
fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| allowed.iter().any(|a| ext.eq_ignore_ascii_case(a)))
}
