//! Centralized filename handling: display titles, thumbnail keys, URL paths.
//!
//! Every place a source filename surfaces — the gallery tile caption, the
//! thumbnail file on disk, the hyperlink in the markup, the offline asset
//! list — derives its string through one of these three functions, so the
//! three generated artifacts cannot drift apart.
//!
//! ## Display Titles
//!
//! Dashes and underscores become spaces and only the first character is
//! uppercased; the rest of the name is left exactly as written:
//! - `my-file_name.pdf` → "My file name"
//! - `ABC.pdf` → "ABC"

use std::path::Path;

/// Human-readable title for a source filename.
///
/// Strips the extension, converts `-` and `_` to spaces, and uppercases the
/// first character only. An empty stem yields an empty title.
pub fn display_title(filename: &str) -> String {
    let stem = file_stem(filename);
    let cleaned = stem.replace(['-', '_'], " ");
    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Thumbnail cache key for a document filename: the stem with a `.webp`
/// extension. Stable and hash-free, so renaming a source PDF orphans its old
/// thumbnail and regenerates under the new key.
pub fn thumb_key(filename: &str) -> String {
    format!("{}.webp", file_stem(filename))
}

/// Percent-encode a relative URL path, segment by segment.
///
/// Separators are preserved; everything inside a segment that is not an
/// unreserved character (spaces, `#`, non-ASCII, …) is encoded. The gallery
/// markup and the offline asset list both route through here, which is what
/// keeps their URLs byte-identical for the same file.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Filename minus its final extension, as a `&str`.
///
/// Mirrors `Path::file_stem`: a name with no dot (or only a leading dot)
/// is returned whole.
fn file_stem(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("")
}
