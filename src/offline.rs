//! Offline asset list and service-worker generation.
//!
//! The service worker pre-caches a fixed, ordered list of URLs: the three
//! static assets first, then each document's thumbnail and the document
//! itself, in discovery order. The list is built here — from the same
//! document list the gallery is rendered from — and spliced into the worker
//! script as serialized JSON, never by hand-assembled string literals. A URL
//! that is wrong here doesn't raise an error anywhere; it just silently
//! breaks offline availability for that asset, which is why the gallery
//! markup and this list share one encoding path ([`naming::encode_path`]).
//!
//! URLs are relative to the static directory, which is the worker's scope:
//! thumbnails live beside the worker, documents one level up.

use crate::naming;
use crate::scan::Document;

/// The three fixed static assets, in pre-cache order.
pub const STATIC_ASSETS: [&str; 3] = ["logo.webp", "favicon.ico", "site.webmanifest"];

/// Versioned cache name. Deploying a new build changes the name, and the
/// worker purges every other cache on activation.
pub fn cache_name() -> String {
    format!("docshelf-v{}", env!("CARGO_PKG_VERSION"))
}

/// Ordered URL list the offline cache pre-fetches.
pub fn asset_list(documents: &[Document]) -> Vec<String> {
    let mut urls: Vec<String> = STATIC_ASSETS.iter().map(|s| s.to_string()).collect();
    for document in documents {
        urls.push(naming::encode_path(&naming::thumb_key(
            &document.relative_name,
        )));
        urls.push(naming::encode_path(&format!(
            "../{}",
            document.relative_name
        )));
    }
    urls
}

const SW_TEMPLATE: &str = include_str!("../static/sw.js");

/// Render the service-worker script.
///
/// Cache name and pre-cache list are injected as JSON values, so every
/// interpolation point is escaped by the serializer.
pub fn service_worker(documents: &[Document]) -> Result<String, serde_json::Error> {
    let name = serde_json::to_string(&cache_name())?;
    let urls = serde_json::to_string(&asset_list(documents))?;
    Ok(SW_TEMPLATE
        .replace("__CACHE_NAME__", &name)
        .replace("__PRECACHE_URLS__", &urls))
}
