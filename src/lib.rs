//! # Docshelf
//!
//! A static gallery generator for PDF document shelves. Your filesystem is
//! the data source: every PDF in `pdfs/` becomes a gallery tile with a
//! cached first-page thumbnail, and whitelisted extra files anywhere in the
//! tree become a secondary download list.
//!
//! # Architecture: One Pass, Fixed Stages
//!
//! A single invocation runs a fixed stage sequence over one immutable
//! discovery result:
//!
//! ```text
//! 1. Scan       pdfs/       →  documents + extras   (filesystem → lists)
//! 2. Thumbnails documents   →  pdfs/static/*.webp   (skip-if-exists cache)
//! 3. Assets     —           →  logo, favicon, web manifest
//! 4. Worker     documents   →  service-worker.js    (offline asset list)
//! 5. Assemble   both lists  →  gallery.html
//! ```
//!
//! Stages 2, 4, and 5 consume the same ordered document list, which is the
//! load-bearing invariant of the whole system: tile order on the page, URL
//! order in the offline cache, and thumbnail keys on disk all come from one
//! discovery pass.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — primary documents (native listing order) and extra files (case-insensitive sort) |
//! | [`thumbs`] | Stage 2 — existence-keyed thumbnail cache with per-document failure containment |
//! | [`rendering`] | PDF rasterization + WebP encoding behind the [`RenderBackend`](rendering::RenderBackend) seam |
//! | [`assets`] | Logo, favicon, and web-manifest writers |
//! | [`offline`] | Offline asset list + service-worker script |
//! | [`assemble`] | Gallery markup via Maud |
//! | [`pipeline`] | Stage sequencing and the shared build context |
//! | [`naming`] | Display titles, thumbnail keys, percent-encoded URL paths |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Existence-Only Caching
//!
//! A thumbnail is valid because its file exists — no mtime, no content hash.
//! Editing a PDF does *not* refresh its thumbnail; deleting the `.webp`
//! does. This is a deliberate stale-tolerant policy: the steady-state run
//! over a shelf of hundreds of PDFs does zero rendering work, and the cache
//! survives `git checkout`, file syncs, and anything else that perturbs
//! timestamps. [`thumbs::ThumbStore`] makes the policy an explicit,
//! testable API rather than incidental behavior.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system: malformed markup is a build error, interpolation is
//! auto-escaped, and hostile filenames cannot break out of attributes. The
//! same reasoning applies to the other structured outputs — the web
//! manifest and the service worker's URL array are serialized with
//! `serde_json`, never concatenated by hand.
//!
//! ## One URL-Encoding Path
//!
//! Sanitized titles are for display; raw filenames are for URLs. Every URL
//! in the gallery markup and the offline asset list goes through
//! [`naming::encode_path`], so the two artifacts agree byte-for-byte on
//! every reference — getting this wrong doesn't error, it just silently
//! breaks offline availability.
//!
//! ## Sequential By Design
//!
//! Documents are processed one at a time, in discovery order. Each cache
//! check-then-render touches only its own derived path, so sequential
//! execution makes the check-then-write race-free without any locking.
//!
//! ## Offline-First Output
//!
//! Every generated site ships a service worker that pre-caches the gallery's
//! assets at install time, serves cache-first with a network fallback, and
//! answers with a plain-text offline response when both miss. The cache name
//! is versioned by the build, and stale versions are purged on activation.

pub mod assemble;
pub mod assets;
pub mod naming;
pub mod offline;
pub mod output;
pub mod pipeline;
pub mod rendering;
pub mod scan;
pub mod thumbs;
