//! Gallery page generation.
//!
//! The final stage of the pipeline: a pure rendering function from the
//! discovered lists to a single markup document, written to `gallery.html`
//! at the process root. The page is fully regenerated and overwritten every
//! run — unlike thumbnails, it is never cache-skipped.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating:
//! malformed markup is a build error, interpolation is auto-escaped, and
//! there is no template directory to ship. The stylesheet and page script
//! are embedded at compile time with `include_str!`.
//!
//! ## Layout Classes
//!
//! The tile grid's layout class is keyed on document *count*, not viewport
//! width alone: exactly one document renders single-column (`few-1`),
//! exactly two render two-column (`few-2`), anything else gets the default
//! multi-column grid.

use crate::naming;
use crate::scan::{Document, ExtraFile};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/gallery.js");

/// Grid class for a document count.
fn grid_class(count: usize) -> &'static str {
    match count {
        1 => "doc-grid few-1",
        2 => "doc-grid few-2",
        _ => "doc-grid",
    }
}

/// Render the gallery page.
pub fn render_gallery(site_name: &str, documents: &[Document], extras: &[ExtraFile]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (site_name) }
                link rel="icon" type="image/x-icon" href="pdfs/static/favicon.ico";
                link rel="manifest" href="pdfs/static/site.webmanifest";
                style { (PreEscaped(CSS)) }
            }
            body {
                div #backdrop {}
                div #logo {
                    img src="pdfs/static/logo.webp" alt=(site_name);
                }
                div class=(grid_class(documents.len())) {
                    @for document in documents {
                        (render_tile(document))
                    }
                }
                @if !extras.is_empty() {
                    (render_extras(extras))
                }
                footer.nav-footer {
                    a.nav-btn href="index.html" { "Home" }
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// One gallery tile: thumbnail linked to the document, title below.
/// Opens the document in a new browsing context.
fn render_tile(document: &Document) -> Markup {
    let title = naming::display_title(&document.relative_name);
    let thumb_url = naming::encode_path(&format!(
        "pdfs/static/{}",
        naming::thumb_key(&document.relative_name)
    ));
    let doc_url = naming::encode_path(&format!("pdfs/{}", document.relative_name));

    html! {
        div.doc-tile {
            a href=(doc_url) target="_blank" rel="noopener" {
                img.doc-thumbnail src=(thumb_url) alt=(title) loading="lazy";
            }
            p.doc-title { (title) }
        }
    }
}

/// Secondary listing of extra files, rendered only when non-empty.
fn render_extras(extras: &[ExtraFile]) -> Markup {
    html! {
        section.extra-files {
            h2 { "Other files" }
            ul {
                @for extra in extras {
                    li {
                        a href=(naming::encode_path(&extra.relative_path)) target="_blank" rel="noopener" {
                            (extra.display_name)
                        }
                    }
                }
            }
        }
    }
}

/// Render and overwrite the gallery file.
pub fn write_gallery(
    path: &Path,
    site_name: &str,
    documents: &[Document],
    extras: &[ExtraFile],
) -> std::io::Result<()> {
    fs::write(path, render_gallery(site_name, documents, extras).into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offline;

    fn document(name: &str) -> Document {
        Document {
            source_path: format!("pdfs/{name}").into(),
            relative_name: name.to_string(),
        }
    }

    fn extra(name: &str, path: &str) -> ExtraFile {
        ExtraFile {
            display_name: name.to_string(),
            relative_path: path.to_string(),
        }
    }

    #[test]
    fn page_starts_with_doctype() {
        let page = render_gallery("Shelf", &[], &[]).into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn one_tile_per_document_in_discovery_order() {
        let documents = vec![document("zeta.pdf"), document("alpha.pdf")];
        let page = render_gallery("Shelf", &documents, &[]).into_string();

        assert_eq!(page.matches(r#"class="doc-tile""#).count(), 2);
        let zeta = page.find("zeta.webp").unwrap();
        let alpha = page.find("alpha.webp").unwrap();
        assert!(zeta < alpha, "tiles must keep discovery order");
    }

    #[test]
    fn layout_class_single_document() {
        let page = render_gallery("S", &[document("a.pdf")], &[]).into_string();
        assert!(page.contains(r#"class="doc-grid few-1""#));
    }

    #[test]
    fn layout_class_two_documents() {
        let documents = vec![document("a.pdf"), document("b.pdf")];
        let page = render_gallery("S", &documents, &[]).into_string();
        assert!(page.contains(r#"class="doc-grid few-2""#));
    }

    #[test]
    fn layout_class_default_for_zero_and_three() {
        let empty = render_gallery("S", &[], &[]).into_string();
        assert!(empty.contains(r#"class="doc-grid""#));
        assert!(!empty.contains(r#"class="doc-grid few-"#));

        let three: Vec<Document> = ["a.pdf", "b.pdf", "c.pdf"]
            .iter()
            .map(|n| document(n))
            .collect();
        let page = render_gallery("S", &three, &[]).into_string();
        assert!(page.contains(r#"class="doc-grid""#));
        assert!(!page.contains(r#"class="doc-grid few-"#));
    }

    #[test]
    fn tile_links_open_in_new_context() {
        let page = render_gallery("S", &[document("Dawn Issue.pdf")], &[]).into_string();
        assert!(page.contains(r#"href="pdfs/Dawn%20Issue.pdf" target="_blank""#));
        assert!(page.contains(r#"src="pdfs/static/Dawn%20Issue.webp""#));
    }

    #[test]
    fn tile_shows_sanitized_title() {
        let page = render_gallery("S", &[document("my-file_name.pdf")], &[]).into_string();
        assert!(page.contains(">My file name</p>"));
    }

    #[test]
    fn extras_section_only_when_non_empty() {
        let none = render_gallery("S", &[], &[]).into_string();
        assert!(!none.contains(r#"class="extra-files""#));

        let some = render_gallery(
            "S",
            &[],
            &[extra("notes.txt", "pdfs/sub dir/notes.txt")],
        )
        .into_string();
        assert!(some.contains(r#"class="extra-files""#));
        assert!(some.contains("Other files"));
        assert!(some.contains(r#"href="pdfs/sub%20dir/notes.txt""#));
        assert!(some.contains(">notes.txt</a>"));
    }

    #[test]
    fn markup_urls_match_offline_asset_list() {
        let documents = vec![document("Dawn Issue #4.pdf"), document("plain.pdf")];
        let page = render_gallery("S", &documents, &[]).into_string();
        let assets = offline::asset_list(&documents);

        for url in &assets[offline::STATIC_ASSETS.len()..] {
            // Thumbnail entries are relative to the static dir, document
            // entries one level above it; the page addresses both from the
            // process root.
            let on_page = match url.strip_prefix("../") {
                Some(doc) => format!("pdfs/{doc}"),
                None => format!("pdfs/static/{url}"),
            };
            assert!(page.contains(&on_page), "asset {url} missing from markup");
        }
    }

    #[test]
    fn hostile_filename_is_escaped() {
        let page = render_gallery(
            "S",
            &[document("<script>alert('x')</script>.pdf")],
            &[],
        )
        .into_string();
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn page_registers_service_worker_and_links_home() {
        let page = render_gallery("S", &[], &[]).into_string();
        assert!(page.contains("pdfs/static/service-worker.js"));
        assert!(page.contains(r#"a class="nav-btn" href="index.html""#));
        assert!(page.contains(r#"rel="manifest""#));
    }
}
