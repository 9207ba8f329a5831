//! Fixed static assets: logo, favicon, web-app manifest.
//!
//! These are plain writers with no caching or ordering concerns — every run
//! overwrites all three. The logo is synthesized in-process with `image`
//! buffer operations (a crimson ground with a white document-sheet glyph),
//! the favicon is the logo resampled and re-encoded as ICO, and the manifest
//! is a serde struct serialized to pretty JSON.

use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Logo canvas edge, and the size advertised in the manifest.
pub const LOGO_SIZE: u32 = 256;
const FAVICON_SIZE: u32 = 128;

/// Crimson ground (#dc143c) — also the manifest theme color.
const GROUND: Rgb<u8> = Rgb([220, 20, 60]);
const INK: Rgb<u8> = Rgb([255, 255, 255]);
const THEME_COLOR: &str = "#dc143c";

/// Synthesize and write the logo as lossless WebP.
pub fn write_logo(path: &Path) -> Result<(), AssetError> {
    let img = draw_logo(LOGO_SIZE);
    let file = fs::File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = WebPEncoder::new_lossless(writer);
    DynamicImage::ImageRgb8(img).write_with_encoder(encoder)?;
    Ok(())
}

/// Crimson square with a white sheet glyph: a centered page rectangle, a
/// folded top-right corner, and three text bars.
fn draw_logo(size: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(size, size, GROUND);

    // Page rectangle, roughly 45% × 60% of the canvas, centered.
    let page_w = size * 45 / 100;
    let page_h = size * 60 / 100;
    let page_x = (size - page_w) / 2;
    let page_y = (size - page_h) / 2;
    fill_rect(&mut img, page_x, page_y, page_w, page_h, INK);

    // Folded corner: crimson triangle over the page's top-right.
    let fold = page_w / 3;
    for dy in 0..fold {
        for dx in 0..fold {
            if dx + dy < fold {
                img.put_pixel(page_x + page_w - 1 - dx, page_y + dy, GROUND);
            }
        }
    }

    // Three text bars in the lower half of the page.
    let bar_w = page_w * 2 / 3;
    let bar_h = size / 32;
    let bar_x = page_x + (page_w - bar_w) / 2;
    for row in 0..3 {
        let bar_y = page_y + page_h / 2 + row * bar_h * 2;
        fill_rect(&mut img, bar_x, bar_y, bar_w, bar_h, GROUND);
    }

    img
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    for py in y..(y + h).min(img.height()) {
        for px in x..(x + w).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}

/// Derive the favicon from the logo: decode, resample to 128×128, encode ICO.
pub fn write_favicon(logo_path: &Path, favicon_path: &Path) -> Result<(), AssetError> {
    let logo = image::open(logo_path)?;
    let icon = logo
        .resize_exact(FAVICON_SIZE, FAVICON_SIZE, FilterType::Lanczos3)
        .into_rgba8();
    icon.save_with_format(favicon_path, image::ImageFormat::Ico)?;
    Ok(())
}

/// Web-app manifest descriptor, serialized verbatim to `site.webmanifest`.
#[derive(Debug, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub description: String,
    pub icons: Vec<ManifestIcon>,
}

#[derive(Debug, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Build the manifest for a site name (the sanitized process-root basename).
pub fn web_manifest(site_name: &str) -> WebManifest {
    WebManifest {
        name: site_name.to_string(),
        short_name: format!("{site_name} App"),
        start_url: "../../gallery.html".to_string(),
        display: "standalone".to_string(),
        background_color: THEME_COLOR.to_string(),
        theme_color: THEME_COLOR.to_string(),
        description: "PDF document gallery with cached thumbnails".to_string(),
        icons: vec![
            ManifestIcon {
                src: "logo.webp".to_string(),
                sizes: format!("{LOGO_SIZE}x{LOGO_SIZE}"),
                mime_type: "image/webp".to_string(),
            },
            ManifestIcon {
                src: "favicon.ico".to_string(),
                sizes: "128x128 64x64 32x32 24x24 16x16".to_string(),
                mime_type: "image/x-icon".to_string(),
            },
        ],
    }
}

/// Serialize and write the manifest.
pub fn write_manifest(path: &Path, site_name: &str) -> Result<(), AssetError> {
    let json = serde_json::to_string_pretty(&web_manifest(site_name))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn logo_is_decodable_at_canvas_size() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("logo.webp");
        write_logo(&path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (LOGO_SIZE, LOGO_SIZE));
    }

    #[test]
    fn logo_has_ground_and_glyph_pixels() {
        let img = draw_logo(LOGO_SIZE);
        // Corner is untouched ground; the canvas center sits on the page.
        assert_eq!(*img.get_pixel(0, 0), GROUND);
        assert_eq!(*img.get_pixel(LOGO_SIZE / 2, LOGO_SIZE * 2 / 5), INK);
    }

    #[test]
    fn favicon_derived_from_logo() {
        let tmp = TempDir::new().unwrap();
        let logo = tmp.path().join("logo.webp");
        let favicon = tmp.path().join("favicon.ico");
        write_logo(&logo).unwrap();
        write_favicon(&logo, &favicon).unwrap();

        let decoded = image::open(&favicon).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (128, 128));
    }

    #[test]
    fn favicon_without_logo_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = write_favicon(&tmp.path().join("missing.webp"), &tmp.path().join("f.ico"));
        assert!(result.is_err());
    }

    #[test]
    fn manifest_fields() {
        let manifest = web_manifest("Math shelf");
        assert_eq!(manifest.name, "Math shelf");
        assert_eq!(manifest.short_name, "Math shelf App");
        assert_eq!(manifest.start_url, "../../gallery.html");
        assert_eq!(manifest.theme_color, "#dc143c");
        assert_eq!(manifest.icons.len(), 2);
    }

    #[test]
    fn manifest_serializes_icon_type_field() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.webmanifest");
        write_manifest(&path, "Shelf").unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["display"], "standalone");
        assert_eq!(value["icons"][0]["type"], "image/webp");
        assert_eq!(value["icons"][1]["src"], "favicon.ico");
    }
}
