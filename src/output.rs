//! CLI output formatting for the build pipeline.
//!
//! Output is information-centric, not file-centric: the primary line for
//! each document is its positional index and display title, with the source
//! filename as indented context. Each section has a `format_*` function that
//! returns plain lines (pure, testable) and the single [`print_build_report`]
//! wrapper writes them to stdout.
//!
//! ```text
//! Documents
//! 001 Magazine issue 1
//!     Source: Magazine-issue-1.pdf
//! 002 Magazine issue 2
//!     Source: Magazine-issue-2.pdf
//!
//! Extra files
//! 001 algebra.ggb
//! 002 notes.txt
//!
//! Thumbnails: 1 rendered, 1 cached (2 total)
//! Generated gallery.html
//! ```

use crate::naming;
use crate::pipeline::BuildReport;
use crate::scan::ScanReport;
use crate::thumbs::ThumbReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Lines describing the discovery results.
pub fn format_scan_report(scan: &ScanReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Documents".to_string());
    for (idx, document) in scan.documents.iter().enumerate() {
        lines.push(format!(
            "{} {}",
            format_index(idx + 1),
            naming::display_title(&document.relative_name)
        ));
        lines.push(format!("    Source: {}", document.relative_name));
    }

    if !scan.extras.is_empty() {
        lines.push(String::new());
        lines.push("Extra files".to_string());
        for (idx, extra) in scan.extras.iter().enumerate() {
            lines.push(format!("{} {}", format_index(idx + 1), extra.display_name));
        }
    }

    lines
}

/// Lines describing the thumbnail pass, failures first.
pub fn format_thumb_report(thumbs: &ThumbReport) -> Vec<String> {
    let mut lines = Vec::new();
    for failure in &thumbs.failures {
        lines.push(format!("    failed {}: {}", failure.document, failure.error));
    }
    lines.push(format!("Thumbnails: {thumbs}"));
    lines
}

/// Full per-run report.
pub fn format_build_report(report: &BuildReport) -> Vec<String> {
    let mut lines = format_scan_report(&report.scan);
    lines.push(String::new());
    lines.extend(format_thumb_report(&report.thumbs));
    lines.push(format!("Generated {}", report.gallery_path.display()));
    lines
}

pub fn print_build_report(report: &BuildReport) {
    for line in format_build_report(report) {
        println!("{line}");
    }
}
