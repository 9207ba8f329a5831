use clap::Parser;
use docshelf::{output, pipeline};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "docshelf")]
#[command(about = "Static gallery generator for PDF document shelves")]
#[command(long_about = "\
Static gallery generator for PDF document shelves

Run it in a directory containing a pdfs/ folder and it produces an
offline-capable gallery page with a cached first-page thumbnail per PDF.
Thumbnails already on disk are never re-rendered; everything else is
regenerated on every run.

Layout:

  .                              # Process root (default: current directory)
  ├── gallery.html               # Generated gallery page
  └── pdfs/                      # Your PDFs, listed as gallery tiles
      ├── Magazine-issue-1.pdf
      ├── worksheets/            # Any extra files (.ggb, .zip, .txt, …)
      │   └── algebra.ggb        #   are linked in a secondary section
      └── static/                # Generated: thumbnails, logo, favicon,
                                 #   web manifest, service worker

Exit status is non-zero only when discovery fails (pdfs/ missing or
unreadable) or an output cannot be written; a PDF that fails to render is
reported and skipped.")]
#[command(version = version_string())]
struct Cli {
    /// Process root containing the pdfs/ documents directory
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let report = pipeline::build(&cli.root)?;
    output::print_build_report(&report);
    Ok(())
}
