//! # tikz2img
//!
//! Render standalone TikZ fragments to raster images by driving an external
//! LaTeX toolchain and the pdfium PDF renderer.
//!
//! ## Why this crate?
//!
//! TikZ produces beautiful vector diagrams, but getting a PNG out of one
//! fragment means hand-writing a wrapper document, running `pdflatex`,
//! converting the PDF, and sweeping up the `.aux`/`.log` litter — every
//! single time. This crate turns that ritual into one call (or one CLI
//! invocation) with guaranteed cleanup on every exit path, including a
//! failed compile.
//!
//! ## Pipeline Overview
//!
//! ```text
//! fragment.tikz
//!  │
//!  ├─ 1. Input      validate the source path exists
//!  ├─ 2. Workspace  copy the fragment in, derive artifact names
//!  ├─ 3. Assemble   minimal \documentclass[tikz]{standalone} wrapper
//!  ├─ 4. Compile    pdflatex, batch mode, streams captured
//!  ├─ 5. Rasterise  first PDF page via pdfium at dpi/72 scale
//!  └─ 6. Cleanup    delete every intermediate (success *and* failure)
//! ```
//!
//! The heavy lifting — TikZ layout, PDF parsing, pixel compositing — is
//! entirely delegated to the LaTeX engine and pdfium. This crate is the
//! sequencing and error handling around those two process/library
//! boundaries.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tikz2img::{render, RenderConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RenderConfig::builder()
//!         .dpi(300)
//!         .preamble(r"\usepackage{amssymb}")
//!         .build()?;
//!     let output = render("figure.tikz", "figure.png", &config)?;
//!     println!("{} ({}x{} px)", output.image_path.display(), output.width, output.height);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `tikz2img` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! tikz2img = { version = "0.1", default-features = false }
//! ```
//!
//! ## External requirements
//!
//! * A LaTeX engine on `PATH` (`pdflatex` by default; TeX Live or MiKTeX).
//! * A pdfium shared library, next to the executable or installed
//!   system-wide (`PDFIUM_DYNAMIC_LIB_PATH` is honoured by pdfium-render).
//!
//! ## Concurrency contract
//!
//! One invocation per working directory at a time. All intermediates are
//! named from the source file's base name, so two concurrent runs sharing a
//! directory (or a base name) will collide and clean up each other's live
//! artifacts.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod render;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{RenderConfig, RenderConfigBuilder, DEFAULT_ENGINE, POINTS_PER_INCH};
pub use error::RenderError;
pub use output::{RenderOutput, RenderStats};
pub use progress::{NoopProgressCallback, ProgressCallback, RenderProgressCallback, Stage};
pub use render::render;
