//! Error types for the tikz2img library.
//!
//! One error enum, two kinds of variant:
//!
//! * [`RenderError::CompilationFailed`] — the **expected** failure. A TikZ
//!   fragment with a typo makes the LaTeX engine exit non-zero; that is a
//!   normal outcome of running user-authored source through a compiler. The
//!   pipeline catches it, cleans up the workspace, and hands the captured
//!   compiler streams back so the caller can show them.
//!
//! * Everything else — **unexpected** failures (missing input, unwritable
//!   output, a PDF that will not open after a verified-successful compile).
//!   These propagate fatally with whatever diagnostic the underlying
//!   operation produced.
//!
//! The split matters: callers must be able to branch on "your diagram did
//! not compile" without string-matching, while genuinely broken environments
//! still fail loudly.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the tikz2img library.
#[derive(Debug, Error)]
pub enum RenderError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("TikZ source file not found: {path:?}\nCheck the path exists and is readable.")]
    InputNotFound { path: PathBuf },

    /// Process does not have read permission on the input file.
    #[error("Permission denied reading {path:?}\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    // ── Workspace errors ──────────────────────────────────────────────────
    /// Copying the source or writing the wrapper document failed.
    #[error("Workspace error for {path:?}: {source}")]
    Workspace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Compiler errors ───────────────────────────────────────────────────
    /// The LaTeX engine binary could not be started at all.
    #[error(
        "LaTeX engine '{engine}' could not be started: {detail}\n\
         Install a TeX distribution (TeX Live, MiKTeX) or point --engine at one."
    )]
    EngineNotFound { engine: String, detail: String },

    /// The LaTeX engine ran but exited non-zero.
    ///
    /// This is the recoverable branch of the pipeline: the workspace has
    /// already been cleaned when this is returned. `stdout` and `stderr`
    /// hold the engine's captured streams, decoded lossily.
    #[error("LaTeX compilation failed (engine exit status: {status:?})")]
    CompilationFailed {
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },

    // ── Rasterisation errors ──────────────────────────────────────────────
    /// pdfium could not open or render the compiled PDF.
    ///
    /// Only reachable after a verified-successful compile, so this points at
    /// a toolchain or library inconsistency rather than bad user input.
    #[error("Rasterisation failed for {path:?}: {detail}")]
    RasterisationFailed { path: PathBuf, detail: String },

    /// The output path's extension maps to no known image format.
    #[error("Unsupported output image format for {path:?}\nUse a common raster extension such as .png or .jpg.")]
    UnsupportedFormat { path: PathBuf },

    /// Could not encode or write the output image.
    #[error("Failed to write output image {path:?}: {detail}")]
    OutputWriteFailed { path: PathBuf, detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\
         Set PDFIUM_DYNAMIC_LIB_PATH to the directory containing libpdfium."
    )]
    PdfiumBindingFailed(String),
}

impl RenderError {
    /// True for the recoverable compile-failure branch of the pipeline.
    pub fn is_compilation_failure(&self) -> bool {
        matches!(self, RenderError::CompilationFailed { .. })
    }
}
