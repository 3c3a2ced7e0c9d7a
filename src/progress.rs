//! Progress-callback trait for pipeline stage events.
//!
//! Inject an [`Arc<dyn RenderProgressCallback>`] via
//! [`crate::config::RenderConfigBuilder::progress_callback`] to receive an
//! event each time the pipeline enters a new stage.
//!
//! # Why callbacks instead of printing from the library?
//!
//! The CLI narrates each stage to stdout ("Generating PDF..." and so on),
//! but a library consumer embedding tikz2img in a larger tool wants those
//! events routed elsewhere — a status bar, a log record, nothing at all.
//! The callback keeps the library silent on stdout while letting the host
//! application present progress however it likes.

use serde::Serialize;
use std::sync::Arc;

/// The stages of one render run, in execution order.
///
/// [`Stage::Cleanup`] fires on both the success and the failure branch;
/// [`Stage::Rasterise`] only after a successful compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    /// Writing the LaTeX wrapper document.
    Assemble,
    /// Running the external LaTeX engine.
    Compile,
    /// Rendering the first PDF page to pixels and encoding the image.
    Rasterise,
    /// Removing intermediate artifacts.
    Cleanup,
}

/// Called by the pipeline as it moves through its stages.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. The pipeline is single-threaded, but the trait is
/// `Send + Sync` so the same callback can be shared across sequential runs
/// from different threads.
pub trait RenderProgressCallback: Send + Sync {
    /// Called when the pipeline enters `stage`.
    fn on_stage(&self, stage: Stage) {
        let _ = stage;
    }

    /// Called once after a successful run with the output image dimensions.
    fn on_complete(&self, width: u32, height: u32) {
        let _ = (width, height);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl RenderProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::RenderConfig`].
pub type ProgressCallback = Arc<dyn RenderProgressCallback>;
