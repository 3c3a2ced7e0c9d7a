//! Result types describing a completed render run.

use serde::Serialize;
use std::path::PathBuf;

/// The result of a successful render.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutput {
    /// Where the image was written — the only artifact that survives the run.
    pub image_path: PathBuf,

    /// Output image width in pixels.
    pub width: u32,

    /// Output image height in pixels.
    pub height: u32,

    /// Timing breakdown of the run.
    pub stats: RenderStats,
}

/// Timing statistics for one render run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderStats {
    /// Wall-clock time spent inside the LaTeX engine subprocess.
    pub compile_duration_ms: u64,

    /// Wall-clock time spent rasterising and encoding the image.
    pub raster_duration_ms: u64,

    /// Total wall-clock time for the whole pipeline.
    pub total_duration_ms: u64,
}
