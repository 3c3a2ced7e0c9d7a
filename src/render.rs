//! Top-level pipeline orchestration.
//!
//! One entry point, [`render`], wiring the stages together:
//!
//! ```text
//! Validated → Prepared → Assembled → Compiled ──┬─▶ Rasterised → CleanedUp → Ok
//!                                               └─▶ (failure)  → CleanedUp → Err
//! ```
//!
//! The chain is strictly sequential with a single branch on the compile
//! outcome; there is no retry. Cleanup is owned by the
//! [`Workspace`](crate::pipeline::workspace::Workspace) drop guard, so both
//! arms of the branch — and any panic past the prepare step — release the
//! intermediate artifacts.

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::output::{RenderOutput, RenderStats};
use crate::pipeline::compile::CompileOutcome;
use crate::pipeline::{assemble, compile, input, raster, workspace::Workspace};
use crate::progress::Stage;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Render a TikZ fragment file to a raster image.
///
/// # Arguments
/// * `input`  — path to the TikZ fragment (a `tikzpicture` environment, not
///   a full document)
/// * `output` — destination image path; the extension selects the format
/// * `config` — rendering configuration
///
/// # Errors
/// * [`RenderError::InputNotFound`] — `input` does not reference a file; no
///   artifacts are created.
/// * [`RenderError::CompilationFailed`] — the engine rejected the fragment;
///   the workspace has been cleaned and the captured engine streams are in
///   the error.
/// * Any other variant — fatal environment or I/O failure; the workspace is
///   still cleaned via the drop guard.
pub fn render(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<RenderOutput, RenderError> {
    let total_start = Instant::now();
    let input = input.as_ref();
    let output = output.as_ref();
    info!("Rendering {} → {}", input.display(), output.display());

    let stage = |s: Stage| {
        if let Some(ref cb) = config.progress_callback {
            cb.on_stage(s);
        }
    };

    // ── Validated ────────────────────────────────────────────────────────
    let source = input::resolve_source(input)?;

    // ── Prepared ─────────────────────────────────────────────────────────
    let mut ws = Workspace::prepare(&source, &config.work_dir)?;
    if config.keep_intermediates {
        ws.keep_intermediates();
    }

    // ── Assembled ────────────────────────────────────────────────────────
    stage(Stage::Assemble);
    assemble::write_document(&ws, &config.preamble)?;

    // ── Compiled (the single branch) ─────────────────────────────────────
    stage(Stage::Compile);
    let compile_start = Instant::now();
    let outcome = compile::compile(&config.engine, ws.work_dir(), &ws.tex_name())?;
    let compile_duration_ms = compile_start.elapsed().as_millis() as u64;

    if let CompileOutcome::Failure {
        status,
        stdout,
        stderr,
    } = outcome
    {
        stage(Stage::Cleanup);
        drop(ws);
        return Err(RenderError::CompilationFailed {
            status,
            stdout,
            stderr,
        });
    }

    // ── Rasterised ───────────────────────────────────────────────────────
    stage(Stage::Rasterise);
    let raster_start = Instant::now();
    let (width, height) = raster::rasterise_first_page(&ws.pdf_path(), output, config.scale_factor())?;
    let raster_duration_ms = raster_start.elapsed().as_millis() as u64;

    // ── CleanedUp ────────────────────────────────────────────────────────
    stage(Stage::Cleanup);
    drop(ws);

    let stats = RenderStats {
        compile_duration_ms,
        raster_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };
    info!(
        "Rendered {}x{} px in {}ms (compile {}ms, raster {}ms)",
        width, height, stats.total_duration_ms, stats.compile_duration_ms, stats.raster_duration_ms
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_complete(width, height);
    }

    Ok(RenderOutput {
        image_path: output.to_path_buf(),
        width,
        height,
        stats,
    })
}
