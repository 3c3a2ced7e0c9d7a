//! Compiler invocation: run the LaTeX engine and classify the outcome.
//!
//! ## Why an outcome, not an error?
//!
//! A non-zero engine exit is the *expected* way a broken fragment fails.
//! Modelling it as `Ok(CompileOutcome::Failure { .. })` keeps the subprocess
//! boundary honest: `Err` from this module means the engine could not even
//! be started, which is an environment problem, not a document problem. The
//! pipeline layer decides what a failed compile means.
//!
//! ## Flag choices
//!
//! * `-interaction=nonstopmode` — never prompt; an unattended pipeline must
//!   not block on TeX's interactive error loop. Unlike `batchmode`, errors
//!   still reach stdout, so a failed run has diagnostics worth dumping.
//! * `-halt-on-error` — stop at the first error instead of limping through
//!   and producing a misleading partial PDF.
//! * `-output-directory .` — with the subprocess CWD pinned to the working
//!   directory, every artifact lands where the workspace expects it.
//!
//! There is no timeout: a hung engine blocks the run indefinitely. Accepted
//! limitation of the one-shot CLI contract.

use crate::error::RenderError;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// The classified result of one engine run.
#[derive(Debug)]
pub enum CompileOutcome {
    /// Engine exited zero; the PDF should exist next to the wrapper.
    Success { stdout: String, stderr: String },
    /// Engine exited non-zero. Streams are kept for diagnostics.
    Failure {
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

impl CompileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileOutcome::Success { .. })
    }
}

/// Run `engine` against `tex_name` inside `work_dir`, capturing both streams.
///
/// Blocks until the engine exits. Streams are decoded lossily — TeX logs are
/// not guaranteed UTF-8 and replacement characters beat losing the
/// diagnostic entirely.
pub fn compile(engine: &str, work_dir: &Path, tex_name: &str) -> Result<CompileOutcome, RenderError> {
    debug!("Invoking {} on {} in {}", engine, tex_name, work_dir.display());

    let output = Command::new(engine)
        .arg("-interaction=nonstopmode")
        .arg("-halt-on-error")
        .arg("-output-directory")
        .arg(".")
        .arg(tex_name)
        .current_dir(work_dir)
        .output()
        .map_err(|e| RenderError::EngineNotFound {
            engine: engine.to_string(),
            detail: e.to_string(),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if output.status.success() {
        info!("{} succeeded ({} bytes of log output)", engine, stdout.len());
        Ok(CompileOutcome::Success { stdout, stderr })
    } else {
        info!("{} failed with status {:?}", engine, output.status.code());
        Ok(CompileOutcome::Failure {
            status: output.status.code(),
            stdout,
            stderr,
        })
    }
}
