//! End-to-end integration tests for tikz2img.
//!
//! The full-pipeline tests invoke a real LaTeX engine and pdfium, so they
//! are gated behind the `TIKZ2IMG_E2E` environment variable and skip
//! themselves cleanly when `pdflatex` is not on PATH. The CLI exit-code
//! tests at the bottom need neither and always run.
//!
//! Run the gated suite with:
//!   TIKZ2IMG_E2E=1 cargo test --test e2e -- --nocapture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tikz2img::{render, RenderConfig, RenderError};

// ── Test helpers ─────────────────────────────────────────────────────────────

const MINIMAL_FRAGMENT: &str =
    r"\begin{tikzpicture}\draw (0,0) rectangle (2,1) node[midway] {hi};\end{tikzpicture}";

/// A fragment that only compiles when amssymb is in the preamble.
const AMSSYMB_FRAGMENT: &str =
    r"\begin{tikzpicture}\node at (0,0) {$\mathbb{R}$};\end{tikzpicture}";

const BROKEN_FRAGMENT: &str =
    r"\begin{tikzpicture}\drw (0,0) -- (1,1);\end{tikzpicture}";

/// Skip this test unless TIKZ2IMG_E2E is set *and* pdflatex is available.
macro_rules! e2e_skip_unless_ready {
    () => {{
        if std::env::var("TIKZ2IMG_E2E").is_err() {
            println!("SKIP — set TIKZ2IMG_E2E=1 to run e2e tests");
            return;
        }
        if Command::new("pdflatex").arg("--version").output().is_err() {
            println!("SKIP — pdflatex not found on PATH");
            return;
        }
    }};
}

fn write_fragment(dir: &Path, name: &str, body: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, body).unwrap();
    p
}

/// Assert no intermediate named after `stem` survived in `dir`.
fn assert_workspace_clean(dir: &Path, stem: &str) {
    for ext in ["tikz", "tex", "pdf", "aux", "log", "out"] {
        let leftover = dir.join(format!("{stem}.{ext}"));
        assert!(
            !leftover.exists(),
            "cleanup invariant violated: {} left behind",
            leftover.display()
        );
    }
}

fn config_for(work_dir: &Path, dpi: u32) -> RenderConfig {
    RenderConfig::builder()
        .work_dir(work_dir)
        .dpi(dpi)
        .build()
        .unwrap()
}

// ── Full-pipeline tests (gated; need pdflatex + pdfium) ──────────────────────

#[test]
fn render_minimal_fragment_produces_image_and_cleans_up() {
    e2e_skip_unless_ready!();
    let src = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let input = write_fragment(src.path(), "box.tikz", MINIMAL_FRAGMENT);
    let out = work.path().join("box-render.png");

    let output = render(&input, &out, &config_for(work.path(), 300)).expect("render should succeed");

    assert!(out.is_file());
    assert!(fs::metadata(&out).unwrap().len() > 0);
    assert!(output.width > 0 && output.height > 0);
    assert_workspace_clean(work.path(), "box");
}

#[test]
fn higher_dpi_scales_dimensions_proportionally() {
    e2e_skip_unless_ready!();
    let src = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let input = write_fragment(src.path(), "scale.tikz", MINIMAL_FRAGMENT);

    let lo = render(&input, &work.path().join("lo.png"), &config_for(work.path(), 150))
        .expect("150 DPI render");
    let hi = render(&input, &work.path().join("hi.png"), &config_for(work.path(), 300))
        .expect("300 DPI render");

    assert!(hi.width > lo.width);
    assert!(hi.height > lo.height);
    // 300/150 = 2, give or take one pixel of rounding per axis.
    assert!((hi.width as i64 - 2 * lo.width as i64).abs() <= 2);
    assert!((hi.height as i64 - 2 * lo.height as i64).abs() <= 2);
}

#[test]
fn broken_fragment_fails_with_diagnostics_and_cleans_up() {
    e2e_skip_unless_ready!();
    let src = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let input = write_fragment(src.path(), "broken.tikz", BROKEN_FRAGMENT);

    let err = render(&input, &work.path().join("out.png"), &config_for(work.path(), 300))
        .expect_err("broken fragment must fail");

    match err {
        RenderError::CompilationFailed { stdout, .. } => {
            // TeX error lines start with '!'.
            assert!(stdout.contains('!'), "expected engine diagnostics, got: {stdout}");
        }
        other => panic!("expected CompilationFailed, got {other:?}"),
    }
    assert_workspace_clean(work.path(), "broken");
    assert!(!work.path().join("out.png").exists());
}

#[test]
fn preamble_addendum_is_threaded_into_the_document() {
    e2e_skip_unless_ready!();
    let src = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let input = write_fragment(src.path(), "bb.tikz", AMSSYMB_FRAGMENT);

    // Without the package the fragment must not compile…
    let err = render(&input, &work.path().join("out.png"), &config_for(work.path(), 150))
        .expect_err("\\mathbb without amssymb must fail");
    assert!(err.is_compilation_failure());
    assert_workspace_clean(work.path(), "bb");

    // …and with it, it must.
    let config = RenderConfig::builder()
        .work_dir(work.path())
        .dpi(150)
        .preamble(r"\usepackage{amssymb}")
        .build()
        .unwrap();
    render(&input, &work.path().join("out.png"), &config).expect("amssymb preamble should fix it");
    assert!(work.path().join("out.png").is_file());
    assert_workspace_clean(work.path(), "bb");
}

#[test]
fn reruns_are_idempotent() {
    e2e_skip_unless_ready!();
    let src = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let input = write_fragment(src.path(), "idem.tikz", MINIMAL_FRAGMENT);
    let out = work.path().join("idem-out.png");
    let config = config_for(work.path(), 300);

    render(&input, &out, &config).expect("first run");
    let first_size = fs::metadata(&out).unwrap().len();
    assert_workspace_clean(work.path(), "idem");

    render(&input, &out, &config).expect("second run");
    let second_size = fs::metadata(&out).unwrap().len();
    assert_workspace_clean(work.path(), "idem");

    assert_eq!(first_size, second_size);
}

// ── CLI exit-code tests (ungated; no LaTeX or pdfium required) ───────────────

fn tikz2img_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tikz2img"))
}

#[test]
fn cli_missing_input_exits_one_naming_path_and_creates_nothing() {
    let work = tempfile::tempdir().unwrap();

    let out = tikz2img_cmd()
        .args(["-i", "nonexistent.tikz"])
        .current_dir(work.path())
        .output()
        .expect("binary should run");

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("nonexistent.tikz"), "stderr: {stderr}");
    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn cli_compile_failure_exits_one_and_cleans_up() {
    let src = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let input = write_fragment(src.path(), "fail.tikz", MINIMAL_FRAGMENT);

    // `false` stands in for an engine that rejects every document.
    let out = tikz2img_cmd()
        .arg("-i")
        .arg(&input)
        .args(["--engine", "false"])
        .current_dir(work.path())
        .output()
        .expect("binary should run");

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("compilation failed"), "stderr: {stderr}");
    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
    assert!(input.is_file());
}

#[cfg(unix)]
#[test]
fn cli_narrates_stages_up_to_the_failure() {
    let src = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let input = write_fragment(src.path(), "steps.tikz", MINIMAL_FRAGMENT);

    let out = tikz2img_cmd()
        .arg("-i")
        .arg(&input)
        .args(["--engine", "false"])
        .current_dir(work.path())
        .output()
        .expect("binary should run");

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Generating LaTeX file..."), "stdout: {stdout}");
    assert!(stdout.contains("Generating PDF..."), "stdout: {stdout}");
    assert!(stdout.contains("Cleaning up..."), "stdout: {stdout}");
    // The rasterisation stage is never reached on the failure branch.
    assert!(!stdout.contains("Converting PDF to PNG..."));
}

#[test]
fn cli_e2e_success_path() {
    e2e_skip_unless_ready!();
    let src = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let input = write_fragment(src.path(), "ok.tikz", MINIMAL_FRAGMENT);

    let out = tikz2img_cmd()
        .arg("-i")
        .arg(&input)
        .args(["-o", "ok-render.png", "-d", "200"])
        .current_dir(work.path())
        .output()
        .expect("binary should run");

    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Converting PDF to PNG..."), "stdout: {stdout}");
    assert!(work.path().join("ok-render.png").is_file());
    assert_workspace_clean(work.path(), "ok");
}
