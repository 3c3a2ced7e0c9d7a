//! CLI binary for tikz2img.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `RenderConfig`, narrates pipeline stages to stdout, and translates
//! errors into exit codes.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tikz2img::{render, RenderConfig, RenderError, RenderProgressCallback, Stage};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Defaults: input.tikz → output.png at 300 DPI
  tikz2img

  # Explicit paths and resolution
  tikz2img -i figure.tikz -o figure.png -d 600

  # Fragment needs extra packages in the preamble
  tikz2img -i plot.tikz -p '\usepackage{pgfplots}\pgfplotsset{compat=1.18}'

  # JPEG output (format follows the extension)
  tikz2img -i figure.tikz -o figure.jpg

  # Use LuaLaTeX and keep the .tex/.log for inspection
  tikz2img -i figure.tikz --engine lualatex --keep-intermediates

  # Machine-readable run summary
  tikz2img -i figure.tikz --json

EXIT CODES:
  0  image written successfully
  1  input file missing, LaTeX compilation failed, or any other fatal error

ENVIRONMENT VARIABLES:
  TIKZ2IMG_ENGINE          Override the LaTeX engine (default: pdflatex)
  TIKZ2IMG_DPI             Override the output resolution
  PDFIUM_DYNAMIC_LIB_PATH  Directory containing libpdfium

SETUP:
  1. Install a TeX distribution with TikZ (TeX Live: texlive-pictures).
  2. Install a pdfium shared library (e.g. from bblanchon/pdfium-binaries)
     next to the tikz2img executable or system-wide.
"#;

/// Render a standalone TikZ fragment to a raster image.
#[derive(Parser, Debug)]
#[command(
    name = "tikz2img",
    version,
    about = "Render a standalone TikZ fragment to a raster image",
    long_about = "Wrap a TikZ picture fragment in a minimal standalone LaTeX document, \
compile it with an external LaTeX engine, rasterise the first page of the resulting PDF \
at the requested DPI, and remove every intermediate artifact.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the input TikZ fragment file.
    #[arg(short, long, default_value = "input.tikz")]
    input: PathBuf,

    /// Path to the output image; the extension selects the format.
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Output resolution in dots per inch.
    #[arg(short, long, env = "TIKZ2IMG_DPI", default_value_t = 300,
          value_parser = clap::value_parser!(u32).range(1..))]
    dpi: u32,

    /// Raw LaTeX preamble text inserted verbatim before \begin{document}.
    #[arg(
        short = 'p',
        long = "packages-input",
        visible_alias = "packagesInput",
        default_value = "",
        long_help = "Raw LaTeX preamble text (package imports, macro definitions) inserted \
verbatim before \\begin{document}. Not validated; a broken addendum surfaces as an \
ordinary compile failure."
    )]
    packages_input: String,

    /// LaTeX engine program to invoke.
    #[arg(long, env = "TIKZ2IMG_ENGINE", default_value = "pdflatex")]
    engine: String,

    /// Leave the .tex/.pdf/.aux/.log/.out intermediates on disk.
    #[arg(long)]
    keep_intermediates: bool,

    /// Print the run summary as JSON instead of a progress narration.
    #[arg(long)]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Narrates each pipeline stage to stdout.
struct StageNarrator;

impl RenderProgressCallback for StageNarrator {
    fn on_stage(&self, stage: Stage) {
        let line = match stage {
            Stage::Assemble => "Generating LaTeX file...",
            Stage::Compile => "Generating PDF...",
            Stage::Rasterise => "Converting PDF to PNG...",
            Stage::Cleanup => "Cleaning up...",
        };
        println!("{line}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = RenderConfig::builder()
        .dpi(cli.dpi)
        .preamble(cli.packages_input.clone())
        .engine(cli.engine.clone())
        .keep_intermediates(cli.keep_intermediates);
    if !cli.quiet && !cli.json {
        builder = builder.progress_callback(Arc::new(StageNarrator));
    }
    let config = builder.build()?;

    // ── Run the pipeline ─────────────────────────────────────────────────
    match render(&cli.input, &cli.output, &config) {
        Ok(output) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else if !cli.quiet {
                println!(
                    "Generated {} ({}x{} px)",
                    output.image_path.display(),
                    output.width,
                    output.height
                );
            }
            Ok(())
        }
        Err(e @ RenderError::InputNotFound { .. }) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        Err(RenderError::CompilationFailed {
            status,
            stdout,
            stderr,
        }) => {
            // Dump the captured engine streams verbatim to aid diagnosis.
            if !stdout.is_empty() {
                print!("{stdout}");
            }
            if !stderr.is_empty() {
                eprint!("{stderr}");
            }
            eprintln!("Error: LaTeX compilation failed (engine exit status: {status:?})");
            std::process::exit(1);
        }
        // Rasterisation, filesystem, and environment failures: fatal with
        // whatever diagnostic the underlying operation produced.
        Err(e) => Err(e.into()),
    }
}
