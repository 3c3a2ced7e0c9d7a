//! Configuration types for TikZ-to-image rendering.
//!
//! All rendering behaviour is controlled through [`RenderConfig`], built via
//! its [`RenderConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share configs across runs and to diff two invocations to
//! understand why their outputs differ.

use crate::error::RenderError;
use crate::progress::ProgressCallback;
use std::fmt;
use std::path::PathBuf;

/// The default LaTeX engine program name.
pub const DEFAULT_ENGINE: &str = "pdflatex";

/// PDF user space runs at 72 points per inch; the raster scale factor is
/// `dpi / POINTS_PER_INCH`.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Configuration for one TikZ-to-image render.
///
/// Built via [`RenderConfig::builder()`] or using
/// [`RenderConfig::default()`].
///
/// # Example
/// ```rust
/// use tikz2img::RenderConfig;
///
/// let config = RenderConfig::builder()
///     .dpi(600)
///     .preamble(r"\usepackage{amssymb}")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct RenderConfig {
    /// Output resolution in dots per inch. Default: 300.
    ///
    /// The PDF coordinate space is 72 points per inch, so the rasteriser
    /// scales both axes by `dpi / 72`. 300 is crisp enough for print; 96–150
    /// suits screen-only use.
    pub dpi: u32,

    /// Raw LaTeX preamble text inserted verbatim before `\begin{document}`.
    /// Default: empty.
    ///
    /// Used to declare extra packages or macros the fragment depends on
    /// (e.g. `\usepackage{amssymb}`). Trusted input; never escaped or
    /// validated.
    pub preamble: String,

    /// LaTeX engine program to invoke. Default: `pdflatex`.
    ///
    /// `lualatex` and `xelatex` accept the same batch-mode flags and work as
    /// drop-in replacements for fragments needing their font stacks.
    pub engine: String,

    /// Directory where intermediate artifacts live. Default: `"."`.
    ///
    /// The copied source, the wrapper `.tex`, the compiled `.pdf`, and the
    /// engine's side-files are all created here and removed at end of run.
    /// One invocation per directory at a time; concurrent runs sharing a
    /// directory will collide.
    pub work_dir: PathBuf,

    /// Leave intermediate artifacts on disk after the run. Default: false.
    ///
    /// Debugging aid: inspect the generated `.tex` or the engine's `.log`
    /// after a confusing failure.
    pub keep_intermediates: bool,

    /// Optional progress callback receiving per-stage events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            preamble: String::new(),
            engine: DEFAULT_ENGINE.to_string(),
            work_dir: PathBuf::from("."),
            keep_intermediates: false,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderConfig")
            .field("dpi", &self.dpi)
            .field("preamble", &self.preamble)
            .field("engine", &self.engine)
            .field("work_dir", &self.work_dir)
            .field("keep_intermediates", &self.keep_intermediates)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn RenderProgressCallback>"),
            )
            .finish()
    }
}

impl RenderConfig {
    /// Create a new builder for `RenderConfig`.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder {
            config: Self::default(),
        }
    }

    /// The uniform scale factor applied to both axes when rasterising.
    pub fn scale_factor(&self) -> f32 {
        self.dpi as f32 / POINTS_PER_INCH
    }
}

/// Builder for [`RenderConfig`].
#[derive(Debug)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi;
        self
    }

    pub fn preamble(mut self, preamble: impl Into<String>) -> Self {
        self.config.preamble = preamble.into();
        self
    }

    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.config.engine = engine.into();
        self
    }

    pub fn work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.work_dir = dir.into();
        self
    }

    pub fn keep_intermediates(mut self, v: bool) -> Self {
        self.config.keep_intermediates = v;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<RenderConfig, RenderError> {
        let c = &self.config;
        if c.dpi == 0 {
            return Err(RenderError::InvalidConfig("DPI must be >= 1".into()));
        }
        if c.engine.trim().is_empty() {
            return Err(RenderError::InvalidConfig(
                "Engine program name must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}
