//! Pipeline stages for TikZ-to-image rendering.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch LaTeX engines) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ workspace ──▶ assemble ──▶ compile ──▶ raster
//! (path)    (copy+names)  (.tex)       (pdflatex)   (pdfium → image)
//! ```
//!
//! 1. [`input`]     — confirm the TikZ source file exists and is readable
//! 2. [`workspace`] — copy the source into the working directory, derive all
//!    artifact names, and guarantee cleanup on every exit path
//! 3. [`assemble`]  — wrap the fragment in a minimal standalone document
//! 4. [`compile`]   — run the LaTeX engine with captured streams; non-zero
//!    exit is a classified outcome, not an error
//! 5. [`raster`]    — render the first PDF page at the requested DPI and
//!    encode the output image

pub mod assemble;
pub mod compile;
pub mod input;
pub mod raster;
pub mod workspace;
