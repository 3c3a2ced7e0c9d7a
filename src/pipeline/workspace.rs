//! Workspace preparation and guaranteed cleanup of intermediate artifacts.
//!
//! ## Why a `Drop` guard?
//!
//! The run must leave no `.tex`/`.pdf`/`.aux`/`.log`/`.out` files behind on
//! *any* exit path — successful render, failed compile, or a panic inside
//! the rasteriser. A manually invoked cleanup function covers only the paths
//! the author remembered to call it from; tying cleanup to [`Workspace`]'s
//! destructor covers all of them. Deletion is best-effort: a file that was
//! never produced (the engine writes `.out` only for documents with an
//! outline) or that fails to delete does not fail the run.
//!
//! ## Why copy the source into the working directory?
//!
//! The wrapper document references the fragment with `\input{<name>}` and
//! the engine resolves that name relative to its own working directory.
//! Copying the fragment next to the wrapper keeps the inclusion directive a
//! bare file name, portable across engines and platforms.

use crate::error::RenderError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extensions of the engine's auxiliary side-files, sharing the input's stem.
const SIDE_FILE_EXTENSIONS: [&str; 3] = ["aux", "log", "out"];

/// A prepared working directory for one render run.
///
/// Owns every intermediate artifact path derived from the source file's base
/// name. Dropping the workspace deletes the intermediates unless
/// [`Workspace::keep_intermediates`] was called first.
pub struct Workspace {
    work_dir: PathBuf,
    /// File name of the diagram inside `work_dir` (e.g. `figure.tikz`).
    source_name: String,
    /// Base name without extension (e.g. `figure`); all artifacts share it.
    stem: String,
    /// True when the source was actually copied in, i.e. it did not already
    /// live at `work_dir/<source_name>`. Guards cleanup from deleting the
    /// user's original.
    copied: bool,
    keep: bool,
}

impl Workspace {
    /// Copy `source` into `work_dir` and derive all artifact names.
    ///
    /// Overwrites an existing file of the same name. When `source` already
    /// is that file, no copy is performed and cleanup will leave it alone.
    pub fn prepare(source: &Path, work_dir: &Path) -> Result<Self, RenderError> {
        let source_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| RenderError::InputNotFound {
                path: source.to_path_buf(),
            })?;
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| source_name.clone());

        let dest = work_dir.join(&source_name);
        let copied = !is_same_file(source, &dest);
        if copied {
            std::fs::copy(source, &dest).map_err(|e| RenderError::Workspace {
                path: dest.clone(),
                source: e,
            })?;
            debug!("Copied {} → {}", source.display(), dest.display());
        } else {
            debug!("Source already in place: {}", dest.display());
        }

        Ok(Self {
            work_dir: work_dir.to_path_buf(),
            source_name,
            stem,
            copied,
            keep: false,
        })
    }

    /// Disarm the drop-time cleanup, leaving all intermediates on disk.
    pub fn keep_intermediates(&mut self) {
        self.keep = true;
    }

    /// The working directory all artifacts live in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// File name of the diagram inside the working directory.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// File name of the wrapper document (e.g. `figure.tex`).
    pub fn tex_name(&self) -> String {
        format!("{}.tex", self.stem)
    }

    /// Full path of the wrapper document.
    pub fn tex_path(&self) -> PathBuf {
        self.work_dir.join(self.tex_name())
    }

    /// Full path of the compiled PDF.
    pub fn pdf_path(&self) -> PathBuf {
        self.work_dir.join(format!("{}.pdf", self.stem))
    }

    /// Every intermediate artifact this run may produce, cleanup order.
    fn intermediates(&self) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(SIDE_FILE_EXTENSIONS.len() + 3);
        if self.copied {
            paths.push(self.work_dir.join(&self.source_name));
        }
        paths.push(self.tex_path());
        paths.push(self.pdf_path());
        for ext in SIDE_FILE_EXTENSIONS {
            paths.push(self.work_dir.join(format!("{}.{}", self.stem, ext)));
        }
        paths
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if self.keep {
            debug!("Keeping intermediates in {}", self.work_dir.display());
            return;
        }
        for path in self.intermediates() {
            match std::fs::remove_file(&path) {
                Ok(()) => debug!("Removed {}", path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => warn!("Could not remove {}: {}", path.display(), e),
            }
        }
    }
}

/// True when `a` and `b` resolve to the same existing file.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => false,
    }
}
