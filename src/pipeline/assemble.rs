//! Document assembly: wrap the TikZ fragment in a minimal standalone document.
//!
//! The only templating in the whole pipeline, and it is pure string
//! formatting — build the wrapper text, write it once, no other side
//! effects. The `standalone` class with the `tikz` option crops the output
//! page tightly around the picture, which is what makes single-diagram
//! extraction work.
//!
//! The preamble addendum is trusted input: it is inserted verbatim, with no
//! escaping or validation, exactly as the caller supplied it. Garbage in the
//! addendum surfaces as an ordinary compile failure with the engine's own
//! diagnostics.

use crate::error::RenderError;
use crate::pipeline::workspace::Workspace;
use tracing::debug;

/// Build the wrapper document text.
///
/// Layout: fixed class declaration, the verbatim preamble addendum (possibly
/// empty), then a body that `\input`s the copied fragment by name. Path
/// separators in the inclusion target are normalised to `/` — TeX engines
/// treat `/` as the separator on every platform, backslashes as macros.
pub fn build_document(source_name: &str, preamble: &str) -> String {
    let include_target = source_name.replace('\\', "/");
    let mut doc = String::from("\\documentclass[tikz]{standalone}\n");
    if !preamble.is_empty() {
        doc.push_str(preamble);
        if !preamble.ends_with('\n') {
            doc.push('\n');
        }
    }
    doc.push_str("\\begin{document}\n");
    doc.push_str(&format!("\\input{{{}}}\n", include_target));
    doc.push_str("\\end{document}\n");
    doc
}

/// Assemble the wrapper document and write it to the workspace's `.tex` path.
pub fn write_document(workspace: &Workspace, preamble: &str) -> Result<(), RenderError> {
    let doc = build_document(workspace.source_name(), preamble);
    let tex_path = workspace.tex_path();
    std::fs::write(&tex_path, &doc).map_err(|e| RenderError::Workspace {
        path: tex_path.clone(),
        source: e,
    })?;
    debug!("Wrote wrapper document: {} ({} bytes)", tex_path.display(), doc.len());
    Ok(())
}
