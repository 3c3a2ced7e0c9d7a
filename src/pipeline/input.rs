//! Input resolution: validate the user-supplied TikZ source path.
//!
//! Deliberately shallow: the fragment's contents are never inspected or
//! validated — a syntactically broken fragment is the LaTeX engine's problem
//! to diagnose, and its error messages are far better than anything a
//! pre-check here could produce. The only contract is that the file exists
//! and is readable before any artifact is created.

use crate::error::RenderError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve a local TikZ source path, validating existence and readability.
///
/// Fails before any workspace file is touched, so a bad path leaves the
/// working directory untouched.
pub fn resolve_source(path: &Path) -> Result<PathBuf, RenderError> {
    if !path.is_file() {
        return Err(RenderError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    // Check read permission by attempting to open.
    match std::fs::File::open(path) {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(RenderError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(RenderError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    debug!("Resolved TikZ source: {}", path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_input_not_found() {
        let err = resolve_source(Path::new("/definitely/not/here.tikz")).unwrap_err();
        match err {
            RenderError::InputNotFound { path } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.tikz"));
            }
            other => panic!("expected InputNotFound, got {other:?}"),
        }
    }

    #[test]
    fn directory_is_not_a_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_source(dir.path()).unwrap_err();
        assert!(matches!(err, RenderError::InputNotFound { .. }));
    }

    #[test]
    fn existing_file_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("diagram.tikz");
        let mut f = std::fs::File::create(&p).unwrap();
        writeln!(f, r"\begin{{tikzpicture}}\draw (0,0) -- (1,1);\end{{tikzpicture}}").unwrap();

        let resolved = resolve_source(&p).unwrap();
        assert_eq!(resolved, p);
    }
}
