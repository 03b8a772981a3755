// src/config/path_resolve.rs

use crate::errors::{io_error_with_path, Error, Result};
use std::path::PathBuf;

/// Resolves the root directory string to an absolute, canonicalized `PathBuf`.
///
/// # Errors
/// Returns `Error::Io` if the path cannot be resolved and `Error::Config` if
/// it resolves to something other than a directory.
pub(super) fn resolve_root(root: &str) -> Result<PathBuf> {
    let resolved = PathBuf::from(root)
        .canonicalize()
        .map_err(|e| io_error_with_path(e, root))?;
    if !resolved.is_dir() {
        return Err(Error::Config(format!(
            "'{}' is not a directory",
            resolved.display()
        )));
    }
    Ok(resolved)
}
