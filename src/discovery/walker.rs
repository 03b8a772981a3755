// src/discovery/walker.rs

use ignore::WalkBuilder;
use log::debug;
use std::path::{Path, PathBuf};

/// Builds the directory walker for a collection root.
///
/// Every `ignore` standard filter is off: `.gitignore` files are not
/// honored and hidden entries are visited, so exclusion is decided by the
/// pattern set alone. Symlinked directories are never descended.
pub(super) fn build_walker(root: &Path) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(root);
    walker_builder
        .standard_filters(false)
        .hidden(false)
        .parents(false)
        .follow_links(false);
    debug!(
        "Configuring WalkBuilder for '{}': standard filters disabled, not following links.",
        root.display()
    );
    walker_builder.build()
}

/// Extracts the path an `ignore` walker error refers to, if any.
pub(super) fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        _ => None,
    }
}
