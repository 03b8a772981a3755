// src/discovery/entry_processor.rs

use crate::config::FilterConfig;
use crate::core_types::DiscoveredFile;
use crate::errors::{io_error_with_path, Error};
use crate::filtering::{count_lines, is_regular_file, passes_extension_gate};
use crate::patterns::{normalize_separators, PatternSet};
use ignore::DirEntry;
use log::{debug, trace, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Processes a single directory entry from the walk.
///
/// Returns `Ok(Some(DiscoveredFile))` for a regular file that passes the
/// extension gate and is not excluded, `Ok(None)` for anything filtered out,
/// and `Err(Error::Io)` when the entry's metadata cannot be read.
pub(super) fn process_direntry(
    entry: &DirEntry,
    filter: &FilterConfig,
    patterns: &PatternSet,
) -> Result<Option<DiscoveredFile>, Error> {
    let absolute_path = entry.path().to_path_buf();
    trace!("Processing entry: {}", absolute_path.display());

    // --- 1. Filter by File Type ---
    // Directories are filtered cheaply from the walker's file type; links are
    // resolved so that a link to a regular file is collected.
    if entry.file_type().map_or(false, |ft| ft.is_dir()) {
        return Ok(None);
    }
    let metadata = fs::metadata(&absolute_path)
        .map_err(|e| io_error_with_path(e, &absolute_path))?;
    if !is_regular_file(&metadata) {
        trace!("Skipping non-file entry: {}", absolute_path.display());
        return Ok(None);
    }

    // --- 2. Filter by Extension ---
    if !passes_extension_gate(&absolute_path, &filter.extensions) {
        trace!(
            "Skipping file due to extension gate: {}",
            absolute_path.display()
        );
        return Ok(None);
    }

    // --- 3. Filter by Exclusion Patterns ---
    let relative_path = relative_to_root(&absolute_path, &filter.root);
    let relative_str = normalize_separators(&relative_path);
    if let Some(rule) = patterns.first_match(&relative_str) {
        debug!(
            "Skipping '{}': matched {} pattern '{}'",
            relative_str,
            rule.kind(),
            rule.pattern()
        );
        return Ok(None);
    }

    // --- 4. Size and Line Count ---
    let line_count = match count_lines(&absolute_path) {
        Ok(lines) => lines,
        Err(e) => {
            warn!(
                "Could not count lines of '{}', counting 0: {}",
                relative_str, e
            );
            0
        }
    };

    let file = DiscoveredFile {
        absolute_path,
        relative_path,
        size: metadata.len(),
        line_count,
    };
    debug!(
        "Accepted '{}' ({} bytes, {} lines)",
        relative_str, file.size, file.line_count
    );
    Ok(Some(file))
}

fn relative_to_root(absolute_path: &Path, root: &Path) -> PathBuf {
    absolute_path
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|err| {
            warn!(
                "Failed to strip prefix '{}' from '{}': {}. Using absolute path.",
                root.display(),
                absolute_path.display(),
                err
            );
            absolute_path.to_path_buf()
        })
}
