//! Defines core data structures used throughout the pipeline.
//!
//! A `DiscoveredFile` is created once per qualifying file during discovery and
//! read, never mutated, by the assembler and the progress reporter.

use crate::config::Destination;
use crate::output::FileTree;
use crate::patterns::normalize_separators;
use crate::statistics::CollectionStatistics;
use crate::transcript::TranscriptInfo;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A file that passed the extension gate and the exclusion matcher.
///
/// # Examples
///
/// ```
/// use weaver::core_types::DiscoveredFile;
/// use std::path::PathBuf;
///
/// let file = DiscoveredFile {
///     absolute_path: PathBuf::from("/project/src/main.py"),
///     relative_path: PathBuf::from("src/main.py"),
///     size: 120,
///     line_count: 10,
/// };
///
/// assert_eq!(file.display_path(), "src/main.py");
/// assert_eq!(file.extension(), ".py");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// The path on the filesystem (the walk root joined with the relative path).
    pub absolute_path: PathBuf,
    /// The path relative to the collection root. Also the sort key.
    pub relative_path: PathBuf,
    /// Size in bytes, from metadata.
    pub size: u64,
    /// Number of `\n` terminators. Zero if the file could not be read as text.
    pub line_count: usize,
}

impl DiscoveredFile {
    /// The relative path with `/` separators, as written to the transcript.
    pub fn display_path(&self) -> String {
        normalize_separators(&self.relative_path)
    }

    /// The file's extension including the leading dot, or `""` if it has none.
    pub fn extension(&self) -> String {
        dotted_extension(&self.relative_path).unwrap_or_default()
    }
}

/// What a completed run did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Wall time from the start of discovery to the last chunk.
    pub elapsed: Duration,
    pub statistics: CollectionStatistics,
    /// Chunks acknowledged by the transport. Zero when writing to a file.
    pub chunks_sent: usize,
    pub transcript: TranscriptInfo,
    pub destination: Destination,
    /// The collected files as a directory tree, in transcript order.
    pub tree: FileTree,
}

/// How a run ended when it did not fail.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Completed(RunSummary),
    /// The user interrupted the run. The spool was removed and nothing
    /// further was sent.
    Cancelled,
}

/// Returns `.ext` for a path, preserving case, or `None` without an extension.
pub(crate) fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_extension() {
        assert_eq!(dotted_extension(Path::new("a/b.rs")), Some(".rs".to_string()));
        assert_eq!(dotted_extension(Path::new("a/B.PY")), Some(".PY".to_string()));
        assert_eq!(dotted_extension(Path::new("archive.tar.gz")), Some(".gz".to_string()));
        assert_eq!(dotted_extension(Path::new("Makefile")), None);
        assert_eq!(dotted_extension(Path::new(".bashrc")), None);
    }

    #[test]
    fn test_extension_without_one_is_empty() {
        let file = DiscoveredFile {
            relative_path: PathBuf::from("Dockerfile"),
            ..Default::default()
        };
        assert_eq!(file.extension(), "");
    }
}
