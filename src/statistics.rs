// src/statistics.rs

//! Running totals for a collection run.

use crate::core_types::DiscoveredFile;
use std::collections::BTreeMap;

/// Count and line total for one extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtensionStats {
    /// Number of files with this extension.
    pub count: usize,
    /// Sum of their line counts.
    pub lines: usize,
}

/// Aggregate statistics, updated once per processed file.
///
/// # Examples
///
/// ```
/// use weaver::core_types::DiscoveredFile;
/// use weaver::statistics::CollectionStatistics;
/// use std::path::PathBuf;
///
/// let mut stats = CollectionStatistics::default();
/// stats.record(&DiscoveredFile {
///     relative_path: PathBuf::from("a.py"),
///     size: 40,
///     line_count: 4,
///     ..Default::default()
/// });
/// assert_eq!(stats.total_files, 1);
/// assert_eq!(stats.total_lines, 4);
/// assert_eq!(stats.by_extension[".py"].count, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionStatistics {
    /// Files recorded so far.
    pub total_files: usize,
    /// Lines across all recorded files.
    pub total_lines: usize,
    /// Bytes across all recorded files.
    pub total_size: u64,
    /// Per-extension breakdown, keyed by `.ext` (empty key for no extension).
    pub by_extension: BTreeMap<String, ExtensionStats>,
}

impl CollectionStatistics {
    /// Adds one file to the totals.
    pub fn record(&mut self, file: &DiscoveredFile) {
        self.total_files += 1;
        self.total_lines += file.line_count;
        self.total_size += file.size;
        let entry = self.by_extension.entry(file.extension()).or_default();
        entry.count += 1;
        entry.lines += file.line_count;
    }

    /// Extensions ordered by file count (descending), ties by extension name.
    pub fn extensions_by_count(&self) -> Vec<(&str, ExtensionStats)> {
        let mut rows: Vec<_> = self
            .by_extension
            .iter()
            .map(|(ext, stats)| (ext.as_str(), *stats))
            .collect();
        rows.sort_by(|a, b| b.1.count.cmp(&a.1.count).then_with(|| a.0.cmp(b.0)));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(path: &str, size: u64, lines: usize) -> DiscoveredFile {
        DiscoveredFile {
            absolute_path: PathBuf::from("/root").join(path),
            relative_path: PathBuf::from(path),
            size,
            line_count: lines,
        }
    }

    #[test]
    fn test_record_accumulates() {
        let mut stats = CollectionStatistics::default();
        stats.record(&file("a.py", 10, 1));
        stats.record(&file("b.py", 20, 2));
        stats.record(&file("c.rs", 30, 3));

        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.total_lines, 6);
        assert_eq!(stats.total_size, 60);
        assert_eq!(
            stats.by_extension[".py"],
            ExtensionStats { count: 2, lines: 3 }
        );
        assert_eq!(
            stats.by_extension[".rs"],
            ExtensionStats { count: 1, lines: 3 }
        );
    }

    #[test]
    fn test_extensions_by_count_order() {
        let mut stats = CollectionStatistics::default();
        stats.record(&file("a.rs", 1, 1));
        stats.record(&file("b.go", 1, 1));
        stats.record(&file("c.py", 1, 1));
        stats.record(&file("d.py", 1, 1));

        let order: Vec<&str> = stats
            .extensions_by_count()
            .into_iter()
            .map(|(ext, _)| ext)
            .collect();
        assert_eq!(order, vec![".py", ".go", ".rs"]);
    }
}
