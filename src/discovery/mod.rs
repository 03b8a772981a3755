//! Discovers collectable files under a root directory.
//!
//! [`discover`] yields a lazy stream of [`DiscoveryEvent`]s; nothing is
//! materialized and no state survives between calls, so calling it again
//! performs a fresh walk. [`collect_sorted`] is the single consumer loop that
//! drains the stream, feeds the statistics and the progress reporter, and
//! returns the files in their deterministic order.
use crate::cancellation::CancellationToken;
use crate::config::FilterConfig;
use crate::core_types::DiscoveredFile;
use crate::errors::{Error, Result};
use crate::patterns::PatternSet;
use crate::progress::ProgressReporter;
use crate::statistics::CollectionStatistics;
use log::{debug, warn};
use std::path::PathBuf;

mod entry_processor;
mod walker;

use entry_processor::process_direntry;
use walker::{build_walker, error_path};

/// One item of the discovery stream.
#[derive(Debug)]
pub enum DiscoveryEvent {
    /// A file that passed the extension gate and the exclusion matcher.
    File(DiscoveredFile),
    /// A walker or metadata error on a single entry. The walk continues.
    Error {
        path: Option<PathBuf>,
        message: String,
    },
    /// The cancellation token was set. This is always the last event.
    Cancelled,
}

/// Lazy iterator over the discovery events of one walk.
pub struct Discovery<'a> {
    walk: ignore::Walk,
    filter: &'a FilterConfig,
    patterns: &'a PatternSet,
    token: &'a CancellationToken,
    finished: bool,
}

impl Iterator for Discovery<'_> {
    type Item = DiscoveryEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            if self.token.is_cancelled() {
                self.finished = true;
                return Some(DiscoveryEvent::Cancelled);
            }
            let entry = match self.walk.next() {
                Some(Ok(entry)) => entry,
                Some(Err(err)) => {
                    warn!("Walker error: {}", err);
                    return Some(DiscoveryEvent::Error {
                        path: error_path(&err),
                        message: err.to_string(),
                    });
                }
                None => {
                    self.finished = true;
                    return None;
                }
            };
            match process_direntry(&entry, self.filter, self.patterns) {
                Ok(Some(file)) => return Some(DiscoveryEvent::File(file)),
                Ok(None) => continue,
                Err(err) => {
                    warn!("{}", err);
                    return Some(DiscoveryEvent::Error {
                        path: Some(entry.path().to_path_buf()),
                        message: err.to_string(),
                    });
                }
            }
        }
    }
}

/// Starts a fresh, lazy walk of `filter.root`.
///
/// The extension gate runs before the exclusion matcher. Cancellation is
/// checked before every entry.
///
/// # Examples
///
/// ```
/// use weaver::cancellation::CancellationToken;
/// use weaver::config::Config;
/// use weaver::discovery::{discover, DiscoveryEvent};
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::write(temp.path().join("main.py"), "print('hi')\n")?;
/// fs::write(temp.path().join("notes.md"), "# notes\n")?;
///
/// let config = Config::new_for_test(temp.path());
/// let patterns = config.filter.pattern_set()?;
/// let token = CancellationToken::new();
///
/// let files: Vec<_> = discover(&config.filter, &patterns, &token)
///     .filter_map(|event| match event {
///         DiscoveryEvent::File(file) => Some(file.display_path()),
///         _ => None,
///     })
///     .collect();
/// assert_eq!(files, vec!["main.py"]);
/// # Ok(())
/// # }
/// ```
pub fn discover<'a>(
    filter: &'a FilterConfig,
    patterns: &'a PatternSet,
    token: &'a CancellationToken,
) -> Discovery<'a> {
    Discovery {
        walk: build_walker(&filter.root),
        filter,
        patterns,
        token,
        finished: false,
    }
}

/// Drains a discovery walk and returns the files sorted by relative path.
///
/// Every accepted file is recorded in `stats` and reported to `reporter`;
/// per-entry errors are reported as warnings.
///
/// # Errors
/// Returns `Error::Interrupted` if the token is cancelled during the walk.
pub fn collect_sorted(
    filter: &FilterConfig,
    patterns: &PatternSet,
    token: &CancellationToken,
    reporter: &dyn ProgressReporter,
    stats: &mut CollectionStatistics,
) -> Result<Vec<DiscoveredFile>> {
    let mut files = Vec::new();
    for event in discover(filter, patterns, token) {
        match event {
            DiscoveryEvent::File(file) => {
                stats.record(&file);
                reporter.file_processed(&file.display_path(), file.size, file.line_count);
                files.push(file);
            }
            DiscoveryEvent::Error { path, message } => {
                let message = match path {
                    Some(path) => format!("{}: {}", path.display(), message),
                    None => message,
                };
                reporter.warn(&message);
            }
            DiscoveryEvent::Cancelled => return Err(Error::Interrupted),
        }
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    debug!("Discovery complete. {} files collected.", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::progress::{NoOpProgress, Phase};
    use std::fs;
    use std::sync::Mutex;
    use tempfile::tempdir;

    fn files_of(config: &Config) -> anyhow::Result<Vec<String>> {
        let patterns = config.filter.pattern_set()?;
        let token = CancellationToken::new();
        let mut stats = CollectionStatistics::default();
        Ok(
            collect_sorted(&config.filter, &patterns, &token, &NoOpProgress, &mut stats)?
                .iter()
                .map(DiscoveredFile::display_path)
                .collect(),
        )
    }

    #[test]
    fn test_scenario_extension_gate_and_directory_exact() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir_all(temp.path().join("src"))?;
        fs::create_dir_all(temp.path().join("node_modules"))?;
        fs::write(temp.path().join("src/main.py"), "line\n".repeat(10))?;
        fs::write(temp.path().join("README.md"), "# readme\n")?;
        fs::write(temp.path().join("node_modules/lib.js"), "x\n")?;

        let mut config = Config::new_for_test(temp.path());
        config.filter.extensions = [".py".to_string()].into();
        assert_eq!(files_of(&config)?, vec!["src/main.py"]);

        // With .js allowed, the directory-exact rule still drops node_modules.
        config.filter.extensions.insert(".js".to_string());
        assert_eq!(files_of(&config)?, vec!["src/main.py"]);
        Ok(())
    }

    #[test]
    fn test_sorted_order() -> anyhow::Result<()> {
        let temp = tempdir()?;
        for name in ["b.py", "a.py", "c.py"] {
            fs::write(temp.path().join(name), "x\n")?;
        }
        let config = Config::new_for_test(temp.path());
        assert_eq!(files_of(&config)?, vec!["a.py", "b.py", "c.py"]);
        Ok(())
    }

    #[test]
    fn test_sort_is_component_wise() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir_all(temp.path().join("a"))?;
        fs::write(temp.path().join("a/z.py"), "x\n")?;
        fs::write(temp.path().join("a-b.py"), "x\n")?;
        let config = Config::new_for_test(temp.path());
        assert_eq!(files_of(&config)?, vec!["a/z.py", "a-b.py"]);
        Ok(())
    }

    #[test]
    fn test_discover_is_restartable() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("one.rs"), "fn main() {}\n")?;
        let config = Config::new_for_test(temp.path());
        let first = files_of(&config)?;
        fs::write(temp.path().join("two.rs"), "fn two() {}\n")?;
        let second = files_of(&config)?;
        assert_eq!(first, vec!["one.rs"]);
        assert_eq!(second, vec!["one.rs", "two.rs"]);
        Ok(())
    }

    #[test]
    fn test_statistics_are_recorded() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.py"), "1\n2\n")?;
        fs::write(temp.path().join("b.rs"), "1\n")?;
        let config = Config::new_for_test(temp.path());
        let patterns = config.filter.pattern_set()?;
        let mut stats = CollectionStatistics::default();
        collect_sorted(
            &config.filter,
            &patterns,
            &CancellationToken::new(),
            &NoOpProgress,
            &mut stats,
        )?;
        assert_eq!(stats.total_files, 2);
        assert_eq!(stats.total_lines, 3);
        assert_eq!(stats.by_extension[".py"].lines, 2);
        Ok(())
    }

    #[test]
    fn test_cancelled_token_stops_walk() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.py"), "x\n")?;
        let config = Config::new_for_test(temp.path());
        let patterns = config.filter.pattern_set()?;
        let token = CancellationToken::new();
        token.cancel();

        let events: Vec<_> = discover(&config.filter, &patterns, &token).collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], DiscoveryEvent::Cancelled));

        let mut stats = CollectionStatistics::default();
        let result = collect_sorted(&config.filter, &patterns, &token, &NoOpProgress, &mut stats);
        assert!(matches!(result, Err(Error::Interrupted)));
        Ok(())
    }

    #[derive(Default)]
    struct WarningRecorder {
        warnings: Mutex<Vec<String>>,
    }

    impl ProgressReporter for WarningRecorder {
        fn phase(&self, _phase: Phase, _total: Option<u64>) {}
        fn file_processed(&self, _path: &str, _size: u64, _lines: usize) {}
        fn warn(&self, message: &str) {
            self.warnings.lock().unwrap().push(message.to_string());
        }
        fn chunk_sent(&self, _index: usize, _total: usize) {}
        fn finish(&self) {}
    }

    #[test]
    #[cfg(unix)]
    fn test_unreadable_entry_is_reported_and_walk_continues() -> anyhow::Result<()> {
        use std::os::unix::fs::symlink;
        let temp = tempdir()?;
        fs::write(temp.path().join("ok.py"), "ok = True\n")?;
        symlink(temp.path().join("missing.py"), temp.path().join("dangling.py"))?;

        let config = Config::new_for_test(temp.path());
        let patterns = config.filter.pattern_set()?;
        let token = CancellationToken::new();

        let events: Vec<_> = discover(&config.filter, &patterns, &token).collect();
        let dangling = temp.path().join("dangling.py");
        assert!(events.iter().any(|event| matches!(
            event,
            DiscoveryEvent::Error { path: Some(path), .. } if *path == dangling
        )));
        assert!(events
            .iter()
            .any(|event| matches!(event, DiscoveryEvent::File(file) if file.display_path() == "ok.py")));

        let reporter = WarningRecorder::default();
        let mut stats = CollectionStatistics::default();
        let files = collect_sorted(&config.filter, &patterns, &token, &reporter, &mut stats)?;
        assert_eq!(
            files.iter().map(DiscoveredFile::display_path).collect::<Vec<_>>(),
            vec!["ok.py"]
        );
        let warnings = reporter.warnings.lock().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("dangling.py"));
        Ok(())
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinked_directories_are_not_followed() -> anyhow::Result<()> {
        use std::os::unix::fs::symlink;
        let temp = tempdir()?;
        fs::create_dir_all(temp.path().join("real"))?;
        fs::write(temp.path().join("real/mod.rs"), "x\n")?;
        fs::write(temp.path().join("origin.rs"), "y\n")?;
        symlink(temp.path().join("real"), temp.path().join("linked"))?;
        symlink(temp.path(), temp.path().join("real/loop"))?;
        symlink(temp.path().join("origin.rs"), temp.path().join("alias.rs"))?;

        let config = Config::new_for_test(temp.path());
        assert_eq!(
            files_of(&config)?,
            vec!["alias.rs", "origin.rs", "real/mod.rs"]
        );
        Ok(())
    }
}
