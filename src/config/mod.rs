//! Defines the `Config` struct and related types for run configuration.
//!
//! This module consolidates the settings parsed and validated from the CLI (or
//! set programmatically through [`ConfigBuilder`]), making them available to
//! the rest of the pipeline in a structured, immutable form.

use crate::errors::Result;
use crate::patterns::{default_exclude_patterns, PatternSet, CATEGORIES};
use std::collections::BTreeSet;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;
mod path_resolve;
mod validation;

/// Default upload endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/api/text";

/// Default chunk size, in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Settings that drive discovery, matching, assembly, and chunking.
///
/// Created once at start-up and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Absolute, canonicalized collection root.
    pub root: PathBuf,
    /// Allowed extensions, each lowercase and starting with `.`. Never empty.
    pub extensions: BTreeSet<String>,
    /// Custom exclude patterns given by the user.
    pub exclude_patterns: BTreeSet<String>,
    /// Whether the catalog defaults are added to the custom patterns.
    pub use_default_excludes: bool,
    /// Maximum characters per uploaded chunk. Always greater than zero.
    pub chunk_size: usize,
    /// Whether the transcript metadata lists the effective filters.
    pub verbose: bool,
}

impl FilterConfig {
    /// The custom patterns plus, if enabled, the catalog defaults, sorted.
    pub fn effective_patterns(&self) -> BTreeSet<String> {
        let mut patterns = self.exclude_patterns.clone();
        if self.use_default_excludes {
            patterns.extend(default_exclude_patterns().iter().map(|p| p.to_string()));
        }
        patterns
    }

    /// Compiles the effective patterns into a matcher.
    pub fn pattern_set(&self) -> Result<PatternSet> {
        PatternSet::new(self.effective_patterns())
    }

    /// Effective patterns grouped for display: the catalog categories (when
    /// defaults are on) followed by a "Custom" group (when any were given).
    pub fn pattern_summary(&self) -> Vec<(String, Vec<String>)> {
        let mut summary: Vec<(String, Vec<String>)> = Vec::new();
        if self.use_default_excludes {
            for category in CATEGORIES {
                let mut patterns: Vec<String> =
                    category.patterns.iter().map(|p| p.to_string()).collect();
                patterns.sort();
                summary.push((category.name.to_string(), patterns));
            }
        }
        if !self.exclude_patterns.is_empty() {
            summary.push((
                "Custom".to_string(),
                self.exclude_patterns.iter().cloned().collect(),
            ));
        }
        summary
    }
}

/// Where the assembled transcript goes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Destination {
    /// Upload in chunks to this HTTP endpoint (an `http`/`https` URL).
    Endpoint(String),
    /// Write the transcript to this file instead of uploading.
    File(PathBuf),
}

/// The complete run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Discovery, matching, assembly, and chunking settings.
    pub filter: FilterConfig,
    /// Where the transcript is delivered.
    pub destination: Destination,
    /// If `true`, only list the files that would be collected.
    pub dry_run: bool,
}

impl Config {
    /// Creates a `Config` rooted at `root` with default settings, for tests.
    ///
    /// The root is used as given (no canonicalization).
    #[doc(hidden)]
    pub fn new_for_test(root: impl Into<PathBuf>) -> Self {
        Self {
            filter: FilterConfig {
                root: root.into(),
                extensions: crate::patterns::default_extensions(),
                exclude_patterns: BTreeSet::new(),
                use_default_excludes: true,
                chunk_size: DEFAULT_CHUNK_SIZE,
                verbose: false,
            },
            destination: Destination::Endpoint(DEFAULT_ENDPOINT.to_string()),
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_patterns_with_defaults() {
        let mut config = Config::new_for_test("/base");
        config.filter.exclude_patterns.insert("secret/".to_string());
        let patterns = config.filter.effective_patterns();
        assert!(patterns.contains("secret/"));
        assert!(patterns.contains("node_modules"));
        assert_eq!(patterns.len(), default_exclude_patterns().len() + 1);
    }

    #[test]
    fn test_effective_patterns_without_defaults() {
        let mut config = Config::new_for_test("/base");
        config.filter.use_default_excludes = false;
        assert!(config.filter.effective_patterns().is_empty());
        config.filter.exclude_patterns.insert("*.gen.rs".to_string());
        assert_eq!(
            config.filter.effective_patterns().into_iter().collect::<Vec<_>>(),
            vec!["*.gen.rs".to_string()]
        );
    }

    #[test]
    fn test_pattern_summary() {
        let mut config = Config::new_for_test("/base");
        let summary = config.filter.pattern_summary();
        assert_eq!(summary.len(), CATEGORIES.len());
        assert_eq!(summary[0].0, "Version Control");

        config.filter.use_default_excludes = false;
        config.filter.exclude_patterns.insert("gen/".to_string());
        let summary = config.filter.pattern_summary();
        assert_eq!(summary, vec![("Custom".to_string(), vec!["gen/".to_string()])]);
    }
}
