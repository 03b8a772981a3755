//! Exclusion patterns: the default catalog and the matcher built from it.
//!
//! A [`PatternSet`] is compiled once per run from the effective pattern list
//! (custom patterns plus, optionally, the catalog defaults) and then answers
//! "is this relative path excluded?" for every discovered file.

use crate::errors::Result;
use log::trace;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::instrument;

pub mod catalog;
mod rule;

pub use catalog::{
    default_exclude_patterns, default_extensions, extension_description,
    is_directory_pattern, PatternCategory, CATEGORIES, DEFAULT_EXTENSIONS, DIRECTORY_PATTERNS,
};
pub use rule::PatternRule;

/// A compiled set of exclusion rules.
///
/// Matching is a pure disjunction: a path is excluded if any rule matches.
/// Rules are evaluated in a fixed order (exact segment rules, then globs,
/// then substrings, each sorted by pattern text) so that the rule reported by
/// [`PatternSet::first_match`] is stable from run to run.
///
/// # Examples
///
/// ```
/// use weaver::patterns::PatternSet;
///
/// let set = PatternSet::new(["node_modules", "*_test.py"]).unwrap();
/// assert!(set.matches("web/node_modules/lib.js"));
/// assert!(set.matches("utils/foo_test.py"));
/// assert!(!set.matches("utils/foo_test.py.bak"));
/// assert!(!set.matches("src/main.py"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: BTreeSet<String>,
    rules: Vec<PatternRule>,
}

impl PatternSet {
    /// Classifies and compiles every pattern. Duplicates are collapsed.
    ///
    /// # Errors
    /// Returns `Error::Pattern` if a glob cannot be compiled.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: BTreeSet<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();

        let mut rules = Vec::with_capacity(patterns.len());
        for pattern in &patterns {
            rules.extend(PatternRule::classify(pattern)?);
        }
        rules.sort_by(PatternRule::evaluation_order);

        Ok(Self { patterns, rules })
    }

    /// Returns `true` if the `/`-separated relative path is excluded.
    #[inline]
    pub fn matches(&self, relative_path: &str) -> bool {
        self.first_match(relative_path).is_some()
    }

    /// Like [`PatternSet::matches`], but takes a filesystem path and
    /// normalizes its separators first.
    pub fn is_excluded(&self, relative_path: &Path) -> bool {
        self.matches(&normalize_separators(relative_path))
    }

    /// Returns the first rule (in evaluation order) that matches the path.
    #[instrument(level = "trace", skip(self))]
    pub fn first_match(&self, relative_path: &str) -> Option<&PatternRule> {
        let hit = self.rules.iter().find(|rule| rule.matches(relative_path));
        if let Some(rule) = hit {
            trace!(
                "'{}' excluded by {} rule '{}'",
                relative_path,
                rule.kind(),
                rule.pattern()
            );
        }
        hit
    }

    /// The distinct source patterns, sorted.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    /// The compiled rules, in evaluation order.
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Number of distinct source patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// `true` if the set never excludes anything.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Renders a relative path with `/` separators, the form used for matching
/// and for every path written to the transcript.
pub fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
