// src/patterns/rule.rs

use super::catalog::is_directory_pattern;
use crate::errors::{Error, Result};
use regex::Regex;
use std::cmp::Ordering;

/// One classified exclusion rule.
///
/// Patterns are classified once, when a [`super::PatternSet`] is built:
/// - a directory-exact pattern yields an `Exact` rule and a `Substring` rule,
///   so `node_modules` still matches `not_node_modules.py`;
/// - a pattern containing `*` yields a `Glob` rule;
/// - any other pattern yields a `Substring` rule.
///
/// An `Exact` rule never excludes a path that its companion `Substring` rule
/// would keep: a segment equal to the pattern always contains it. It exists
/// so that [`super::PatternSet::first_match`] attributes directory hits to
/// the segment match in logs.
#[derive(Debug, Clone)]
pub enum PatternRule {
    /// Matches when a path segment equals the text exactly.
    Exact(String),
    /// Matches when the whole relative path matches the translated glob.
    Glob {
        /// The glob text as given.
        pattern: String,
        /// Anchored regex where `*` is `.*` and everything else is literal.
        regex: Regex,
    },
    /// Matches when the text occurs anywhere in the relative path.
    Substring(String),
}

impl PatternRule {
    /// Classifies a raw pattern string into the rules it contributes.
    ///
    /// # Examples
    ///
    /// ```
    /// use weaver::patterns::PatternRule;
    ///
    /// let rules = PatternRule::classify("node_modules").unwrap();
    /// assert_eq!(rules.len(), 2); // Exact + Substring
    ///
    /// let rules = PatternRule::classify("*.pyc").unwrap();
    /// assert!(matches!(rules[0], PatternRule::Glob { .. }));
    /// ```
    pub fn classify(pattern: &str) -> Result<Vec<PatternRule>> {
        let mut rules = Vec::with_capacity(2);
        if is_directory_pattern(pattern) {
            rules.push(PatternRule::Exact(pattern.to_string()));
        }
        if pattern.contains('*') {
            rules.push(Self::glob(pattern)?);
        } else {
            rules.push(PatternRule::Substring(pattern.to_string()));
        }
        Ok(rules)
    }

    /// Compiles a glob pattern into an anchored `Glob` rule.
    pub fn glob(pattern: &str) -> Result<PatternRule> {
        let regex = Regex::new(&glob_to_regex(pattern)).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(PatternRule::Glob {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Tests the rule against a `/`-separated relative path.
    #[inline]
    pub fn matches(&self, relative_path: &str) -> bool {
        match self {
            PatternRule::Exact(segment) => relative_path.split('/').any(|part| part == segment),
            PatternRule::Glob { regex, .. } => regex.is_match(relative_path),
            PatternRule::Substring(text) => relative_path.contains(text.as_str()),
        }
    }

    /// The pattern text this rule was built from.
    pub fn pattern(&self) -> &str {
        match self {
            PatternRule::Exact(text) | PatternRule::Substring(text) => text,
            PatternRule::Glob { pattern, .. } => pattern,
        }
    }

    /// Short name of the match strategy, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PatternRule::Exact(_) => "exact",
            PatternRule::Glob { .. } => "glob",
            PatternRule::Substring(_) => "substring",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            PatternRule::Exact(_) => 0,
            PatternRule::Glob { .. } => 1,
            PatternRule::Substring(_) => 2,
        }
    }

    /// Evaluation order: exact rules, then globs, then substrings, each by pattern text.
    pub(super) fn evaluation_order(a: &PatternRule, b: &PatternRule) -> Ordering {
        a.rank()
            .cmp(&b.rank())
            .then_with(|| a.pattern().cmp(b.pattern()))
    }
}

/// Translates a glob into an anchored regex: `*` becomes `.*`, all other
/// characters (including `.` and `/`) are literal.
fn glob_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() + 8);
    regex.push_str("(?s)^");
    for (i, literal) in pattern.split('*').enumerate() {
        if i > 0 {
            regex.push_str(".*");
        }
        regex.push_str(&regex::escape(literal));
    }
    regex.push('$');
    regex
}
