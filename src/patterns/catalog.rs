// src/patterns/catalog.rs

//! Static registry of the default exclusion patterns and extensions.
//!
//! Everything here is process-lifetime data. The derived sets are built lazily
//! on first use and never change afterwards.

use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// A named group of default exclusion patterns, used for display.
#[derive(Debug, Clone, Copy)]
pub struct PatternCategory {
    /// Display name of the category (e.g., "Cache").
    pub name: &'static str,
    /// The patterns belonging to this category.
    pub patterns: &'static [&'static str],
}

const VERSION_CONTROL: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "package-lock.json",
    ".gitignore",
    ".gitattributes",
    ".gitmodules",
];

const DEPENDENCIES: &[&str] = &[
    "node_modules",
    "vendor",
    "build",
    "dist",
    "target",
    ".next",
    "venv",
    "env",
    ".env",
    ".venv",
    "virtualenv",
    "pip-wheel-metadata",
    "poetry.lock",
    "yarn.lock",
];

const CACHE: &[&str] = &[
    "__pycache__",
    "*.pyc",
    "*.pyo",
    "*.pyd",
    ".pytest_cache",
    ".coverage",
    ".mypy_cache",
    ".ruff_cache",
    ".hypothesis",
    ".tox",
    ".eggs",
    "*.egg-info",
];

const TESTS: &[&str] = &[
    "*_test.go",
    "*.test.js",
    "*_spec.rb",
    "*Test.java",
    "*_test.py",
    "test_*.py",
    "tests/",
    "__tests__/",
    "testing/",
];

const IDE: &[&str] = &[
    ".idea",
    ".vscode",
    ".vs",
    "*.swp",
    "*.swo",
    "*.swn",
    "*.bak",
    "*~",
    ".project",
    ".classpath",
    ".settings",
    "*.sublime-*",
];

const COMPILED: &[&str] = &[
    "*.o", "*.ko", "*.obj", "*.elf", "*.bin", "*.exe", "*.dll", "*.so", "*.dylib", "*.class",
];

const LOGS: &[&str] = &[
    "*.log", "*.logs", "log/", "logs/", "*.tmp", "*.temp", "tmp/", "temp/",
];

const MEDIA: &[&str] = &[
    "*.ico", "*.png", "*.jpg", "*.jpeg", "*.gif", "*.svg", "*.bmp", "*.mp4", "*.mov", "*.avi",
    "*.mkv", "*.mp3", "*.wav", "*.ogg", "*.flac", "*.m4a", "*.webm", "*.wma",
];

const DOCUMENTATION: &[&str] = &[
    "docs/",
    "doc/",
    "documentation/",
    "*.md",
    "*.rst",
    "*.txt",
    "LICENSE*",
    "README*",
    "CHANGELOG*",
    "CONTRIBUTING*",
];

/// Default exclusion patterns grouped by category, in display order.
pub const CATEGORIES: &[PatternCategory] = &[
    PatternCategory {
        name: "Version Control",
        patterns: VERSION_CONTROL,
    },
    PatternCategory {
        name: "Dependencies",
        patterns: DEPENDENCIES,
    },
    PatternCategory {
        name: "Cache",
        patterns: CACHE,
    },
    PatternCategory {
        name: "Tests",
        patterns: TESTS,
    },
    PatternCategory {
        name: "IDE",
        patterns: IDE,
    },
    PatternCategory {
        name: "Compiled",
        patterns: COMPILED,
    },
    PatternCategory {
        name: "Logs",
        patterns: LOGS,
    },
    PatternCategory {
        name: "Media",
        patterns: MEDIA,
    },
    PatternCategory {
        name: "Documentation",
        patterns: DOCUMENTATION,
    },
];

/// Patterns that also match when they equal a whole path segment.
pub const DIRECTORY_PATTERNS: &[&str] = &[
    "node_modules",
    "venv",
    "env",
    ".git",
    ".svn",
    ".hg",
    "__pycache__",
    "build",
    "dist",
    "target",
    ".next",
];

/// Extensions collected when none are given, with a short description each.
pub const DEFAULT_EXTENSIONS: &[(&str, &str)] = &[
    (".py", "Python source files"),
    (".sh", "Shell scripts"),
    (".yml", "YAML configuration files"),
    (".yaml", "YAML configuration files"),
    (".js", "JavaScript source files"),
    (".jsx", "React JavaScript files"),
    (".java", "Java source files"),
    (".cpp", "C++ source files"),
    (".c", "C source files"),
    (".h", "C/C++ header files"),
    (".hpp", "C++ header files"),
    (".cs", "C# source files"),
    (".html", "HTML files"),
    (".css", "CSS style files"),
    (".tsx", "TypeScript React files"),
    (".ts", "TypeScript source files"),
    (".go", "Go source files"),
    (".rb", "Ruby source files"),
    (".php", "PHP source files"),
    (".scala", "Scala source files"),
    (".rs", "Rust source files"),
    (".swift", "Swift source files"),
];

static DEFAULT_EXCLUDES: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    CATEGORIES
        .iter()
        .flat_map(|category| category.patterns.iter().copied())
        .collect()
});

static DIRECTORY_SET: Lazy<BTreeSet<&'static str>> =
    Lazy::new(|| DIRECTORY_PATTERNS.iter().copied().collect());

/// The union of every category's patterns.
pub fn default_exclude_patterns() -> &'static BTreeSet<&'static str> {
    &DEFAULT_EXCLUDES
}

/// Returns `true` if `pattern` is one of the directory-exact patterns.
#[inline]
pub fn is_directory_pattern(pattern: &str) -> bool {
    DIRECTORY_SET.contains(pattern)
}

/// The default extension set, as owned strings.
pub fn default_extensions() -> BTreeSet<String> {
    DEFAULT_EXTENSIONS
        .iter()
        .map(|(ext, _)| (*ext).to_string())
        .collect()
}

/// Looks up the description shown for an extension in the extensions table.
pub fn extension_description(extension: &str) -> &'static str {
    DEFAULT_EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, description)| *description)
        .unwrap_or("Source files")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_is_union_of_categories() {
        let total: usize = CATEGORIES.iter().map(|c| c.patterns.len()).sum();
        // No pattern appears in two categories.
        assert_eq!(default_exclude_patterns().len(), total);
        assert!(default_exclude_patterns().contains("node_modules"));
        assert!(default_exclude_patterns().contains("*_test.py"));
        assert!(default_exclude_patterns().contains("CONTRIBUTING*"));
    }

    #[test]
    fn test_directory_patterns_are_all_defaults() {
        for pattern in DIRECTORY_PATTERNS {
            assert!(
                default_exclude_patterns().contains(pattern),
                "{} missing from defaults",
                pattern
            );
            assert!(is_directory_pattern(pattern));
        }
        assert!(!is_directory_pattern("vendor"));
        assert!(!is_directory_pattern("*.pyc"));
    }

    #[test]
    fn test_default_extensions() {
        let exts = default_extensions();
        assert_eq!(exts.len(), 22);
        assert!(exts.iter().all(|e| e.starts_with('.') && e.to_lowercase() == *e));
        assert!(exts.contains(".rs"));
        assert!(!exts.contains(".md"));
    }

    #[test]
    fn test_extension_description_fallback() {
        assert_eq!(extension_description(".rs"), "Rust source files");
        assert_eq!(extension_description(".kt"), "Source files");
    }
}
