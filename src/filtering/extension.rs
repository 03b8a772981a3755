// src/filtering/extension.rs

use crate::core_types::dotted_extension;
use std::collections::BTreeSet;
use std::path::Path;

/// Checks whether a path's extension is in the allowed set.
///
/// The comparison is exact and case-sensitive: the allowed set holds
/// lowercase `.ext` strings, so `Main.PY` does not pass a `.py` gate. Files
/// without an extension never pass.
///
/// # Examples
///
/// ```
/// use weaver::filtering::passes_extension_gate;
/// use std::collections::BTreeSet;
/// use std::path::Path;
///
/// let allowed: BTreeSet<String> = [".py".to_string(), ".rs".to_string()].into();
///
/// assert!(passes_extension_gate(Path::new("src/main.py"), &allowed));
/// assert!(!passes_extension_gate(Path::new("README.md"), &allowed));
/// assert!(!passes_extension_gate(Path::new("Makefile"), &allowed));
/// ```
pub fn passes_extension_gate(path: &Path, allowed: &BTreeSet<String>) -> bool {
    match dotted_extension(path) {
        Some(ext) => allowed.contains(&ext),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed(exts: &[&str]) -> BTreeSet<String> {
        exts.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_gate_is_case_sensitive() {
        let set = allowed(&[".py"]);
        assert!(passes_extension_gate(Path::new("a.py"), &set));
        assert!(!passes_extension_gate(Path::new("a.PY"), &set));
    }

    #[test]
    fn test_gate_uses_last_extension_only() {
        let set = allowed(&[".gz"]);
        assert!(passes_extension_gate(Path::new("dist/bundle.tar.gz"), &set));
        assert!(!passes_extension_gate(Path::new("dist/bundle.gz.tar"), &set));
    }

    #[test]
    fn test_gate_rejects_dotfiles_and_bare_names() {
        let set = allowed(&[".py", ".bashrc"]);
        assert!(!passes_extension_gate(Path::new(".bashrc"), &set));
        assert!(!passes_extension_gate(Path::new("Dockerfile"), &set));
    }

    #[test]
    fn test_empty_gate_rejects_everything() {
        assert!(!passes_extension_gate(Path::new("a.py"), &BTreeSet::new()));
    }
}
