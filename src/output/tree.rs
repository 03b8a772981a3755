// src/output/tree.rs

use std::io::{self, Write};

/// Directory tree of the collected files, printed with the run summary.
///
/// Children keep insertion order, so feeding paths in transcript order
/// renders the tree in that same order.
///
/// # Examples
///
/// ```
/// use weaver::output::FileTree;
///
/// let tree = FileTree::from_paths(["src/main.py", "setup.py"]);
/// let mut out = Vec::new();
/// tree.write_to(&mut out, "").unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "├── src/\n│   └── main.py\n└── setup.py\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTree {
    root: Vec<Node>,
    files: usize,
    folders: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    name: String,
    is_dir: bool,
    children: Vec<Node>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from `/`-separated relative paths.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for path in paths {
            tree.add_file(path.as_ref());
        }
        tree
    }

    /// Adds one file, creating its parent folders as needed.
    pub fn add_file(&mut self, relative_path: &str) {
        let parts: Vec<&str> = relative_path.split('/').filter(|p| !p.is_empty()).collect();
        let Some((file_name, folders)) = parts.split_last() else {
            return;
        };

        let mut level = &mut self.root;
        for folder in folders {
            let position = match level.iter().position(|n| n.is_dir && n.name == *folder) {
                Some(position) => position,
                None => {
                    level.push(Node {
                        name: folder.to_string(),
                        is_dir: true,
                        children: Vec::new(),
                    });
                    self.folders += 1;
                    level.len() - 1
                }
            };
            level = &mut level[position].children;
        }
        level.push(Node {
            name: file_name.to_string(),
            is_dir: false,
            children: Vec::new(),
        });
        self.files += 1;
    }

    pub fn file_count(&self) -> usize {
        self.files
    }

    pub fn folder_count(&self) -> usize {
        self.folders
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Renders the tree with box-drawing guides, each line starting with
    /// `indent`. Folders end with `/`.
    pub fn write_to(&self, writer: &mut dyn Write, indent: &str) -> io::Result<()> {
        write_level(writer, &self.root, indent)
    }
}

fn write_level(writer: &mut dyn Write, nodes: &[Node], prefix: &str) -> io::Result<()> {
    for (i, node) in nodes.iter().enumerate() {
        let last = i + 1 == nodes.len();
        let branch = if last { "└── " } else { "├── " };
        let suffix = if node.is_dir { "/" } else { "" };
        writeln!(writer, "{}{}{}{}", prefix, branch, node.name, suffix)?;
        if node.is_dir {
            let guide = if last { "    " } else { "│   " };
            write_level(writer, &node.children, &format!("{}{}", prefix, guide))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tree: &FileTree, indent: &str) -> String {
        let mut out = Vec::new();
        tree.write_to(&mut out, indent).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_nested_directories() {
        let tree = FileTree::from_paths(["a/b/c.py", "a/b/d/e.rs", "a/f.py", "g.py"]);
        assert_eq!(tree.file_count(), 4);
        assert_eq!(tree.folder_count(), 3);
        let expected = [
            "  ├── a/",
            "  │   ├── b/",
            "  │   │   ├── c.py",
            "  │   │   └── d/",
            "  │   │       └── e.rs",
            "  │   └── f.py",
            "  └── g.py",
        ];
        assert_eq!(render(&tree, "  "), format!("{}\n", expected.join("\n")));
    }

    #[test]
    fn test_folders_are_shared_between_files() {
        let tree = FileTree::from_paths(["src/a.rs", "src/b.rs"]);
        assert_eq!(tree.folder_count(), 1);
        assert_eq!(render(&tree, ""), "└── src/\n    ├── a.rs\n    └── b.rs\n");
    }

    #[test]
    fn test_empty_tree_renders_nothing() {
        let tree = FileTree::from_paths(Vec::<String>::new());
        assert!(tree.is_empty());
        assert_eq!(render(&tree, "  "), "");
        let mut tree = FileTree::new();
        tree.add_file("");
        assert!(tree.is_empty());
    }
}
