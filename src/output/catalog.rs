// src/output/catalog.rs

use crate::patterns::{extension_description, CATEGORIES, DEFAULT_EXTENSIONS};
use std::io::{self, Write};

/// Which catalog views to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogRequest {
    pub extensions: bool,
    pub patterns: bool,
    /// Usage examples. Also prints both tables.
    pub examples: bool,
}

const USAGE_EXAMPLES: &[(&str, &str)] = &[
    ("Collect all code files in current directory", "weaver"),
    (
        "Collect from specific directory with custom extensions",
        "weaver -d ./src -e .py,.js,.ts",
    ),
    ("Exclude specific patterns", "weaver --exclude tests/,*.test.js"),
    ("Disable default exclusions", "weaver --no-default-excludes"),
    ("Show verbose output", "weaver --verbose"),
    (
        "Write the transcript to a file instead of uploading",
        "weaver -o transcript.txt",
    ),
    (
        "Upload to another endpoint in 256 KiB chunks",
        "weaver --endpoint http://example.com:4000/api/text -c 256KiB",
    ),
];

/// Prints the requested catalog views, in the order extensions, patterns,
/// examples.
pub fn write_catalog(writer: &mut dyn Write, request: CatalogRequest) -> io::Result<()> {
    if request.extensions || request.examples {
        write_extension_table(writer)?;
        writeln!(writer)?;
    }
    if request.patterns || request.examples {
        write_pattern_table(writer)?;
        writeln!(writer)?;
    }
    if request.examples {
        write_usage_examples(writer)?;
    }
    writer.flush()
}

fn write_extension_table(writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, "Default File Extensions")?;
    writeln!(writer, "{:<12}{}", "Extension", "Description")?;
    writeln!(writer, "{:<12}{}", "---------", "-----------")?;
    let mut extensions: Vec<&str> = DEFAULT_EXTENSIONS.iter().map(|(ext, _)| *ext).collect();
    extensions.sort_unstable();
    for ext in extensions {
        writeln!(writer, "{:<12}{}", ext, extension_description(ext))?;
    }
    Ok(())
}

fn write_pattern_table(writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, "Default Exclusion Patterns")?;
    writeln!(writer, "{:<18}{}", "Category", "Patterns")?;
    writeln!(writer, "{:<18}{}", "--------", "--------")?;
    for category in CATEGORIES {
        let mut patterns = category.patterns.to_vec();
        patterns.sort_unstable();
        for (i, pattern) in patterns.iter().enumerate() {
            let label = if i == 0 { category.name } else { "" };
            writeln!(writer, "{:<18}{}", label, pattern)?;
        }
    }
    Ok(())
}

fn write_usage_examples(writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, "Usage Examples:")?;
    for (i, (description, command)) in USAGE_EXAMPLES.iter().enumerate() {
        writeln!(writer, "\n{}. {}:\n   {}", i + 1, description, command)?;
    }
    Ok(())
}
