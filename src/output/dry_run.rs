// src/output/dry_run.rs

use crate::core_types::DiscoveredFile;
use log::debug;
use std::io::{self, Write};

/// Writes the output for a dry run (-D).
///
/// Lists the relative path, size and line count of each file that would be
/// collected, in the order given. The caller sorts.
pub fn write_dry_run_output(writer: &mut dyn Write, files: &[DiscoveredFile]) -> io::Result<()> {
    debug!("Executing dry run output for {} files...", files.len());
    writeln!(writer, "\n--- Dry Run: Files that would be collected ---")?;
    for file in files {
        writeln!(
            writer,
            "- {} ({} bytes, {} lines)",
            file.display_path(),
            file.size,
            file.line_count
        )?;
    }
    writeln!(writer, "--- End Dry Run ---")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn file(relative_path: &str, size: u64, line_count: usize) -> DiscoveredFile {
        DiscoveredFile {
            absolute_path: PathBuf::from("/project").join(relative_path),
            relative_path: PathBuf::from(relative_path),
            size,
            line_count,
        }
    }

    #[test]
    fn test_dry_run_output_empty() -> anyhow::Result<()> {
        let mut writer = Cursor::new(Vec::new());
        write_dry_run_output(&mut writer, &[])?;
        let output = String::from_utf8(writer.into_inner())?;
        assert_eq!(
            output,
            "\n--- Dry Run: Files that would be collected ---\n--- End Dry Run ---\n"
        );
        Ok(())
    }

    #[test]
    fn test_dry_run_output_preserves_order() -> anyhow::Result<()> {
        let files = vec![file("z.py", 10, 1), file("a/b.rs", 20, 2)];
        let mut writer = Cursor::new(Vec::new());
        write_dry_run_output(&mut writer, &files)?;
        let output = String::from_utf8(writer.into_inner())?;
        assert!(output.contains("- z.py (10 bytes, 1 lines)\n- a/b.rs (20 bytes, 2 lines)\n"));
        Ok(())
    }
}
