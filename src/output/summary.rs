// src/output/summary.rs

use crate::config::Destination;
use crate::core_types::RunSummary;
use log::debug;
use std::io::{self, Write};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Writes the end-of-run summary: timing, totals, where the transcript went,
/// the per-extension breakdown (most files first), and the file tree.
pub fn write_summary(writer: &mut dyn Write, summary: &RunSummary) -> io::Result<()> {
    debug!("Writing summary: {:?}", summary);
    let stats = &summary.statistics;
    let seconds = summary.elapsed.as_secs_f64();
    let rate = if seconds > 0.0 {
        stats.total_files as f64 / seconds
    } else {
        0.0
    };

    writeln!(writer, "\nCollection Complete!")?;
    writeln!(writer, "  {:<15}{:.1} seconds", "Total Time:", seconds)?;
    writeln!(writer, "  {:<15}{:.1} files/sec", "Average Speed:", rate)?;
    writeln!(
        writer,
        "  {:<15}{:.1} MB",
        "Total Size:",
        stats.total_size as f64 / BYTES_PER_MB
    )?;
    writeln!(writer, "  {:<15}{}", "Total Files:", stats.total_files)?;
    writeln!(writer, "  {:<15}{}", "Total Lines:", stats.total_lines)?;
    match &summary.destination {
        Destination::Endpoint(url) => writeln!(
            writer,
            "  {:<15}{} characters in {} chunk(s) sent to {}",
            "Transcript:", summary.transcript.chars, summary.chunks_sent, url
        )?,
        Destination::File(path) => writeln!(
            writer,
            "  {:<15}{} characters written to {}",
            "Transcript:",
            summary.transcript.chars,
            path.display()
        )?,
    }

    let rows = stats.extensions_by_count();
    if !rows.is_empty() {
        writeln!(writer, "\nFiles by extension:")?;
        for (ext, ext_stats) in rows {
            let label = if ext.is_empty() { "(none)" } else { ext };
            writeln!(
                writer,
                "  {:<10}{:>6} files {:>9} lines",
                label, ext_stats.count, ext_stats.lines
            )?;
        }
    }

    if !summary.tree.is_empty() {
        writeln!(
            writer,
            "\nProject Files ({} files in {} folders):",
            summary.tree.file_count(),
            summary.tree.folder_count()
        )?;
        summary.tree.write_to(writer, "  ")?;
    }
    writer.flush()
}
