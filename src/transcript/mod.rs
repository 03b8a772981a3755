//! Builds the transcript: metadata, directory structure, then one section
//! per file.
//!
//! The assembler streams into any [`std::io::Write`] sink so that large trees
//! never sit in memory as one string. In a normal run the sink is a
//! [`TranscriptSpool`], a temporary file that is deleted when dropped.

use crate::cancellation::CancellationToken;
use crate::config::FilterConfig;
use crate::constants::{
    FILES_HEADER, FILE_SECTION_PREFIX, METADATA_HEADER, SECTION_SEPARATOR_WIDTH,
    STRUCTURE_HEADER, TIMESTAMP_FORMAT,
};
use crate::core_types::DiscoveredFile;
use crate::errors::{io_error_with_path, Error, Result};
use crate::filtering::read_text;
use crate::progress::{Phase, ProgressReporter};
use log::{debug, warn};
use std::io::{self, Write};

mod counting;
mod spool;

use counting::CountingWriter;
pub use spool::TranscriptSpool;

/// Size of the transcript that was written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscriptInfo {
    /// Length in bytes.
    pub bytes: u64,
    /// Length in UTF-8 characters, the unit chunks are measured in.
    pub chars: u64,
    /// Number of file sections written.
    pub files: usize,
}

/// Writes transcripts for one run's configuration.
///
/// # Examples
///
/// ```
/// use weaver::cancellation::CancellationToken;
/// use weaver::config::Config;
/// use weaver::core_types::DiscoveredFile;
/// use weaver::progress::NoOpProgress;
/// use weaver::transcript::TranscriptAssembler;
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::write(temp.path().join("a.py"), "x = 1\n")?;
/// let config = Config::new_for_test(temp.path());
/// let files = vec![DiscoveredFile {
///     absolute_path: temp.path().join("a.py"),
///     relative_path: "a.py".into(),
///     size: 6,
///     line_count: 1,
/// }];
///
/// let token = CancellationToken::new();
/// let assembler = TranscriptAssembler::new(&config.filter, &NoOpProgress, &token);
/// let mut out = Vec::new();
/// assembler.assemble_at(&files, "2024-01-01T00:00:00.000000", &mut out)?;
///
/// let text = String::from_utf8(out)?;
/// assert!(text.starts_with("=== Code Collection Metadata ===\ntimestamp: 2024-01-01T00:00:00.000000\n"));
/// assert!(text.contains("=== Directory Structure ===\na.py\n"));
/// assert!(text.ends_with("x = 1\n\n\n"));
/// # Ok(())
/// # }
/// ```
pub struct TranscriptAssembler<'a> {
    filter: &'a FilterConfig,
    reporter: &'a dyn ProgressReporter,
    token: &'a CancellationToken,
}

impl<'a> TranscriptAssembler<'a> {
    pub fn new(
        filter: &'a FilterConfig,
        reporter: &'a dyn ProgressReporter,
        token: &'a CancellationToken,
    ) -> Self {
        Self {
            filter,
            reporter,
            token,
        }
    }

    /// Writes the transcript for `files` (already sorted), stamped with the
    /// current local time.
    pub fn assemble<W: Write>(&self, files: &[DiscoveredFile], writer: W) -> Result<TranscriptInfo> {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.assemble_at(files, &timestamp, writer)
    }

    /// Like [`TranscriptAssembler::assemble`] with a fixed timestamp. Output
    /// is byte-identical for identical inputs.
    ///
    /// # Errors
    /// Returns `Error::Interrupted` if cancelled between files, and
    /// `Error::Io` if the sink fails. Unreadable source files do not fail
    /// the assembly: their body is left empty and a warning is reported.
    pub fn assemble_at<W: Write>(
        &self,
        files: &[DiscoveredFile],
        timestamp: &str,
        writer: W,
    ) -> Result<TranscriptInfo> {
        let mut out = CountingWriter::new(writer);
        self.reporter
            .phase(Phase::Assembling, Some(files.len() as u64));

        self.write_metadata(&mut out, timestamp).map_err(sink_error)?;
        write_structure(&mut out, files).map_err(sink_error)?;

        writeln!(out, "\n{}\n", FILES_HEADER).map_err(sink_error)?;
        let separator = "=".repeat(SECTION_SEPARATOR_WIDTH);
        for file in files {
            if self.token.is_cancelled() {
                return Err(Error::Interrupted);
            }
            let display = file.display_path();
            let body = match read_text(&file.absolute_path) {
                Ok(text) => text,
                Err(e) => {
                    let message = format!("{}: {}", display, io_error_with_path(e, &file.absolute_path));
                    warn!("Writing empty body for {}", message);
                    self.reporter.warn(&message);
                    String::new()
                }
            };
            write!(
                out,
                "{}{}\n{}\n{}\n\n",
                FILE_SECTION_PREFIX, display, separator, body
            )
            .map_err(sink_error)?;
            self.reporter
                .file_processed(&display, file.size, file.line_count);
        }
        out.flush().map_err(sink_error)?;

        let info = TranscriptInfo {
            bytes: out.bytes(),
            chars: out.chars(),
            files: files.len(),
        };
        debug!("Transcript assembled: {:?}", info);
        Ok(info)
    }

    fn write_metadata<W: Write>(&self, out: &mut W, timestamp: &str) -> io::Result<()> {
        writeln!(out, "{}", METADATA_HEADER)?;
        writeln!(out, "timestamp: {}", timestamp)?;
        writeln!(out, "source_directory: {}", self.filter.root.display())?;
        if self.filter.verbose {
            writeln!(
                out,
                "included_extensions: {}",
                render_list(self.filter.extensions.iter())
            )?;
            writeln!(
                out,
                "exclude_patterns: {}",
                render_list(self.filter.effective_patterns().iter())
            )?;
        }
        Ok(())
    }
}

fn write_structure<W: Write>(out: &mut W, files: &[DiscoveredFile]) -> io::Result<()> {
    writeln!(out, "\n{}", STRUCTURE_HEADER)?;
    for file in files {
        writeln!(out, "{}", file.display_path())?;
    }
    Ok(())
}

fn sink_error(e: io::Error) -> Error {
    io_error_with_path(e, "<transcript>")
}

/// Renders a sorted list as `['a', 'b']`. Items containing a single quote
/// and no double quote are wrapped in double quotes instead.
pub(crate) fn render_list<'s>(items: impl Iterator<Item = &'s String>) -> String {
    let rendered: Vec<String> = items
        .map(|item| {
            if item.contains('\'') && !item.contains('"') {
                format!("\"{}\"", item.replace('\\', "\\\\"))
            } else {
                format!("'{}'", item.replace('\\', "\\\\").replace('\'', "\\'"))
            }
        })
        .collect();
    format!("[{}]", rendered.join(", "))
}
