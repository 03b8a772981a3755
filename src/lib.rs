//! `weaver` is a library and command-line tool that collects the source files
//! of a directory tree into a single transcript and ships it, in chunks, to an
//! HTTP endpoint.
//!
//! As a library, it provides a small, sequential pipeline:
//! 1.  **Discover**: walk the root, keep files whose extension is allowed and
//!     whose relative path is not excluded ([`discovery`], [`patterns`]).
//! 2.  **Assemble**: stream metadata, the directory structure and every
//!     file's contents into a transcript ([`transcript`]).
//! 3.  **Chunk and send**: split the transcript into ordered chunks and hand
//!     them to a [`transport::Transport`] one at a time ([`chunker`]).
//!
//! [`run`] wires the stages together the way the binary does.
//!
//! # Example: Library Usage
//!
//! ```
//! use weaver::{run_with, CancellationToken, ConfigBuilder, RunOutcome};
//! use weaver::progress::NoOpProgress;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Set up a directory with some files.
//! let temp = tempdir()?;
//! fs::create_dir(temp.path().join("src"))?;
//! fs::write(temp.path().join("src/main.py"), "print('hello')\n")?;
//! fs::write(temp.path().join("README.md"), "# not collected\n")?;
//! let out = temp.path().join("transcript.txt");
//!
//! // 2. Build a configuration that writes the transcript to a file.
//! let config = ConfigBuilder::new()
//!     .directory(temp.path().to_str().unwrap())
//!     .extensions(vec![".py".to_string()])
//!     .output_file(out.to_str().unwrap())
//!     .build()?;
//!
//! // 3. Run the pipeline.
//! let outcome = run_with(&config, &CancellationToken::new(), &NoOpProgress, None)?;
//!
//! // 4. Inspect the result.
//! match outcome {
//!     RunOutcome::Completed(summary) => assert_eq!(summary.statistics.total_files, 1),
//!     RunOutcome::Cancelled => unreachable!(),
//! }
//! let transcript = fs::read_to_string(&out)?;
//! assert!(transcript.contains("=== Directory Structure ===\nsrc/main.py\n"));
//! assert!(transcript.contains("File: src/main.py\n"));
//! # Ok(())
//! # }
//! ```

pub mod cancellation;
pub mod chunker;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod patterns;
pub mod progress;
pub mod signal;
pub mod statistics;
pub mod transcript;
pub mod transport;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder, Destination};
pub use core_types::{DiscoveredFile, RunOutcome, RunSummary};

use crate::chunker::{chunk_count, Chunks};
use crate::errors::{io_error_with_path, Error, Result};
use crate::progress::{NoOpProgress, Phase, ProgressReporter};
use crate::statistics::CollectionStatistics;
use crate::transcript::{TranscriptAssembler, TranscriptSpool};
use crate::transport::Transport;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::Arc;
use std::time::Instant;

/// Executes the complete pipeline with the default HTTP transport.
///
/// This mirrors the command-line execution: discovery, then either a dry-run
/// listing, a transcript file, or a chunked upload to the configured
/// endpoint.
///
/// # Errors
/// Returns `Err(Error::NoFilesFound)` if nothing qualifies, and propagates
/// configuration, I/O and transmission errors. A user interrupt is not an
/// error: it yields `Ok(RunOutcome::Cancelled)`.
pub fn run(
    config: &Config,
    token: &CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<RunOutcome> {
    match progress {
        Some(reporter) => run_with(config, token, reporter.as_ref(), None),
        None => run_with(config, token, &NoOpProgress, None),
    }
}

/// Executes the pipeline with an explicit reporter and, optionally, an
/// explicit transport.
///
/// When `transport` is `None` and the destination is an endpoint, an
/// [`transport::HttpTransport`] is created for it (feature `http`).
pub fn run_with(
    config: &Config,
    token: &CancellationToken,
    reporter: &dyn ProgressReporter,
    transport: Option<&dyn Transport>,
) -> Result<RunOutcome> {
    let result = run_stages(config, token, reporter, transport);
    reporter.finish();
    match result {
        Err(Error::Interrupted) => {
            info!("Run cancelled; temporary transcript removed.");
            Ok(RunOutcome::Cancelled)
        }
        other => other.map(RunOutcome::Completed),
    }
}

fn run_stages(
    config: &Config,
    token: &CancellationToken,
    reporter: &dyn ProgressReporter,
    transport: Option<&dyn Transport>,
) -> Result<RunSummary> {
    let started = Instant::now();
    let filter = &config.filter;

    // --- Discover ---
    let patterns = filter.pattern_set()?;
    debug!("Compiled {} exclusion patterns.", patterns.len());
    if filter.verbose {
        for (category, group) in filter.pattern_summary() {
            info!("Excluding {}: {}", category, group.join(", "));
        }
    }
    reporter.phase(Phase::Discovering, None);
    let mut statistics = CollectionStatistics::default();
    let files = discovery::collect_sorted(filter, &patterns, token, reporter, &mut statistics)?;
    if files.is_empty() {
        return Err(Error::NoFilesFound);
    }
    let tree = output::FileTree::from_paths(files.iter().map(DiscoveredFile::display_path));

    if config.dry_run {
        write_dry_run(config, &files)?;
        return Ok(RunSummary {
            elapsed: started.elapsed(),
            statistics,
            chunks_sent: 0,
            transcript: Default::default(),
            destination: config.destination.clone(),
            tree,
        });
    }

    // --- Assemble ---
    let assembler = TranscriptAssembler::new(filter, reporter, token);
    let spool = TranscriptSpool::create(&assembler, &files)?;
    let transcript = spool.info();

    // --- Deliver ---
    let chunks_sent = match &config.destination {
        Destination::File(path) => {
            spool.persist_copy(path)?;
            info!("Transcript written to '{}'.", path.display());
            0
        }
        Destination::Endpoint(endpoint) => {
            let total = chunk_count(transcript.chars, filter.chunk_size);
            let chunks = Chunks::new(spool.reader()?, filter.chunk_size)
                .map_err(|e| io_error_with_path(e, spool.path()))?;
            let sent = match transport {
                Some(transport) => transport::upload(transport, chunks, total, token, reporter)?,
                None => upload_over_http(endpoint, chunks, total, token, reporter)?,
            };
            info!("Sent {} chunk(s) to {}.", sent, endpoint);
            sent
        }
    };

    Ok(RunSummary {
        elapsed: started.elapsed(),
        statistics,
        chunks_sent,
        transcript,
        destination: config.destination.clone(),
        tree,
    })
}

#[cfg(feature = "http")]
fn upload_over_http(
    endpoint: &str,
    chunks: Chunks<io::BufReader<File>>,
    total: usize,
    token: &CancellationToken,
    reporter: &dyn ProgressReporter,
) -> Result<usize> {
    let http = transport::HttpTransport::new(endpoint)?;
    transport::upload(&http, chunks, total, token, reporter)
}

#[cfg(not(feature = "http"))]
fn upload_over_http(
    _endpoint: &str,
    _chunks: Chunks<io::BufReader<File>>,
    _total: usize,
    _token: &CancellationToken,
    _reporter: &dyn ProgressReporter,
) -> Result<usize> {
    Err(Error::Config(
        "weaver was built without the `http` feature; use --output instead.".to_string(),
    ))
}

/// Writes the dry-run listing to the output file if one is set, else stdout.
fn write_dry_run(config: &Config, files: &[DiscoveredFile]) -> Result<()> {
    match &config.destination {
        Destination::File(path) => {
            let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
            let mut writer = BufWriter::new(file);
            output::write_dry_run_output(&mut writer, files)
                .and_then(|_| writer.flush())
                .map_err(|e| io_error_with_path(e, path))
        }
        Destination::Endpoint(_) => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            output::write_dry_run_output(&mut writer, files)
                .and_then(|_| writer.flush())
                .map_err(|e| io_error_with_path(e, "<stdout>"))
        }
    }
}
