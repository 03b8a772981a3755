//! Delivers transcript chunks to their destination.
//!
//! The pipeline only knows the [`Transport`] trait. [`upload`] drives it
//! strictly in order: chunk *i + 1* is handed over only after chunk *i* was
//! acknowledged, and the first failure ends the upload.

use crate::cancellation::CancellationToken;
use crate::chunker::Chunk;
use crate::errors::{io_error_with_path, Error, Result};
use crate::progress::{Phase, ProgressReporter};
use log::{debug, info};
use std::io;
use thiserror::Error;

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::HttpTransport;

/// Why a single chunk could not be delivered.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The endpoint answered with a non-success status.
    #[error("endpoint responded with HTTP {status}")]
    Status { status: u16 },
    /// The request could not be completed (connection refused, timeout, ...).
    #[error("request failed: {0}")]
    Request(String),
}

/// Sends one chunk and reports whether it was acknowledged.
pub trait Transport {
    fn send(&self, chunk: &Chunk) -> std::result::Result<(), TransportError>;
}

/// Sends every chunk in order and returns how many were delivered.
///
/// # Errors
/// - `Error::Transmission` on the first chunk the transport rejects; later
///   chunks are never read or sent.
/// - `Error::Interrupted` if the token is cancelled between sends.
/// - `Error::Io` if reading the transcript fails.
pub fn upload<T, I>(
    transport: &T,
    chunks: I,
    total: usize,
    token: &CancellationToken,
    reporter: &dyn ProgressReporter,
) -> Result<usize>
where
    T: Transport + ?Sized,
    I: IntoIterator<Item = io::Result<Chunk>>,
{
    reporter.phase(Phase::Uploading, Some(total as u64));
    let mut sent = 0;
    for chunk in chunks {
        if token.is_cancelled() {
            info!("Upload cancelled after {} of {} chunks.", sent, total);
            return Err(Error::Interrupted);
        }
        let chunk = chunk.map_err(|e| io_error_with_path(e, "<transcript spool>"))?;
        debug!(
            "Sending chunk {}/{} ({} bytes)",
            chunk.index,
            total,
            chunk.content.len()
        );
        transport
            .send(&chunk)
            .map_err(|e| Error::Transmission {
                index: chunk.index,
                total,
                reason: e.to_string(),
            })?;
        sent += 1;
        reporter.chunk_sent(chunk.index, total);
    }
    Ok(sent)
}
