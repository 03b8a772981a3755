//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the run-level
//! failures that can surface to the caller, offering more context than generic
//! I/O or `anyhow` errors. Per-file problems never show up here: they are
//! recovered where they happen and reported through the progress channel.

use thiserror::Error;

/// Application-specific errors used throughout `weaver`.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Configuration Errors ---
    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// An exclusion pattern could not be compiled into a matching rule.
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    Pattern {
        /// The pattern text as given.
        pattern: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    // --- Upload Errors ---
    /// A chunk could not be delivered. Remaining chunks were not sent.
    #[error("Failed to send chunk {index} of {total}: {reason}")]
    Transmission {
        /// 1-based index of the chunk that failed.
        index: usize,
        /// Total number of chunks in the transcript.
        total: usize,
        /// Description of the transport failure.
        reason: String,
    },

    // --- Signal Handling ---
    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,

    /// No files matched the given criteria.
    #[error("No files found matching the specified criteria.")]
    NoFilesFound,
}

/// Result alias used by the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
