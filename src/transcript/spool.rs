// src/transcript/spool.rs

use super::{TranscriptAssembler, TranscriptInfo};
use crate::core_types::DiscoveredFile;
use crate::errors::{io_error_with_path, Result};
use log::debug;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// A transcript realized in a temporary file.
///
/// The file is removed when the spool is dropped, whether the run finished,
/// failed, or was cancelled.
pub struct TranscriptSpool {
    file: NamedTempFile,
    info: TranscriptInfo,
}

impl TranscriptSpool {
    /// Assembles the transcript for `files` into a new temporary file.
    ///
    /// # Errors
    /// Returns `Error::Io` if the temporary file cannot be created or
    /// written, and `Error::Interrupted` if assembly was cancelled (the
    /// partial file is removed).
    pub fn create(assembler: &TranscriptAssembler<'_>, files: &[DiscoveredFile]) -> Result<Self> {
        let mut file = NamedTempFile::new()
            .map_err(|e| io_error_with_path(e, std::env::temp_dir()))?;
        let info = {
            let mut writer = BufWriter::new(file.as_file_mut());
            let info = assembler.assemble(files, &mut writer)?;
            writer
                .flush()
                .map_err(|e| io_error_with_path(e, "<transcript spool>"))?;
            info
        };
        debug!(
            "Spooled transcript to '{}' ({} bytes)",
            file.path().display(),
            info.bytes
        );
        Ok(Self { file, info })
    }

    pub fn info(&self) -> TranscriptInfo {
        self.info
    }

    /// Location of the temporary file while the spool is alive.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Opens a fresh reader positioned at the start of the transcript.
    pub fn reader(&self) -> Result<BufReader<File>> {
        let file = self
            .file
            .reopen()
            .map_err(|e| io_error_with_path(e, self.file.path()))?;
        Ok(BufReader::new(file))
    }

    /// Copies the transcript to `destination`, replacing any existing file.
    /// The spool itself is still removed on drop.
    pub fn persist_copy(&self, destination: &Path) -> Result<u64> {
        fs::copy(self.file.path(), destination)
            .map_err(|e| io_error_with_path(e, destination))
    }
}
