// src/constants.rs

/// Opens the metadata block of a transcript.
pub const METADATA_HEADER: &str = "=== Code Collection Metadata ===";

/// Opens the directory-structure block of a transcript.
pub const STRUCTURE_HEADER: &str = "=== Directory Structure ===";

/// Opens the files block of a transcript.
pub const FILES_HEADER: &str = "=== Files ===";

/// Prefix of the line that names each file section.
pub const FILE_SECTION_PREFIX: &str = "File: ";

/// Number of `=` characters in the line under each file section header.
pub const SECTION_SEPARATOR_WIDTH: usize = 80;

/// Timestamp layout for the metadata block (ISO-8601, local time, microseconds).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
