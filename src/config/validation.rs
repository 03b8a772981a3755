// src/config/validation.rs

use super::FilterConfig;
use crate::errors::{Error, Result};

/// Checks the invariants of a fully built `FilterConfig`.
pub(super) fn validate_filter_config(filter: &FilterConfig) -> Result<()> {
    if filter.extensions.is_empty() {
        return Err(Error::Config(
            "At least one file extension is required.".to_string(),
        ));
    }
    if filter.chunk_size == 0 {
        return Err(Error::Config(
            "Chunk size must be greater than 0.".to_string(),
        ));
    }
    Ok(())
}
