// src/filtering/mod.rs

//! Per-entry checks used by the discovery stage.
//!
//! These are exposed publicly so that the extension gate and the text
//! handling can be reused outside of a full collection run.

mod extension;
mod file_type;
mod text_detection;

pub use extension::passes_extension_gate;
pub use file_type::is_regular_file;
pub use text_detection::{count_lines, looks_binary, read_text};
