// src/output/mod.rs

//! Terminal-facing text: the run summary with its file tree, the dry-run
//! listing, and the catalog tables printed by `--show-patterns`, `--show-extensions` and
//! `--help-examples`.
//!
//! Everything here writes to a caller-supplied `io::Write` so the binary can
//! pick stdout or stderr and tests can capture the text.

pub mod catalog;
pub mod dry_run;
pub mod summary;
pub mod tree;

pub use catalog::{write_catalog, CatalogRequest};
pub use dry_run::write_dry_run_output;
pub use summary::write_summary;
pub use tree::FileTree;
