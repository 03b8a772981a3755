// src/cli.rs

use clap::Parser;

/// Collect source files from a directory tree and ship them as one transcript.
///
/// weaver walks a directory, keeps files whose extension is allowed and whose
/// relative path is not excluded, concatenates them with metadata headers into
/// a single transcript, and uploads the transcript in chunks to an HTTP
/// endpoint (or writes it to a file with --output).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory to collect files from.
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub directory: String,

    // --- Filtering Options ---
    /// File extensions to include, comma separated (e.g. "py,rs" or ".py,.rs").
    /// Defaults to the built-in source extensions (see --show-extensions).
    #[arg(short = 'e', long, value_name = "EXT", value_delimiter = ',', num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Additional exclude patterns, comma separated. Patterns containing '*'
    /// are anchored globs, others match anywhere in the relative path.
    #[arg(short = 'x', long, value_name = "PATTERN", value_delimiter = ',', num_args = 1..)]
    pub exclude: Option<Vec<String>>,

    /// Do not apply the default exclude patterns (see --show-patterns).
    #[arg(short = 'a', long, action = clap::ArgAction::SetTrue)]
    pub no_default_excludes: bool,

    /// List the effective extensions and exclude patterns in the transcript metadata.
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    // --- Catalog Display ---
    /// Print the default exclude patterns by category and exit.
    #[arg(short = 'p', long, action = clap::ArgAction::SetTrue)]
    pub show_patterns: bool,

    /// Print the default extensions with descriptions and exit.
    #[arg(short = 's', long, action = clap::ArgAction::SetTrue)]
    pub show_extensions: bool,

    /// Print usage examples and exit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub help_examples: bool,

    // --- Output Destination ---
    /// Endpoint that receives the transcript chunks as JSON POST requests.
    #[arg(long, value_name = "URL", default_value = crate::config::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Maximum characters per uploaded chunk (e.g. "1048576", "512KiB").
    #[arg(short = 'c', long, value_name = "SIZE")]
    pub chunk_size: Option<String>,

    /// Write the transcript to the specified file instead of uploading it.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<String>,

    // --- Execution Control ---
    /// Perform a dry run. List the files that would be collected without
    /// building or sending a transcript.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,
}

impl Cli {
    /// `true` if one of the catalog display flags was given.
    pub fn wants_catalog(&self) -> bool {
        self.show_patterns || self.show_extensions || self.help_examples
    }
}
