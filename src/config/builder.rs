// src/config/builder.rs

use super::{
    parsing::{normalize_extensions, parse_chunk_size, parse_endpoint, split_list},
    path_resolve::resolve_root,
    validation::validate_filter_config,
    Config, Destination, FilterConfig, DEFAULT_CHUNK_SIZE, DEFAULT_ENDPOINT,
};
use crate::cli::Cli;
use crate::errors::Result;
use crate::patterns::default_extensions;
use log::debug;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// A builder for creating a [`Config`] programmatically or from parsed CLI
/// arguments.
///
/// Every setting is optional; unset settings take the documented defaults.
///
/// # Examples
///
/// ```
/// use weaver::config::{ConfigBuilder, Destination};
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// let config = ConfigBuilder::new()
///     .directory(temp.path().to_str().unwrap())
///     .extensions(vec!["py".to_string(), "RS".to_string()])
///     .exclude(vec!["generated/".to_string()])
///     .output_file("transcript.txt")
///     .build()?;
///
/// assert!(config.filter.extensions.contains(".py"));
/// assert!(config.filter.extensions.contains(".rs"));
/// assert_eq!(config.destination, Destination::File("transcript.txt".into()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    directory: Option<String>,
    extensions: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    use_default_excludes: Option<bool>,
    chunk_size: Option<String>,
    verbose: Option<bool>,
    endpoint: Option<String>,
    output_file: Option<String>,
    dry_run: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            directory: Some(cli.directory),
            extensions: cli.extensions,
            exclude: cli.exclude,
            use_default_excludes: Some(!cli.no_default_excludes),
            chunk_size: cli.chunk_size,
            verbose: Some(cli.verbose),
            endpoint: Some(cli.endpoint),
            output_file: cli.output_file,
            dry_run: Some(cli.dry_run),
        }
    }

    /// Root directory to collect from. Defaults to `.`.
    pub fn directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Allowed extensions, with or without the leading dot. Case-insensitive.
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    /// Custom exclude patterns.
    pub fn exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = Some(patterns);
        self
    }

    /// Whether the catalog defaults join the custom patterns. Defaults to `true`.
    pub fn use_default_excludes(mut self, enabled: bool) -> Self {
        self.use_default_excludes = Some(enabled);
        self
    }

    /// Chunk size in characters, as a number or with a `byte-unit` suffix.
    pub fn chunk_size(mut self, size: impl ToString) -> Self {
        self.chunk_size = Some(size.to_string());
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Upload endpoint. Ignored when an output file is set.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Writes the transcript to this file instead of uploading it.
    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// Resolves, parses, and validates every setting into a [`Config`].
    ///
    /// # Errors
    /// Returns `Error::Io` if the directory cannot be resolved and
    /// `Error::Config` for any invalid value.
    pub fn build(self) -> Result<Config> {
        let root = resolve_root(self.directory.as_deref().unwrap_or("."))?;

        let extensions = match self.extensions {
            Some(list) => normalize_extensions(list),
            None => default_extensions(),
        };
        let exclude_patterns: BTreeSet<String> = self
            .exclude
            .map(split_list)
            .unwrap_or_default()
            .into_iter()
            .collect();
        let chunk_size = match self.chunk_size {
            Some(size) => parse_chunk_size(&size)?,
            None => DEFAULT_CHUNK_SIZE,
        };

        let filter = FilterConfig {
            root,
            extensions,
            exclude_patterns,
            use_default_excludes: self.use_default_excludes.unwrap_or(true),
            chunk_size,
            verbose: self.verbose.unwrap_or(false),
        };
        validate_filter_config(&filter)?;

        let destination = match self.output_file {
            Some(path) => Destination::File(PathBuf::from(path)),
            None => Destination::Endpoint(parse_endpoint(
                self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT),
            )?),
        };

        let config = Config {
            filter,
            destination,
            dry_run: self.dry_run.unwrap_or(false),
        };
        debug!("Built configuration: {:?}", config);
        Ok(config)
    }
}
