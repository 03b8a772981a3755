// src/main.rs

use anyhow::Result;
use clap::Parser;
use std::io;
use std::sync::Arc;
use weaver::cli::Cli;
use weaver::config::ConfigBuilder;
use weaver::errors::Error;
use weaver::output::{write_catalog, write_summary, CatalogRequest};
#[cfg(feature = "progress")]
use weaver::progress::IndicatifProgress;
use weaver::progress::ProgressReporter;
use weaver::signal::setup_signal_handler;
use weaver::{run, RunOutcome};

/// Exit status when nothing matched the filters.
const EXIT_NO_FILES: i32 = 2;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "weaver=debug".parse()?
                } else {
                    "weaver=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting weaver v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    let cli = Cli::parse();

    // --- Catalog views print and exit without collecting ---
    if cli.wants_catalog() {
        let request = CatalogRequest {
            extensions: cli.show_extensions,
            patterns: cli.show_patterns,
            examples: cli.help_examples,
        };
        write_catalog(&mut io::stdout().lock(), request)?;
        return Ok(());
    }

    // Decide whether to show a progress bar. Show it if stderr is a TTY.
    let progress_reporter: Option<Arc<dyn ProgressReporter>> = {
        #[cfg(feature = "progress")]
        {
            if atty::is(atty::Stream::Stderr) {
                Some(Arc::new(IndicatifProgress::new()))
            } else {
                None
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            None
        }
    };

    // --- Configuration & Execution ---
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let token = setup_signal_handler()?;

    let result = run(&config, &token, progress_reporter);

    // --- Outcome Handling ---
    match result {
        Ok(RunOutcome::Completed(summary)) => {
            if !config.dry_run {
                write_summary(&mut io::stderr().lock(), &summary)?;
            }
        }
        Ok(RunOutcome::Cancelled) => {
            eprintln!("\nCollection interrupted by user.");
            std::process::exit(130);
        }
        Err(Error::NoFilesFound) => {
            eprintln!("weaver: No files found matching the specified criteria.");
            std::process::exit(EXIT_NO_FILES);
        }
        Err(Error::Interrupted) => {
            eprintln!("\nOperation cancelled.");
            std::process::exit(130);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
