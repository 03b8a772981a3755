// src/progress.rs

//! Defines a trait for observing a collection run.
//!
//! The pipeline only talks to the terminal through [`ProgressReporter`]; it
//! never reads anything back, so any implementation can be swapped in.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// The stage a run is in, announced through [`ProgressReporter::phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Discovering,
    Assembling,
    Uploading,
}

impl Phase {
    /// Short label shown next to the progress bar.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Discovering => "Discovering files",
            Phase::Assembling => "Assembling transcript",
            Phase::Uploading => "Uploading chunks",
        }
    }
}

/// Receives progress events from the pipeline.
///
/// # Examples
///
/// ```
/// use weaver::progress::{Phase, ProgressReporter};
/// use std::sync::Mutex;
///
/// // A mock reporter that remembers the files it was told about.
/// #[derive(Default)]
/// struct MockProgress {
///     files: Mutex<Vec<String>>,
/// }
/// impl ProgressReporter for MockProgress {
///     fn phase(&self, _phase: Phase, _total: Option<u64>) {}
///     fn file_processed(&self, path: &str, _size: u64, _lines: usize) {
///         self.files.lock().unwrap().push(path.to_string());
///     }
///     fn warn(&self, _message: &str) {}
///     fn chunk_sent(&self, _index: usize, _total: usize) {}
///     fn finish(&self) {}
/// }
///
/// let reporter = MockProgress::default();
/// reporter.file_processed("src/main.py", 120, 10);
/// assert_eq!(*reporter.files.lock().unwrap(), vec!["src/main.py"]);
/// ```
pub trait ProgressReporter: Send + Sync {
    /// A new phase begins; `total` is the number of steps if known.
    fn phase(&self, phase: Phase, total: Option<u64>);
    /// A file was accepted (discovery) or written (assembly).
    fn file_processed(&self, path: &str, size: u64, lines: usize);
    /// A per-entry problem that did not stop the run.
    fn warn(&self, message: &str);
    /// Chunk `index` (1-based) of `total` was acknowledged.
    fn chunk_sent(&self, index: usize, total: usize);
    /// The run is over; clear any live display.
    fn finish(&self);
}

/// A `ProgressReporter` that does nothing.
///
/// This is used as a default or in non-interactive environments where a progress
/// bar is not desired.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn phase(&self, _phase: Phase, _total: Option<u64>) {}
    fn file_processed(&self, _path: &str, _size: u64, _lines: usize) {}
    fn warn(&self, _message: &str) {}
    fn chunk_sent(&self, _index: usize, _total: usize) {}
    fn finish(&self) {}
}

/// Bar template for phases with a known number of steps.
#[cfg(feature = "progress")]
const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {prefix} {wide_msg}";

/// Spinner template for phases of unknown length, such as discovery.
#[cfg(feature = "progress")]
const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {prefix}: {pos} found {wide_msg}";

#[cfg(feature = "progress")]
fn template_for(total: Option<u64>) -> &'static str {
    match total {
        Some(_) => BAR_TEMPLATE,
        None => SPINNER_TEMPLATE,
    }
}

/// An implementation of `ProgressReporter` using the `indicatif` crate.
///
/// Phases with a known total show a bar; the discovery phase shows a
/// spinner with a running count.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates the progress bar. Each phase sets its own style.
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::new(0),
        }
    }

    fn apply_style(&self, total: Option<u64>) {
        let style = match total {
            Some(_) => ProgressStyle::default_bar(),
            None => ProgressStyle::default_spinner(),
        };
        if let Ok(style) = style.template(template_for(total)) {
            self.bar.set_style(style.progress_chars("#>-"));
        }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn phase(&self, phase: Phase, total: Option<u64>) {
        self.apply_style(total);
        self.bar.set_position(0);
        self.bar.set_length(total.unwrap_or(0));
        self.bar.set_prefix(phase.label());
        self.bar.set_message("");
    }

    fn file_processed(&self, path: &str, size: u64, lines: usize) {
        self.bar.inc(1);
        self.bar
            .set_message(format!("{} ({} bytes, {} lines)", path, size, lines));
    }

    fn warn(&self, message: &str) {
        self.bar.println(format!("warning: {}", message));
    }

    fn chunk_sent(&self, index: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(index as u64);
        self.bar.set_message(format!("chunk {}/{}", index, total));
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(all(test, feature = "progress"))]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_total_uses_spinner_without_length() {
        let template = template_for(None);
        assert!(!template.contains("{len}"));
        assert!(!template.contains("{bar"));
        assert!(template.contains("{pos}"));
        assert!(template_for(Some(3)).contains("{pos}/{len}"));
    }

    #[test]
    fn test_templates_parse() {
        assert!(ProgressStyle::default_bar().template(BAR_TEMPLATE).is_ok());
        assert!(ProgressStyle::default_spinner().template(SPINNER_TEMPLATE).is_ok());
    }

    #[test]
    fn test_phase_changes_do_not_panic() {
        let progress = IndicatifProgress::new();
        progress.phase(Phase::Discovering, None);
        progress.file_processed("src/main.py", 10, 1);
        progress.phase(Phase::Uploading, Some(2));
        progress.chunk_sent(1, 2);
        progress.finish();
    }
}
