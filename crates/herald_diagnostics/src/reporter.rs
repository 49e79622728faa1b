//! Validation, counting, and routing of diagnostics to a single emitter.

use crate::diagnostic::Diagnostic;
use crate::emitter::{
    Emitter, GitHubEmitter, JsonEmitter, LogEmitter, NoopEmitter, TerminalEmitter,
    TerminalOptions, TextEmitter,
};
use crate::error::ReportError;
use crate::metrics::Metrics;
use crate::recorder::Recorder;
use crate::severity::Severity;
use std::io::Write;

/// Reports diagnostics to an [`Emitter`], keeping per-severity [`Metrics`].
///
/// Debug diagnostics are counted but only emitted once
/// [`show_debug`](Self::show_debug) has been enabled.
///
/// A `Reporter` is `Send` but does no internal locking: all writes happen
/// synchronously on the calling thread. Wrap it in a `Mutex` to share it
/// between threads.
pub struct Reporter<'a> {
    emitter: Box<dyn Emitter + Send + 'a>,
    metrics: Metrics,
    show_debug: bool,
}

impl<'a> Reporter<'a> {
    /// Creates a reporter around an arbitrary emitter.
    pub fn new(emitter: impl Emitter + Send + 'a) -> Self {
        Self {
            emitter: Box::new(emitter),
            metrics: Metrics::default(),
            show_debug: false,
        }
    }

    /// A reporter that writes each message verbatim.
    pub fn text<W: Write + Send + 'a>(writer: W) -> Self {
        Self::new(TextEmitter::new(writer))
    }

    /// A reporter that renders source excerpts for a terminal.
    pub fn terminal<W: Write + Send + 'a>(writer: W, options: TerminalOptions) -> Self {
        Self::new(TerminalEmitter::new(writer, options))
    }

    /// A reporter that writes one JSON object per line.
    pub fn json<W: Write + Send + 'a>(writer: W) -> Self {
        Self::new(JsonEmitter::new(writer))
    }

    /// A reporter that writes GitHub Actions annotations.
    pub fn github<W: Write + Send + 'a>(writer: W) -> Self {
        Self::new(GitHubEmitter::new(writer))
    }

    /// A reporter that writes `<severity>\t<message>` lines.
    pub fn log<W: Write + Send + 'a>(writer: W) -> Self {
        Self::new(LogEmitter::new(writer))
    }

    /// A reporter that emits nothing but still counts.
    pub fn noop() -> Self {
        Self::new(NoopEmitter)
    }

    /// A reporter that stores every diagnostic in `recorder`, with debug
    /// output enabled.
    pub fn recording(recorder: Recorder) -> Self {
        let mut reporter = Self::new(recorder);
        reporter.show_debug(true);
        reporter
    }

    /// Validates, counts, and emits a diagnostic.
    ///
    /// An invalid diagnostic is rejected before the metrics or the emitter
    /// are touched. Suppressed debug diagnostics return `Ok` after being
    /// counted. Emitter failures are returned as-is.
    pub fn report(&mut self, diag: &Diagnostic) -> Result<(), ReportError> {
        diag.validate()?;
        self.metrics.record(diag.severity);
        if diag.severity == Severity::Debug && !self.show_debug {
            return Ok(());
        }
        self.emitter.emit(diag)?;
        Ok(())
    }

    /// Enables or disables emission of debug diagnostics.
    pub fn show_debug(&mut self, show: bool) {
        self.show_debug = show;
    }

    /// Returns `true` if debug diagnostics are emitted.
    pub fn shows_debug(&self) -> bool {
        self.show_debug
    }

    /// Returns the counters accumulated so far.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Reports an error diagnostic with the given message.
    pub fn error(&mut self, message: impl Into<String>) -> Result<(), ReportError> {
        self.report(&Diagnostic::error(message))
    }

    /// Reports a warning diagnostic with the given message.
    pub fn warning(&mut self, message: impl Into<String>) -> Result<(), ReportError> {
        self.report(&Diagnostic::warning(message))
    }

    /// Reports a notice diagnostic with the given message.
    pub fn notice(&mut self, message: impl Into<String>) -> Result<(), ReportError> {
        self.report(&Diagnostic::notice(message))
    }

    /// Reports a debug diagnostic with the given message.
    pub fn debug(&mut self, message: impl Into<String>) -> Result<(), ReportError> {
        self.report(&Diagnostic::debug(message))
    }

    /// Reports an error diagnostic and terminates the process.
    ///
    /// # Process exit
    ///
    /// This never returns: after reporting it calls
    /// [`std::process::exit`] with status 1, so destructors of live values do
    /// not run. A failure to report is ignored since the process is exiting
    /// regardless.
    pub fn fatal(&mut self, message: impl Into<String>) -> ! {
        if let Err(e) = self.error(message) {
            tracing::debug!("fatal diagnostic not reported: {e}");
        }
        std::process::exit(1)
    }
}
