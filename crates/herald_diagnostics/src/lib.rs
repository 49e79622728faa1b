//! Diagnostic construction, validation, and multi-format emission.
//!
//! This crate provides the [`Diagnostic`] value (severity, message, optional
//! title, code, file, and start/end [`Position`]s), composable [`Annotation`]s
//! for filling in its optional fields, and the [`Reporter`] that validates,
//! counts, and forwards diagnostics to a single [`Emitter`]. Emitters render
//! diagnostics as plain text, log lines, JSON objects, GitHub Actions
//! annotations, or rustc-style terminal excerpts with an underlined source
//! range.

#![warn(missing_docs)]

pub mod annotation;
pub mod diagnostic;
pub mod emitter;
pub mod error;
pub mod metrics;
pub mod position;
pub mod recorder;
pub mod reporter;
pub mod severity;
pub mod wrap;

pub use annotation::Annotation;
pub use diagnostic::Diagnostic;
pub use emitter::{
    Emitter, GitHubEmitter, JsonEmitter, LogEmitter, NoopEmitter, TerminalEmitter,
    TerminalOptions, TextEmitter,
};
pub use error::{EmitError, ReportError, ValidationError};
pub use metrics::Metrics;
pub use position::Position;
pub use recorder::{Condition, Recorder};
pub use reporter::Reporter;
pub use severity::Severity;
pub use wrap::{Wrapper, DEFAULT_WIDTH};
