//! Emission backends that turn a [`Diagnostic`] into bytes on a sink.
//!
//! Every backend implements the single-method [`Emitter`] trait. The plain
//! variants ([`TextEmitter`], [`LogEmitter`], [`JsonEmitter`],
//! [`GitHubEmitter`], [`NoopEmitter`]) serialize fields directly; the
//! [`TerminalEmitter`] renders a rustc-style source excerpt.

mod github;
mod json;
mod log;
mod noop;
mod terminal;
mod text;

pub use github::GitHubEmitter;
pub use json::JsonEmitter;
pub use log::LogEmitter;
pub use noop::NoopEmitter;
pub use terminal::{TerminalEmitter, TerminalOptions};
pub use text::TextEmitter;

use crate::diagnostic::Diagnostic;
use crate::error::EmitError;

/// A mechanism for emitting diagnostics.
///
/// Emitters write synchronously to their sink and perform no locking; an
/// emitter shared between threads must be guarded externally.
pub trait Emitter {
    /// Emits a single diagnostic.
    ///
    /// Fails only if the underlying sink rejects a write.
    fn emit(&mut self, diag: &Diagnostic) -> Result<(), EmitError>;
}

impl<E: Emitter + ?Sized> Emitter for &mut E {
    fn emit(&mut self, diag: &Diagnostic) -> Result<(), EmitError> {
        (**self).emit(diag)
    }
}

impl<E: Emitter + ?Sized> Emitter for Box<E> {
    fn emit(&mut self, diag: &Diagnostic) -> Result<(), EmitError> {
        (**self).emit(diag)
    }
}
