//! An emitter that discards everything.

use crate::diagnostic::Diagnostic;
use crate::emitter::Emitter;
use crate::error::EmitError;

/// An emitter that discards every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopEmitter;

impl Emitter for NoopEmitter {
    fn emit(&mut self, _diag: &Diagnostic) -> Result<(), EmitError> {
        Ok(())
    }
}
