//! Verbatim message output.

use crate::diagnostic::Diagnostic;
use crate::emitter::Emitter;
use crate::error::EmitError;
use std::io::Write;

/// Writes each diagnostic's message verbatim.
///
/// No separator or newline is added; callers that want one end their
/// messages with it.
#[derive(Debug)]
pub struct TextEmitter<W> {
    writer: W,
}

impl<W: Write> TextEmitter<W> {
    /// Creates a text emitter writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the emitter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Emitter for TextEmitter<W> {
    fn emit(&mut self, diag: &Diagnostic) -> Result<(), EmitError> {
        self.writer.write_all(diag.message.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Annotation;

    #[test]
    fn writes_message_only() {
        let mut emitter = TextEmitter::new(Vec::new());
        let diag = Diagnostic::error("hello").with([Annotation::title("ignored")]);
        emitter.emit(&diag).unwrap();
        emitter.emit(&Diagnostic::notice(" world\n")).unwrap();
        assert_eq!(emitter.into_inner(), b"hello world\n");
    }
}
