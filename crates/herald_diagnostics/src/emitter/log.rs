//! Tab-separated `severity\tmessage` log lines.

use crate::diagnostic::Diagnostic;
use crate::emitter::Emitter;
use crate::error::EmitError;
use std::io::Write;

/// Writes one `<severity>\t<message>` line per diagnostic.
///
/// A newline is appended unless the message already ends with one.
#[derive(Debug)]
pub struct LogEmitter<W> {
    writer: W,
}

impl<W: Write> LogEmitter<W> {
    /// Creates a log emitter writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the emitter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Emitter for LogEmitter<W> {
    fn emit(&mut self, diag: &Diagnostic) -> Result<(), EmitError> {
        let mut line = format!("{}\t{}", diag.severity, diag.message);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }
}
