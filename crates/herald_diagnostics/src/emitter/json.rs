//! One JSON object per diagnostic, newline-delimited.

use crate::diagnostic::Diagnostic;
use crate::emitter::Emitter;
use crate::error::EmitError;
use herald_source::absolutize;
use std::borrow::Cow;
use std::io::Write;

/// Writes each diagnostic as a single-line JSON object.
///
/// A non-empty `file` is written in absolute form when it can be resolved,
/// otherwise as given. The caller's diagnostic is left untouched.
#[derive(Debug)]
pub struct JsonEmitter<W> {
    writer: W,
}

impl<W: Write> JsonEmitter<W> {
    /// Creates a JSON emitter writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the emitter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Emitter for JsonEmitter<W> {
    fn emit(&mut self, diag: &Diagnostic) -> Result<(), EmitError> {
        let mut record = Cow::Borrowed(diag);
        if let Some(file) = diag.file_path() {
            match absolutize(file) {
                Ok(abs) => record.to_mut().file = Some(abs),
                Err(e) => tracing::debug!("keeping relative path {}: {e}", file.display()),
            }
        }
        serde_json::to_writer(&mut self.writer, &*record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
