//! GitHub Actions workflow-command annotations.

use crate::diagnostic::Diagnostic;
use crate::emitter::Emitter;
use crate::error::EmitError;
use std::io::Write;

/// Writes GitHub Actions workflow-command annotations.
///
/// Each diagnostic becomes one line of the form
/// `::<severity> <field>,<field>::<message>`, with fields in the fixed order
/// `title`, `file`, `col`, `line`, `colEnd`, `lineEnd`, each present only when
/// its value is known. When there are no fields the separating space is
/// dropped.
#[derive(Debug)]
pub struct GitHubEmitter<W> {
    writer: W,
}

impl<W: Write> GitHubEmitter<W> {
    /// Creates a GitHub annotation emitter writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the emitter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Emitter for GitHubEmitter<W> {
    fn emit(&mut self, diag: &Diagnostic) -> Result<(), EmitError> {
        writeln!(self.writer, "{}", annotation_line(diag))?;
        Ok(())
    }
}

/// Formats the workflow command for `diag`, without a trailing newline.
fn annotation_line(diag: &Diagnostic) -> String {
    let fields = fields(diag);
    let message = escape_message(&diag.message);
    if fields.is_empty() {
        format!("::{}::{message}", diag.severity)
    } else {
        format!("::{} {}::{message}", diag.severity, fields.join(","))
    }
}

fn fields(diag: &Diagnostic) -> Vec<String> {
    let mut fields = Vec::new();
    if let Some(title) = diag.title_str() {
        let title = escape_field(title);
        match diag.code_str() {
            Some(code) => fields.push(format!("title=[{code}] {title}")),
            None => fields.push(format!("title={title}")),
        }
    }
    if let Some(file) = diag.file_path() {
        fields.push(format!("file={}", escape_field(&file.display().to_string())));
    }
    if diag.start.has_column() {
        fields.push(format!("col={}", diag.start.column));
    }
    if diag.start.has_line() {
        fields.push(format!("line={}", diag.start.line));
    }
    if diag.end.has_column() {
        fields.push(format!("colEnd={}", diag.end.column));
    }
    if diag.end.has_line() {
        fields.push(format!("lineEnd={}", diag.end.line));
    }
    fields
}

/// Commas separate fields, so they are percent-encoded inside a value.
fn escape_field(s: &str) -> String {
    s.replace(',', "%2C")
}

/// Workflow commands are line-oriented; line breaks in the message are
/// percent-encoded.
fn escape_message(s: &str) -> String {
    s.replace('\n', "%0A").replace('\r', "%0D")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Annotation;
    use crate::position::Position;

    fn emit_one(diag: &Diagnostic) -> String {
        let mut emitter = GitHubEmitter::new(Vec::new());
        emitter.emit(diag).unwrap();
        String::from_utf8(emitter.into_inner()).unwrap()
    }

    #[test]
    fn full_annotation() {
        let diag = Diagnostic::warning("something\nbroke").with([
            Annotation::title("Oops"),
            Annotation::code("W1"),
            Annotation::file("a.go"),
            Annotation::Start(Position::new(3, 5)),
        ]);
        assert_eq!(
            emit_one(&diag),
            "::warning title=[W1] Oops,file=a.go,col=5,line=3::something%0Abroke\n"
        );
    }

    #[test]
    fn title_without_code() {
        let diag = Diagnostic::error("m").with([Annotation::title("T")]);
        assert_eq!(emit_one(&diag), "::error title=T::m\n");
    }

    #[test]
    fn code_without_title_is_omitted() {
        let diag = Diagnostic::error("m").with([Annotation::code("E9")]);
        assert_eq!(emit_one(&diag), "::error::m\n");
    }

    #[test]
    fn end_fields_in_order() {
        let diag = Diagnostic::notice("range").with([
            Annotation::file("src/x.rs"),
            Annotation::Start(Position::new(1, 2)),
            Annotation::End(Position::new(4, 6)),
        ]);
        assert_eq!(
            emit_one(&diag),
            "::notice file=src/x.rs,col=2,line=1,colEnd=6,lineEnd=4::range\n"
        );
    }

    #[test]
    fn zero_values_are_skipped() {
        let diag = Diagnostic::error("m").with([Annotation::Line(7), Annotation::LineRange(7, 9)]);
        assert_eq!(emit_one(&diag), "::error line=7,lineEnd=9::m\n");
    }

    #[test]
    fn escapes_title_commas_and_message_breaks() {
        let diag = Diagnostic::error("a\r\nb").with([Annotation::title("x, y")]);
        assert_eq!(emit_one(&diag), "::error title=x%2C y::a%0D%0Ab\n");
    }

    #[test]
    fn escapes_file_commas() {
        let diag = Diagnostic::error("m").with([Annotation::file("a,b.go")]);
        assert_eq!(emit_one(&diag), "::error file=a%2Cb.go::m\n");
    }
}
