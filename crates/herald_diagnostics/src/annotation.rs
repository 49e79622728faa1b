//! Composable mutators that fill in a diagnostic's optional fields.

use crate::diagnostic::Diagnostic;
use crate::position::Position;
use std::path::PathBuf;

/// An optional piece of information attached to a [`Diagnostic`].
///
/// Annotations only touch the fields they name, so they can be applied in any
/// order: [`Annotation::Line`] followed by [`Annotation::Column`] produces the
/// same start position as the reverse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Annotation {
    /// Sets the title.
    Title(String),
    /// Sets the file.
    File(PathBuf),
    /// Sets the code.
    Code(String),
    /// Sets the start line.
    Line(u32),
    /// Sets the start and end lines.
    LineRange(u32, u32),
    /// Sets the start column.
    Column(u32),
    /// Sets the start and end columns.
    ColumnRange(u32, u32),
    /// Sets the whole start position.
    Start(Position),
    /// Sets the whole end position.
    End(Position),
}

impl Annotation {
    /// A [`Title`](Annotation::Title) annotation.
    pub fn title(title: impl Into<String>) -> Self {
        Annotation::Title(title.into())
    }

    /// A [`File`](Annotation::File) annotation.
    pub fn file(file: impl Into<PathBuf>) -> Self {
        Annotation::File(file.into())
    }

    /// A [`Code`](Annotation::Code) annotation.
    pub fn code(code: impl Into<String>) -> Self {
        Annotation::Code(code.into())
    }

    /// Writes this annotation into `diag`.
    pub fn apply(self, diag: &mut Diagnostic) {
        match self {
            Annotation::Title(title) => diag.title = Some(title),
            Annotation::File(file) => diag.file = Some(file),
            Annotation::Code(code) => diag.code = Some(code),
            Annotation::Line(line) => diag.start.line = line,
            Annotation::LineRange(start, end) => {
                diag.start.line = start;
                diag.end.line = end;
            }
            Annotation::Column(column) => diag.start.column = column,
            Annotation::ColumnRange(start, end) => {
                diag.start.column = start;
                diag.end.column = end;
            }
            Annotation::Start(pos) => diag.start = pos,
            Annotation::End(pos) => diag.end = pos,
        }
    }
}
