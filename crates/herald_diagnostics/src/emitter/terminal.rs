//! Rustc-style terminal rendering with source excerpts and underlines.

use crate::diagnostic::Diagnostic;
use crate::emitter::Emitter;
use crate::error::EmitError;
use crate::position::Position;
use crate::severity::Severity;
use crate::wrap::Wrapper;
use crossterm::style::{Attribute, Color, ContentStyle};
use herald_source::{count_digits, expand_tabs, relative_to, visual_column, SourceFile};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Construction options for a [`TerminalEmitter`].
#[derive(Clone, Debug)]
pub struct TerminalOptions {
    /// The directory file paths are shown relative to. `None` means the
    /// working directory at construction time.
    pub base_path: Option<PathBuf>,
    /// The wrap width for message text. `None` or 0 means
    /// [`DEFAULT_WIDTH`](crate::DEFAULT_WIDTH).
    pub wrap_width: Option<usize>,
    /// Whether to emit ANSI styling.
    pub color: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            base_path: None,
            wrap_width: None,
            color: true,
        }
    }
}

/// Renders diagnostics for a human reading a terminal.
///
/// Produces output like:
/// ```text
/// error[E0425]: unresolved name
///  --> src/lib.rs:2:10-12
///   |
/// 2 |    let x = foo;
///   |            ^~~
///   |
///   | cannot find value `foo` in this scope
///   |
/// ```
///
/// The referenced file is read afresh on every call. If it cannot be read,
/// the excerpt and underline are left out; only a failing writer makes
/// [`emit`](Emitter::emit) return an error.
#[derive(Debug)]
pub struct TerminalEmitter<W> {
    writer: W,
    base_path: Option<PathBuf>,
    wrapper: Wrapper,
    color: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Creates a terminal emitter writing to `writer`.
    pub fn new(writer: W, options: TerminalOptions) -> Self {
        let base_path = options.base_path.or_else(|| match std::env::current_dir() {
            Ok(cwd) => Some(cwd),
            Err(e) => {
                tracing::debug!("showing paths as given, no working directory: {e}");
                None
            }
        });
        Self {
            writer,
            base_path,
            wrapper: Wrapper::new(options.wrap_width.unwrap_or(0)),
            color: options.color,
        }
    }

    /// Consumes the emitter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> TerminalEmitter<W> {
    /// Renders `diag` to a string exactly as [`emit`](Emitter::emit) would write it.
    pub fn render(&self, diag: &Diagnostic) -> String {
        let style = severity_style(diag.severity);
        let gutter = Gutter::for_range(diag.start, diag.end);
        let mut out = String::new();

        self.render_title(&mut out, style, diag);
        if let Some(file) = diag.file_path() {
            self.render_source_arrow(&mut out, style, &gutter, diag, file);
            if diag.start.has_line() {
                match SourceFile::load(file) {
                    Ok(source) => {
                        if self.render_excerpt(&mut out, style, &gutter, diag, &source) {
                            self.render_underline(&mut out, style, &gutter, diag, &source);
                        }
                    }
                    Err(e) => {
                        tracing::debug!("skipping excerpt of {}: {e}", file.display());
                    }
                }
            }
        }
        self.render_body(&mut out, style, &gutter, diag);
        out
    }

    /// `severity[code]: title`, falling back to the wrapped message.
    fn render_title(&self, out: &mut String, style: ContentStyle, diag: &Diagnostic) {
        out.push_str(&self.paint(style, diag.severity));
        if let Some(code) = diag.code_str() {
            out.push_str(&self.paint(style, "["));
            out.push_str(&self.paint(code_style(), code));
            out.push_str(&self.paint(style, "]"));
        }
        out.push_str(&self.paint(style, ":"));
        if let Some(title) = diag.title_str() {
            out.push(' ');
            out.push_str(&self.paint(title_style(), title));
        } else if !diag.message.is_empty() {
            out.push(' ');
            out.push_str(&self.wrapper.wrap(&diag.message));
        }
        out.push('\n');
    }

    fn render_source_arrow(
        &self,
        out: &mut String,
        style: ContentStyle,
        gutter: &Gutter,
        diag: &Diagnostic,
        file: &Path,
    ) {
        let descriptor = self.source_descriptor(diag, file);
        out.push_str(&format!(
            "{}{} {}\n",
            gutter.blank(),
            self.paint(style, "-->"),
            self.paint(file_style(), descriptor)
        ));
    }

    /// Builds `path[:line[-end_line | :column[-end_column]]]`.
    fn source_descriptor(&self, diag: &Diagnostic, file: &Path) -> String {
        let mut descriptor = self.display_path(file);
        let (start, end) = (diag.start, diag.end);
        if start.has_line() {
            descriptor.push_str(&format!(":{}", start.line));
            if end.has_line() && end.line != start.line {
                descriptor.push_str(&format!("-{}", end.line));
            } else if start.has_column() {
                descriptor.push_str(&format!(":{}", start.column));
                if end.has_column() {
                    descriptor.push_str(&format!("-{}", end.column));
                }
            }
        }
        descriptor
    }

    fn display_path(&self, file: &Path) -> String {
        let Some(base) = &self.base_path else {
            return file.display().to_string();
        };
        match relative_to(file, base) {
            Some(rel) => rel.display().to_string(),
            None => {
                tracing::debug!(
                    "cannot show {} relative to {}",
                    file.display(),
                    base.display()
                );
                file.display().to_string()
            }
        }
    }

    /// Writes the quoted source line(s). Returns `false` if the start line is
    /// past the end of the file, in which case nothing is written.
    fn render_excerpt(
        &self,
        out: &mut String,
        style: ContentStyle,
        gutter: &Gutter,
        diag: &Diagnostic,
        source: &SourceFile,
    ) -> bool {
        let (start, end) = (diag.start, diag.end);
        let Some(first) = source.line(start.line) else {
            return false;
        };
        self.push_gutter_row(out, style, gutter, "");
        self.push_numbered_row(out, style, gutter, start.line, first);

        if end.has_line() && end.line != start.line {
            if let Some(last) = source.line(end.line) {
                if end.line.abs_diff(start.line) != 1 {
                    let ellipsis = self.paint(excerpt_style(), "...");
                    self.push_gutter_row(out, style, gutter, &ellipsis);
                }
                self.push_numbered_row(out, style, gutter, end.line, last);
            }
        }
        true
    }

    fn render_underline(
        &self,
        out: &mut String,
        style: ContentStyle,
        gutter: &Gutter,
        diag: &Diagnostic,
        source: &SourceFile,
    ) {
        let Some((start_column, end_column)) = underline_columns(diag.start, diag.end) else {
            return;
        };
        let Some(text) = source.line(diag.start.line) else {
            return;
        };
        let start = visual_column(text, start_column);
        let tildes = end_column.map_or(0, |end| visual_column(text, end).saturating_sub(start));
        let underline = format!("^{}", "~".repeat(tildes));
        let row = format!(
            "{}{}",
            " ".repeat(start.saturating_sub(1)),
            self.paint(underline_style(), underline)
        );
        self.push_gutter_row(out, style, gutter, &row);
    }

    /// The wrapped message under a title, framed by blank gutter rows.
    fn render_body(&self, out: &mut String, style: ContentStyle, gutter: &Gutter, diag: &Diagnostic) {
        if diag.title_str().is_none() || diag.message.is_empty() {
            return;
        }
        let width = self
            .wrapper
            .max_width()
            .saturating_sub(gutter.width + 3)
            .max(1);
        let lines = Wrapper::new(width).lines(&diag.message);
        self.push_gutter_row(out, style, gutter, "");
        for line in &lines {
            self.push_gutter_row(out, style, gutter, line);
        }
        if !lines.is_empty() {
            self.push_gutter_row(out, style, gutter, "");
        }
    }

    /// `<blank gutter> | <content>`; the separator is omitted for empty content.
    fn push_gutter_row(&self, out: &mut String, style: ContentStyle, gutter: &Gutter, content: &str) {
        out.push_str(&self.paint(style, format!("{} |", gutter.blank())));
        if !content.is_empty() {
            out.push(' ');
            out.push_str(content);
        }
        out.push('\n');
    }

    fn push_numbered_row(
        &self,
        out: &mut String,
        style: ContentStyle,
        gutter: &Gutter,
        line: u32,
        text: &str,
    ) {
        out.push_str(&format!(
            "{}{} {}\n",
            self.paint(code_style(), format!("{line:>width$}", width = gutter.width)),
            self.paint(style, " |"),
            self.paint(excerpt_style(), expand_tabs(text))
        ));
    }

    fn paint(&self, style: ContentStyle, text: impl fmt::Display) -> String {
        if self.color {
            style.apply(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> Emitter for TerminalEmitter<W> {
    fn emit(&mut self, diag: &Diagnostic) -> Result<(), EmitError> {
        let rendered = self.render(diag);
        self.writer.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

/// The line-number column shared by every excerpt row of one diagnostic.
struct Gutter {
    width: usize,
}

impl Gutter {
    fn for_range(start: Position, end: Position) -> Self {
        let width = [start, end]
            .iter()
            .filter(|pos| pos.has_line())
            .map(|pos| count_digits(pos.line))
            .fold(1, usize::max);
        Self { width }
    }

    fn blank(&self) -> String {
        " ".repeat(self.width)
    }
}

/// Returns the raw start column and optional end column to underline.
///
/// An underline needs a start column and, if any end is given, a single-line
/// range with a known end column that does not precede the start. An end
/// with a line of 0 counts as being on the start line.
fn underline_columns(start: Position, end: Position) -> Option<(u32, Option<u32>)> {
    if !start.has_column() {
        return None;
    }
    if end.is_unset() {
        return Some((start.column, None));
    }
    let same_line = !end.has_line() || end.line == start.line;
    if same_line && end.has_column() && start.column <= end.column {
        Some((start.column, Some(end.column)))
    } else {
        None
    }
}

fn styled(foreground: Color, attributes: &[Attribute]) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = Some(foreground);
    for attribute in attributes {
        style.attributes.set(*attribute);
    }
    style
}

fn severity_style(severity: Severity) -> ContentStyle {
    match severity {
        Severity::Error => styled(Color::DarkRed, &[Attribute::Bold]),
        Severity::Warning => styled(Color::DarkYellow, &[]),
        Severity::Notice => styled(Color::DarkCyan, &[]),
        Severity::Debug => {
            let mut style = ContentStyle::new();
            style.attributes.set(Attribute::Dim);
            style
        }
    }
}

fn title_style() -> ContentStyle {
    styled(Color::White, &[])
}

fn file_style() -> ContentStyle {
    styled(Color::White, &[Attribute::Underlined])
}

fn code_style() -> ContentStyle {
    styled(Color::White, &[Attribute::Bold])
}

fn underline_style() -> ContentStyle {
    styled(Color::Green, &[])
}

fn excerpt_style() -> ContentStyle {
    styled(Color::DarkGrey, &[])
}
