//! `herald emit`: report one diagnostic described by flags.

use std::io::{self, Write};

use crossterm::tty::IsTty;
use herald_config::ReporterSettings;
use herald_diagnostics::{Annotation, Diagnostic, Position};

use crate::EmitArgs;

/// Runs the `herald emit` command.
///
/// Returns exit code 1 if the diagnostic is an error, 0 otherwise.
pub fn run(args: &EmitArgs, settings: &ReporterSettings) -> Result<i32, Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let is_terminal = stdout.is_tty();
    let mut reporter = herald_config::build_reporter(settings, stdout, is_terminal);
    reporter.report(&build_diagnostic(args))?;
    let failed = reporter.metrics().has_errors();
    drop(reporter);
    io::stdout().flush()?;
    Ok(if failed { 1 } else { 0 })
}

/// Builds the diagnostic described by `args`.
pub fn build_diagnostic(args: &EmitArgs) -> Diagnostic {
    let mut annotations = Vec::new();
    if let Some(title) = &args.title {
        annotations.push(Annotation::title(title.as_str()));
    }
    if let Some(code) = &args.code {
        annotations.push(Annotation::code(code.as_str()));
    }
    if let Some(file) = &args.file {
        annotations.push(Annotation::file(file));
    }
    if let Some(line) = args.line {
        annotations.push(Annotation::Line(line));
    }
    if let Some(column) = args.column {
        annotations.push(Annotation::Column(column));
    }
    match (args.end_line, args.end_column) {
        (Some(line), column) => {
            annotations.push(Annotation::End(Position::new(line, column.unwrap_or(0))));
        }
        (None, Some(column)) => {
            let line = args.line.unwrap_or(0);
            annotations.push(Annotation::End(Position::new(line, column)));
        }
        (None, None) => {}
    }
    Diagnostic::new(args.severity, args.message.clone()).with(annotations)
}
