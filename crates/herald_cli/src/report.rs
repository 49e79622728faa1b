//! `herald report`: render a stream of JSON-lines diagnostics.
//!
//! Each non-blank input line is decoded as a diagnostic in the JSON wire
//! format and reported. Lines that fail to decode or validate are reported
//! as error diagnostics pointing at the offending input line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crossterm::tty::IsTty;
use herald_config::ReporterSettings;
use herald_diagnostics::{Annotation, Diagnostic, Metrics, ReportError, Reporter};

use crate::ReportArgs;

/// Runs the `herald report` command.
///
/// Returns exit code 1 if any error diagnostic was reported, 0 otherwise.
pub fn run(args: &ReportArgs, settings: &ReporterSettings) -> Result<i32, Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let is_terminal = stdout.is_tty();
    let format = settings.effective_format(is_terminal);
    let mut reporter = herald_config::build_reporter(settings, stdout, is_terminal);

    match &args.file {
        Some(path) => {
            let input = BufReader::new(File::open(path)?);
            report_lines(input, Some(path), &mut reporter)?;
        }
        None => report_lines(io::stdin().lock(), None, &mut reporter)?,
    }

    let metrics = *reporter.metrics();
    drop(reporter);
    io::stdout().flush()?;
    if !format.is_machine_readable() {
        eprintln!("{}", summary(&metrics));
    }
    Ok(if metrics.has_errors() { 1 } else { 0 })
}

/// Reports every diagnostic in `input`. `source` names the input in
/// diagnostics about malformed lines.
pub fn report_lines<R: BufRead>(
    input: R,
    source: Option<&Path>,
    reporter: &mut Reporter<'_>,
) -> Result<(), Box<dyn std::error::Error>> {
    for (index, bytes) in input.split(b'\n').enumerate() {
        let mut bytes = bytes?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let line_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                let problem = format!("malformed diagnostic: {}", e.utf8_error());
                reporter.report(&input_error(problem, source, line_number))?;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let problem = match serde_json::from_str::<Diagnostic>(&line) {
            Ok(diag) => match reporter.report(&diag) {
                Ok(()) => continue,
                Err(ReportError::Invalid(e)) => e.to_string(),
                Err(e) => return Err(e.into()),
            },
            Err(e) => format!("malformed diagnostic: {e}"),
        };
        reporter.report(&input_error(problem, source, line_number))?;
    }
    Ok(())
}

fn input_error(problem: String, source: Option<&Path>, line: u32) -> Diagnostic {
    match source {
        Some(path) => Diagnostic::error(problem).with([
            Annotation::title("invalid diagnostic input"),
            Annotation::file(path),
            Annotation::Line(line),
        ]),
        None => Diagnostic::error(format!("stdin line {line}: {problem}")),
    }
}

/// A one-line count of reported diagnostics, e.g. `2 errors, 1 warning`.
pub fn summary(metrics: &Metrics) -> String {
    let parts = [
        (metrics.errors, "error"),
        (metrics.warnings, "warning"),
        (metrics.notices, "notice"),
    ];
    let counted: Vec<String> = parts
        .iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, noun)| format!("{n} {noun}{}", if *n == 1 { "" } else { "s" }))
        .collect();
    if counted.is_empty() {
        "no problems reported".to_string()
    } else {
        counted.join(", ")
    }
}
