//! Construction of a [`Reporter`] from resolved settings.

use crate::format::OutputFormat;
use crate::resolve::ReporterSettings;
use herald_diagnostics::{Reporter, TerminalOptions, Wrapper};
use std::io::Write;

/// Builds the reporter selected by `settings` around `writer`.
///
/// `is_terminal` says whether `writer` is an interactive terminal; it drives
/// format auto-detection, automatic coloring, and wrap-width detection.
pub fn build_reporter<'a, W>(settings: &ReporterSettings, writer: W, is_terminal: bool) -> Reporter<'a>
where
    W: Write + Send + 'a,
{
    let format = settings.effective_format(is_terminal);
    tracing::debug!("reporting diagnostics as {format}");
    let mut reporter = match format {
        OutputFormat::Text => Reporter::text(writer),
        OutputFormat::Terminal => Reporter::terminal(writer, terminal_options(settings, is_terminal)),
        OutputFormat::Json => Reporter::json(writer),
        OutputFormat::Github => Reporter::github(writer),
        OutputFormat::Log => Reporter::log(writer),
        OutputFormat::None => Reporter::noop(),
    };
    reporter.show_debug(settings.debug);
    reporter
}

fn terminal_options(settings: &ReporterSettings, is_terminal: bool) -> TerminalOptions {
    let wrap_width = settings.wrap_width.or_else(|| {
        if is_terminal {
            Wrapper::from_terminal().map(|w| w.max_width())
        } else {
            None
        }
    });
    TerminalOptions {
        base_path: settings.base_path.clone(),
        wrap_width,
        color: settings.color.enabled(is_terminal),
    }
}
