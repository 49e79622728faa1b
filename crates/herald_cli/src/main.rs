//! Herald CLI: report diagnostics in any of the supported output formats.
//!
//! Provides `herald report` for rendering a stream of JSON-lines diagnostics
//! and `herald emit` for reporting a single diagnostic built from flags.

#![warn(missing_docs)]

mod emit;
mod report;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use herald_config::{OutputFormat, ReporterSettings};
use herald_diagnostics::Severity;

/// Herald: render diagnostics as text, JSON, GitHub annotations, or terminal excerpts.
#[derive(Parser, Debug)]
#[command(name = "herald", version, about = "Diagnostic reporter")]
pub struct Cli {
    /// Output format: text, terminal, json, github, log, or none.
    #[arg(long, global = true)]
    pub output_format: Option<String>,

    /// Emit debug diagnostics.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to a `herald.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory that terminal output shows file paths relative to.
    #[arg(long, global = true)]
    pub base_path: Option<PathBuf>,

    /// Wrap width for terminal output.
    #[arg(long, global = true)]
    pub width: Option<usize>,

    /// Control colored output.
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    /// Log internal events at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report JSON-lines diagnostics read from a file or stdin.
    Report(ReportArgs),
    /// Report a single diagnostic.
    Emit(EmitArgs),
}

/// Arguments for the `herald report` subcommand.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// File of JSON-lines diagnostics. Reads stdin when omitted.
    pub file: Option<PathBuf>,
}

/// Arguments for the `herald emit` subcommand.
#[derive(Parser, Debug)]
pub struct EmitArgs {
    /// Severity: error, warning, notice, or debug.
    #[arg(short, long)]
    pub severity: Severity,

    /// Short title shown instead of the message on the headline.
    #[arg(long)]
    pub title: Option<String>,

    /// Diagnostic code, such as `E0425`.
    #[arg(long)]
    pub code: Option<String>,

    /// File the diagnostic refers to.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// 1-based start line.
    #[arg(long)]
    pub line: Option<u32>,

    /// 1-based start column.
    #[arg(long)]
    pub column: Option<u32>,

    /// 1-based end line.
    #[arg(long)]
    pub end_line: Option<u32>,

    /// 1-based end column.
    #[arg(long)]
    pub end_column: Option<u32>,

    /// The diagnostic message.
    pub message: String,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

impl From<ColorChoice> for herald_config::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => herald_config::ColorChoice::Auto,
            ColorChoice::Always => herald_config::ColorChoice::Always,
            ColorChoice::Never => herald_config::ColorChoice::Never,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = resolve_settings(&cli).and_then(|settings| match &cli.command {
        Command::Report(args) => report::run(args, &settings),
        Command::Emit(args) => emit::run(args, &settings),
    });

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads the configuration and applies command-line overrides.
///
/// An explicit `--config` must exist; otherwise `herald.toml` in the working
/// directory is used when present.
fn resolve_settings(cli: &Cli) -> Result<ReporterSettings, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => herald_config::load_config_file(path)?,
        None => herald_config::load_config(&std::env::current_dir()?)?,
    };
    let mut settings = ReporterSettings::from_config(&config)?;
    apply_overrides(cli, &mut settings)?;
    Ok(settings)
}

fn apply_overrides(
    cli: &Cli,
    settings: &mut ReporterSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(format) = &cli.output_format {
        settings.format = Some(format.parse::<OutputFormat>()?);
    }
    if cli.debug {
        settings.debug = true;
    }
    if let Some(base) = &cli.base_path {
        settings.base_path = Some(base.clone());
    }
    if let Some(width) = cli.width {
        settings.wrap_width = Some(width).filter(|&w| w > 0);
    }
    if let Some(color) = cli.color {
        settings.color = color.into();
    }
    Ok(())
}
