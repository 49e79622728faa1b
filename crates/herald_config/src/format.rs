//! Selection of the diagnostic output format.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// The format diagnostics are emitted in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum OutputFormat {
    /// Messages written verbatim.
    Text,
    /// Rustc-style rendering with source excerpts.
    Terminal,
    /// One JSON object per line.
    Json,
    /// GitHub Actions workflow annotations.
    Github,
    /// `<severity>\t<message>` lines.
    Log,
    /// No output; diagnostics are still counted.
    None,
}

impl OutputFormat {
    /// All formats, in the order they are listed in help text.
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Text,
        OutputFormat::Terminal,
        OutputFormat::Json,
        OutputFormat::Github,
        OutputFormat::Log,
        OutputFormat::None,
    ];

    /// Returns the name used on the command line and in `herald.toml`.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Terminal => "terminal",
            OutputFormat::Json => "json",
            OutputFormat::Github => "github",
            OutputFormat::Log => "log",
            OutputFormat::None => "none",
        }
    }

    /// Returns `true` for formats meant to be consumed by other programs.
    pub fn is_machine_readable(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Github)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownOutputFormat(s.to_string()))
    }
}
