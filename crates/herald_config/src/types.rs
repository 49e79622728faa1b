//! Configuration types deserialized from `herald.toml`.

use serde::Deserialize;
use std::path::PathBuf;

/// The top-level contents of `herald.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Diagnostic output settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// The `[diagnostics]` table.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// One of `text`, `terminal`, `json`, `github`, `log`, `none`. Unset means
    /// auto-detect from the output sink.
    #[serde(default)]
    pub output_format: Option<String>,
    /// Whether debug diagnostics are emitted.
    #[serde(default)]
    pub debug: bool,
    /// The directory terminal output shows file paths relative to.
    #[serde(default)]
    pub base_path: Option<PathBuf>,
    /// The wrap width for terminal output; 0 means the default.
    #[serde(default)]
    pub wrap_width: Option<usize>,
    /// Whether terminal output is colored.
    #[serde(default)]
    pub color: ColorChoice,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

impl ColorChoice {
    /// Decides whether to color output for a sink.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_choice_resolution() {
        assert!(ColorChoice::Auto.enabled(true));
        assert!(!ColorChoice::Auto.enabled(false));
        assert!(ColorChoice::Always.enabled(false));
        assert!(!ColorChoice::Never.enabled(true));
    }

    #[test]
    fn defaults() {
        let config = DiagnosticsConfig::default();
        assert!(config.output_format.is_none());
        assert!(!config.debug);
        assert_eq!(config.color, ColorChoice::Auto);
    }
}
