//! Resolution of configuration into concrete reporter settings.

use crate::error::ConfigError;
use crate::format::OutputFormat;
use crate::types::{ColorChoice, ConfigFile};
use std::path::PathBuf;

/// Everything needed to build a [`Reporter`](herald_diagnostics::Reporter).
///
/// Produced from `herald.toml` and then overridden by command-line flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReporterSettings {
    /// The chosen format, or `None` to auto-detect from the sink.
    pub format: Option<OutputFormat>,
    /// Whether debug diagnostics are emitted.
    pub debug: bool,
    /// The directory terminal paths are shown relative to; `None` means the
    /// working directory.
    pub base_path: Option<PathBuf>,
    /// The terminal wrap width; `None` means detect or default.
    pub wrap_width: Option<usize>,
    /// Whether terminal output is colored.
    pub color: ColorChoice,
}

impl ReporterSettings {
    /// Resolves the `[diagnostics]` table of a loaded configuration.
    pub fn from_config(config: &ConfigFile) -> Result<Self, ConfigError> {
        let diagnostics = &config.diagnostics;
        let format = diagnostics
            .output_format
            .as_deref()
            .map(str::parse::<OutputFormat>)
            .transpose()?;
        Ok(Self {
            format,
            debug: diagnostics.debug,
            base_path: diagnostics.base_path.clone(),
            wrap_width: diagnostics.wrap_width.filter(|&w| w > 0),
            color: diagnostics.color,
        })
    }

    /// Returns the format to use for a sink, auto-detecting when unset.
    ///
    /// An unset format selects [`OutputFormat::Terminal`] for terminals and
    /// [`OutputFormat::Text`] otherwise.
    pub fn effective_format(&self, is_terminal: bool) -> OutputFormat {
        self.format.unwrap_or(if is_terminal {
            OutputFormat::Terminal
        } else {
            OutputFormat::Text
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn resolve_defaults() {
        let settings = ReporterSettings::from_config(&ConfigFile::default()).unwrap();
        assert_eq!(settings, ReporterSettings::default());
    }

    #[test]
    fn resolve_configured_values() {
        let config = load_config_from_str(
            r#"
[diagnostics]
output_format = "json"
debug = true
base_path = "/src"
color = "always"
"#,
        )
        .unwrap();
        let settings = ReporterSettings::from_config(&config).unwrap();
        assert_eq!(settings.format, Some(OutputFormat::Json));
        assert!(settings.debug);
        assert_eq!(settings.base_path, Some(PathBuf::from("/src")));
        assert_eq!(settings.color, ColorChoice::Always);
    }

    #[test]
    fn zero_wrap_width_means_unset() {
        let config = load_config_from_str("[diagnostics]\nwrap_width = 0\n").unwrap();
        let settings = ReporterSettings::from_config(&config).unwrap();
        assert_eq!(settings.wrap_width, None);
    }

    #[test]
    fn effective_format_auto_detects() {
        let settings = ReporterSettings::default();
        assert_eq!(settings.effective_format(true), OutputFormat::Terminal);
        assert_eq!(settings.effective_format(false), OutputFormat::Text);
    }

    #[test]
    fn explicit_format_wins_over_detection() {
        let settings = ReporterSettings {
            format: Some(OutputFormat::Log),
            ..ReporterSettings::default()
        };
        assert_eq!(settings.effective_format(true), OutputFormat::Log);
    }
}
