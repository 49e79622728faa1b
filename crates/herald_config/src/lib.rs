//! Output configuration for herald diagnostics.
//!
//! This crate reads the optional `herald.toml` file, resolves its
//! `[diagnostics]` table into [`ReporterSettings`], and builds the matching
//! [`Reporter`](herald_diagnostics::Reporter) for an output sink, including
//! terminal auto-detection when no [`OutputFormat`] is chosen.

#![warn(missing_docs)]

pub mod error;
pub mod factory;
pub mod format;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use factory::build_reporter;
pub use format::OutputFormat;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use resolve::ReporterSettings;
pub use types::*;
