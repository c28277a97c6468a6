//! Logging setup driven by the resolved settings

use super::{ConfigError, ConfigResult, Settings};
use crate::core::types::LogLevel;
use tracing_subscriber::EnvFilter;

/// Third-party targets capped at `warn` unless the server runs at DEBUG:
/// the MCP protocol library and the SQLite bindings.
pub const QUIETED_TARGETS: [&str; 2] = ["rmcp", "rusqlite"];

/// Output layout selected by the `log_format` setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Full,
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    /// Maps the free-form setting onto a layout; unknown values use `Full`
    pub fn from_setting(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "compact" => LogFormat::Compact,
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            _ => LogFormat::Full,
        }
    }
}

/// Builds the `EnvFilter` directive string for a level
pub fn log_directives(level: LogLevel) -> String {
    let mut directives = level.filter_directive().to_string();
    if !level.is_debug() {
        for target in QUIETED_TARGETS {
            directives.push(',');
            directives.push_str(target);
            directives.push_str("=warn");
        }
    }
    directives
}

/// Installs the global subscriber. Logs go to stderr so the stdio
/// transport keeps stdout to itself.
pub fn init_logging(settings: &Settings) -> ConfigResult<()> {
    let filter = EnvFilter::try_new(log_directives(settings.log_level()))
        .map_err(|err| ConfigError::Logging(err.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match LogFormat::from_setting(settings.log_format()) {
        LogFormat::Full => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|err| ConfigError::Logging(err.to_string()))
}
