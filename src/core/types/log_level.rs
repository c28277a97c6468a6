//! Log severity names accepted by the server configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity threshold for the server's log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// All recognized levels, most verbose first
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// Returns the canonical uppercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Returns the matching `tracing` filter directive.
    ///
    /// `tracing` has no level above ERROR, so CRITICAL collapses onto it.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }

    pub fn is_debug(&self) -> bool {
        matches!(self, LogLevel::Debug)
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        LogLevel::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == upper)
            .ok_or_else(|| {
                let names: Vec<&str> = LogLevel::ALL.iter().map(LogLevel::as_str).collect();
                format!("log_level must be one of {:?}, got '{}'", names, s)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_any_case() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("Info".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("cRiTiCaL".parse::<LogLevel>().unwrap(), LogLevel::Critical);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert!(err.contains("log_level"));
        assert!(err.contains("verbose"));

        // tracing's spelling is not one of the accepted names
        assert!("warn".parse::<LogLevel>().is_err());
        assert!(" debug ".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_filter_directives() {
        assert_eq!(LogLevel::Debug.filter_directive(), "debug");
        assert_eq!(LogLevel::Warning.filter_directive(), "warn");
        assert_eq!(LogLevel::Critical.filter_directive(), "error");
    }

    #[test]
    fn test_display_is_canonical() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string(), level.as_str());
            assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
    }
}
