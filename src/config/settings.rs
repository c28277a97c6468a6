//! The resolved, immutable server settings

use super::{ConfigError, ConfigResult};
use crate::core::types::{LogLevel, Transport};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Validated server settings.
///
/// Only [`ConfigValidator`](super::ConfigValidator) builds this record, and
/// only after every field passed its checks. There are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub(crate) database_path: String,
    pub(crate) metadata_path: String,
    pub(crate) server_name: String,
    pub(crate) server_version: String,
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) transport: Transport,
    pub(crate) stateless_http: bool,
    pub(crate) json_response: bool,
    pub(crate) log_level: LogLevel,
    pub(crate) log_format: String,
    pub(crate) max_query_length: usize,
    pub(crate) max_result_rows: usize,
}

impl Settings {
    pub fn database_path(&self) -> &str {
        &self.database_path
    }

    pub fn metadata_path(&self) -> &str {
        &self.metadata_path
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    pub fn server_version(&self) -> &str {
        &self.server_version
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    /// No session state is kept between HTTP requests
    pub fn stateless_http(&self) -> bool {
        self.stateless_http
    }

    /// Streamable HTTP answers with plain JSON instead of an SSE stream
    pub fn json_response(&self) -> bool {
        self.json_response
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn log_format(&self) -> &str {
        &self.log_format
    }

    /// Longest query text, in characters, the query layer should accept
    pub fn max_query_length(&self) -> usize {
        self.max_query_length
    }

    /// Most rows the query layer should return for one query
    pub fn max_result_rows(&self) -> usize {
        self.max_result_rows
    }

    /// `host:port` the network transports bind to
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Absolute path of the SQLite store; `base` defaults to the working directory
    pub fn absolute_database_path(&self, base: Option<&Path>) -> ConfigResult<PathBuf> {
        resolve_path(&self.database_path, base)
    }

    /// Absolute path of the metadata document; `base` defaults to the working directory
    pub fn absolute_metadata_path(&self, base: Option<&Path>) -> ConfigResult<PathBuf> {
        resolve_path(&self.metadata_path, base)
    }

    /// Renders the settings as TOML for diagnostics
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Returns `path` unchanged when absolute, otherwise joined onto `base`
pub fn resolve_path(path: impl AsRef<Path>, base: Option<&Path>) -> ConfigResult<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    match base {
        Some(base) => Ok(base.join(path)),
        None => {
            let cwd = std::env::current_dir().map_err(ConfigError::Io)?;
            Ok(cwd.join(path))
        }
    }
}
