//! Default configuration values for Moba-MCP

use serde::{Deserialize, Serialize};

/// Setting names as they appear (lowercased) in the environment or `.env` file
pub mod keys {
    pub const DATABASE_PATH: &str = "database_path";
    pub const METADATA_PATH: &str = "metadata_path";
    pub const SERVER_NAME: &str = "server_name";
    pub const SERVER_VERSION: &str = "server_version";
    pub const HOST: &str = "host";
    pub const PORT: &str = "port";
    pub const TRANSPORT: &str = "transport";
    pub const STATELESS_HTTP: &str = "stateless_http";
    pub const JSON_RESPONSE: &str = "json_response";
    pub const LOG_LEVEL: &str = "log_level";
    pub const LOG_FORMAT: &str = "log_format";
    pub const MAX_QUERY_LENGTH: &str = "max_query_length";
    pub const MAX_RESULT_ROWS: &str = "max_result_rows";

    /// Override URL whose host/port win over every other source
    pub const MCP_SERVER_URL: &str = "mcp_server_url";
}

/// Default configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDefaults {
    pub store: StoreDefaults,
    pub server: ServerDefaults,
    pub logging: LoggingDefaults,
    pub limits: LimitDefaults,
}

/// Default locations of the SQLite store and its metadata document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreDefaults {
    pub database_path: String,
    pub metadata_path: String,
}

/// Default server identity and binding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerDefaults {
    pub name: String,
    pub version: String,
    pub host: String,
    pub port: u16,
    pub transport: String,
    pub stateless_http: bool,
    pub json_response: bool,
}

/// Default logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingDefaults {
    pub level: String,
    pub format: String,
}

/// Default query limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitDefaults {
    pub max_query_length: usize,
    pub max_result_rows: usize,
}

/// Returns the default configuration
pub fn default_config() -> ConfigDefaults {
    ConfigDefaults {
        store: StoreDefaults {
            database_path: "test_data/sample.db".to_string(),
            metadata_path: "resources/metadata.json".to_string(),
        },
        server: ServerDefaults {
            name: "moba-mcp".to_string(),
            version: "0.1.0".to_string(),
            host: "localhost".to_string(),
            port: 8000,
            transport: "stdio".to_string(),
            stateless_http: false,
            json_response: false,
        },
        logging: LoggingDefaults {
            level: "INFO".to_string(),
            format: "full".to_string(),
        },
        limits: LimitDefaults {
            max_query_length: 10000,
            max_result_rows: 1000,
        },
    }
}

impl ConfigDefaults {
    /// Flattens the defaults into the lowest-precedence key/value layer
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (keys::DATABASE_PATH, self.store.database_path.clone()),
            (keys::METADATA_PATH, self.store.metadata_path.clone()),
            (keys::SERVER_NAME, self.server.name.clone()),
            (keys::SERVER_VERSION, self.server.version.clone()),
            (keys::HOST, self.server.host.clone()),
            (keys::PORT, self.server.port.to_string()),
            (keys::TRANSPORT, self.server.transport.clone()),
            (keys::STATELESS_HTTP, self.server.stateless_http.to_string()),
            (keys::JSON_RESPONSE, self.server.json_response.to_string()),
            (keys::LOG_LEVEL, self.logging.level.clone()),
            (keys::LOG_FORMAT, self.logging.format.clone()),
            (
                keys::MAX_QUERY_LENGTH,
                self.limits.max_query_length.to_string(),
            ),
            (
                keys::MAX_RESULT_ROWS,
                self.limits.max_result_rows.to_string(),
            ),
        ]
    }
}
