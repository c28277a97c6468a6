//! Configuration module for Moba-MCP
//!
//! Resolves the server settings from defaults, an optional `.env` file, the
//! process environment and the `MCP_SERVER_URL` override, validates them,
//! and sets up logging from the result.

mod defaults;
mod loader;
mod logging;
mod settings;
mod validator;

pub use defaults::{default_config, keys, ConfigDefaults};
pub use loader::{
    load_settings, resolve_settings, ConfigLoader, ConfigWarning, Environment, Resolution,
    UrlOverride, ENV_FILE_NAME,
};
pub use logging::{init_logging, log_directives, LogFormat, QUIETED_TARGETS};
pub use settings::{resolve_path, Settings};
pub use validator::{parse_bool, validate_config, ConfigValidator, FieldError, ValidationErrors};

// Configuration-related error type
pub use loader::ConfigError;

// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_module_exports() {
        let _defaults = default_config();
        let _loader = ConfigLoader::new(".env");
        let _validator = ConfigValidator;

        let result: ConfigResult<String> = Ok("test".to_string());
        assert!(result.is_ok());

        let error_result: ConfigResult<String> =
            Err(ConfigError::Logging("already installed".to_string()));
        assert!(error_result.is_err());
    }

    #[test]
    fn test_resolve_from_empty_environment() {
        let resolution = resolve_settings(&Environment::new(), None).unwrap();
        assert!(resolution.warnings.is_empty());
        assert_eq!(resolution.settings.server_name(), "moba-mcp");
    }

    #[test]
    fn test_config_error_from_io() {
        use std::io;
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let config_error: ConfigError = io_error.into();
        assert!(matches!(config_error, ConfigError::Io(_)));
    }
}
