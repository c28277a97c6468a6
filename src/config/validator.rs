//! Configuration validator for Moba-MCP
//!
//! Turns a merged key/value layer into a [`Settings`] record. Every field is
//! checked independently and all violations are reported together; a record
//! is only built once every check has passed.

use super::defaults::keys;
use super::loader::Environment;
use super::settings::Settings;
use crate::core::types::{LogLevel, Transport};
use std::fmt;

/// A single violated constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Every constraint violated by one resolution attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, reason: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            reason: reason.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.field).collect()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, error) in self.errors.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a merged layer and builds the settings record
    pub fn validate(env: &Environment) -> Result<Settings, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let database_path = Self::non_empty(env, keys::DATABASE_PATH, &mut errors);
        let metadata_path = Self::non_empty(env, keys::METADATA_PATH, &mut errors);
        let port = Self::port(env, &mut errors);
        let transport = Self::parsed::<Transport>(env, keys::TRANSPORT, &mut errors);
        let log_level = Self::parsed::<LogLevel>(env, keys::LOG_LEVEL, &mut errors);
        let stateless_http = Self::flag(env, keys::STATELESS_HTTP, &mut errors);
        let json_response = Self::flag(env, keys::JSON_RESPONSE, &mut errors);
        let max_query_length = Self::positive(env, keys::MAX_QUERY_LENGTH, &mut errors);
        let max_result_rows = Self::positive(env, keys::MAX_RESULT_ROWS, &mut errors);

        match (
            database_path,
            metadata_path,
            port,
            transport,
            log_level,
            stateless_http,
            json_response,
            max_query_length,
            max_result_rows,
        ) {
            (
                Some(database_path),
                Some(metadata_path),
                Some(port),
                Some(transport),
                Some(log_level),
                Some(stateless_http),
                Some(json_response),
                Some(max_query_length),
                Some(max_result_rows),
            ) if errors.is_empty() => Ok(Settings {
                database_path,
                metadata_path,
                server_name: raw(env, keys::SERVER_NAME).to_string(),
                server_version: raw(env, keys::SERVER_VERSION).to_string(),
                host: raw(env, keys::HOST).to_string(),
                port,
                transport,
                stateless_http,
                json_response,
                log_level,
                log_format: raw(env, keys::LOG_FORMAT).to_string(),
                max_query_length,
                max_result_rows,
            }),
            _ => Err(errors),
        }
    }

    fn non_empty(
        env: &Environment,
        field: &'static str,
        errors: &mut ValidationErrors,
    ) -> Option<String> {
        let value = raw(env, field);
        if value.is_empty() {
            errors.push(field, format!("{} cannot be empty", field));
            return None;
        }
        Some(value.to_string())
    }

    fn port(env: &Environment, errors: &mut ValidationErrors) -> Option<u16> {
        let value = Self::integer(env, keys::PORT, errors)?;
        match u16::try_from(value) {
            Ok(port) if port >= 1 => Some(port),
            _ => {
                errors.push(
                    keys::PORT,
                    format!("port must be between 1 and 65535, got {}", value),
                );
                None
            }
        }
    }

    fn positive(
        env: &Environment,
        field: &'static str,
        errors: &mut ValidationErrors,
    ) -> Option<usize> {
        let value = Self::integer(env, field, errors)?;
        match usize::try_from(value) {
            Ok(limit) if limit > 0 => Some(limit),
            _ => {
                errors.push(field, format!("{} must be positive, got {}", field, value));
                None
            }
        }
    }

    fn integer(env: &Environment, field: &'static str, errors: &mut ValidationErrors) -> Option<i64> {
        let value = raw(env, field).trim();
        match value.parse::<i64>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                errors.push(field, format!("{} must be an integer, got '{}'", field, value));
                None
            }
        }
    }

    fn parsed<T>(env: &Environment, field: &'static str, errors: &mut ValidationErrors) -> Option<T>
    where
        T: std::str::FromStr<Err = String>,
    {
        match raw(env, field).parse::<T>() {
            Ok(value) => Some(value),
            Err(reason) => {
                errors.push(field, reason);
                None
            }
        }
    }

    fn flag(env: &Environment, field: &'static str, errors: &mut ValidationErrors) -> Option<bool> {
        let value = raw(env, field);
        let parsed = parse_bool(value);
        if parsed.is_none() {
            errors.push(field, format!("{} must be a boolean, got '{}'", field, value));
        }
        parsed
    }
}

fn raw<'a>(env: &'a Environment, field: &str) -> &'a str {
    env.get(field).unwrap_or_default()
}

/// Parses the boolean spellings accepted in environment files
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

/// Validates a merged layer
pub fn validate_config(env: &Environment) -> Result<Settings, ValidationErrors> {
    ConfigValidator::validate(env)
}
