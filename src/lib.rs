//! Moba-MCP bootstrap library
//!
//! Resolves the query server's settings and generates the SQLite fixtures
//! it is tested against.

pub mod config;
pub mod core;
pub mod fixture;

pub use config::{resolve_settings, ConfigError, ConfigResult, Environment, Resolution, Settings};
pub use crate::core::types::{ExternalRef, FixtureError, FixtureResult, LogLevel, PeerEntity, Transport};
pub use fixture::{FixtureGenerator, FixtureReport, FixtureVariant, MetadataDocument};
