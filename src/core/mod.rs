//! Core module containing the shared types for Moba-MCP
//!
//! Log levels, transport modes, cross-store references and the fixture
//! error type live here so both the configuration and fixture modules can
//! depend on them without depending on each other.

pub mod types;

pub use types::{ExternalRef, FixtureError, FixtureResult, LogLevel, PeerEntity, Transport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
