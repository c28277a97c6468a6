//! Core type definitions for Moba-MCP
//!
//! Types shared by the configuration resolver and the fixture generator.

mod error;
mod external_ref;
mod log_level;
mod transport;

pub use error::{FixtureError, FixtureResult};
pub use external_ref::{ExternalRef, PeerEntity};
pub use log_level::LogLevel;
pub use transport::Transport;
