//! Transport modes the protocol layer can bind to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the protocol layer talks to its client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    #[serde(rename = "stdio")]
    Stdio,
    #[serde(rename = "sse")]
    Sse,
    #[serde(rename = "streamable-http")]
    StreamableHttp,
}

impl Transport {
    pub const ALL: [Transport; 3] = [Transport::Stdio, Transport::Sse, Transport::StreamableHttp];

    /// Returns the literal used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Stdio => "stdio",
            Transport::Sse => "sse",
            Transport::StreamableHttp => "streamable-http",
        }
    }

    /// Returns true if the transport listens on host/port
    pub fn is_network(&self) -> bool {
        !matches!(self, Transport::Stdio)
    }
}

impl Default for Transport {
    fn default() -> Self {
        Transport::Stdio
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transport {
    type Err = String;

    /// Matches the literal exactly; `STDIO` is not accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Transport::ALL
            .iter()
            .copied()
            .find(|transport| transport.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Transport::ALL.iter().map(Transport::as_str).collect();
                format!("transport must be one of {:?}, got '{}'", names, s)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_literals() {
        assert_eq!("stdio".parse::<Transport>().unwrap(), Transport::Stdio);
        assert_eq!("sse".parse::<Transport>().unwrap(), Transport::Sse);
        assert_eq!(
            "streamable-http".parse::<Transport>().unwrap(),
            Transport::StreamableHttp
        );
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("STDIO".parse::<Transport>().is_err());
        assert!("http".parse::<Transport>().is_err());
        assert!("streamable_http".parse::<Transport>().is_err());
        assert!("".parse::<Transport>().is_err());
    }

    #[test]
    fn test_network_transports() {
        assert!(!Transport::Stdio.is_network());
        assert!(Transport::Sse.is_network());
        assert!(Transport::StreamableHttp.is_network());
    }

    #[test]
    fn test_serde_literal() {
        let json = serde_json::to_string(&Transport::StreamableHttp).unwrap();
        assert_eq!(json, "\"streamable-http\"");
    }
}
