//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::beacon::DEFAULT_TIMEOUT;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Beacon node endpoints and transport settings.
    pub consensus: ConsensusConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Beacon node endpoints and transport settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsensusConfig {
    /// Beacon node base URLs. The first is the primary, the rest are tried in order.
    pub endpoints: Vec<String>,

    /// Per-attempt request timeout in seconds.
    pub timeout_secs: u64,
}

impl ConsensusConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            endpoints: vec!["http://localhost:5052".to_string()],
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
