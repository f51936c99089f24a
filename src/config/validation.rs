//! Configuration validation.
//!
//! Semantic checks only; serde handles syntax. Every problem is reported, not just the first.

use std::fmt;

use crate::config::schema::Config;
use crate::fallback::Endpoint;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NoEndpoints,
    InvalidEndpoint { index: usize, reason: String },
    ZeroTimeout,
    UnknownLogLevel(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoEndpoints => write!(f, "consensus.endpoints must not be empty"),
            ValidationError::InvalidEndpoint { index, reason } => {
                write!(f, "consensus.endpoints[{}]: {}", index, reason)
            }
            ValidationError::ZeroTimeout => {
                write!(f, "consensus.timeout_secs must be greater than zero")
            }
            ValidationError::UnknownLogLevel(level) => {
                write!(f, "observability.log_level '{}' is not one of {:?}", level, LOG_LEVELS)
            }
        }
    }
}

pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.consensus.endpoints.is_empty() {
        errors.push(ValidationError::NoEndpoints);
    }
    for (index, url) in config.consensus.endpoints.iter().enumerate() {
        if let Err(e) = Endpoint::parse(url) {
            errors.push(ValidationError::InvalidEndpoint {
                index,
                reason: e.to_string(),
            });
        }
    }
    if config.consensus.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if !LOG_LEVELS.contains(&config.observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
