//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. All errors are
//! collected and returned together rather than stopping at the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::BridgeConfig;
use crate::http::server::HEALTH_PATH;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("bridge.path: '{0}' must start with '/'")]
    InvalidPath(String),

    #[error("bridge.path: '{0}' is reserved")]
    ReservedPath(String),

    #[error("timeouts.request_secs must be greater than 0")]
    ZeroTimeout,

    #[error("observability.log_level: unknown level '{0}'")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &BridgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if !config.bridge.path.starts_with('/') {
        errors.push(ValidationError::InvalidPath(config.bridge.path.clone()));
    } else if config.bridge.path == HEALTH_PATH {
        errors.push(ValidationError::ReservedPath(config.bridge.path.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
