//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses (bind address, upstream authority)
//! - Validate value ranges (timeouts > 0) and log level names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GateConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::uri::Authority;
use thiserror::Error;

use crate::config::schema::{AssetsConfig, GateConfig};

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    InvalidBindAddress(String),

    #[error("assets.address must not be empty")]
    EmptyUpstreamAddress,

    #[error("assets.address {0:?} is not a valid host:port")]
    InvalidUpstreamAddress(String),

    #[error("assets.root must not be empty")]
    EmptyAssetRoot,

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("observability.log_level {0:?} is not a log level")]
    InvalidLogLevel(String),
}

/// Check a parsed config for semantic errors.
pub fn validate_config(config: &GateConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match &config.assets {
        AssetsConfig::Directory { root } => {
            if root.trim().is_empty() {
                errors.push(ValidationError::EmptyAssetRoot);
            }
        }
        AssetsConfig::Upstream { address } => {
            if address.trim().is_empty() {
                errors.push(ValidationError::EmptyUpstreamAddress);
            } else if address.parse::<Authority>().is_err() {
                errors.push(ValidationError::InvalidUpstreamAddress(address.clone()));
            }
        }
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }

    if config.observability.log_level.parse::<tracing::Level>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
