//! Configuration validation.

use super::types::ServerConfig;
use spoken_time_common_log::{LogFormat, LogLevel};
use spoken_time_core::FormatterRegistry;
use std::net::IpAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid host: {0}")]
    InvalidHost(String),

    #[error("Invalid port: {0}")]
    InvalidPort(u16),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}")]
    InvalidLogFormat(String),

    #[error("Upload limit must be greater than zero")]
    InvalidUploadLimit,

    #[error("Batch size must be greater than zero")]
    InvalidBatchSize,

    #[error("Unknown default locale: {0}")]
    UnknownLocale(String),
}

/// Validate server configuration against the formatters in `registry`,
/// collecting every problem found.
pub fn validate_config(config: &ServerConfig, registry: &FormatterRegistry) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.server.host.parse::<IpAddr>().is_err() {
        errors.push(ConfigError::InvalidHost(config.server.host.clone()));
    }

    if config.server.port == 0 {
        errors.push(ConfigError::InvalidPort(0));
    }

    if LogLevel::parse(&config.logging.level).is_none() {
        errors.push(ConfigError::InvalidLogLevel(config.logging.level.clone()));
    }

    if LogFormat::parse(&config.logging.format).is_none() {
        errors.push(ConfigError::InvalidLogFormat(config.logging.format.clone()));
    }

    if config.limits.max_upload_bytes == 0 {
        errors.push(ConfigError::InvalidUploadLimit);
    }

    if config.limits.max_batch_size == 0 {
        errors.push(ConfigError::InvalidBatchSize);
    }

    if !registry.contains(&config.formatter.default_locale) {
        errors.push(ConfigError::UnknownLocale(config.formatter.default_locale.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
