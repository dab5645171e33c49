//! Server configuration types.

use serde::{Deserialize, Serialize};
use spoken_time_common_log::{LogConfig, LogFormat, LogLevel};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Main server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server binding configuration.
    #[serde(default)]
    pub server: ServerBindConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Upload and batch limits.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Formatter selection.
    #[serde(default)]
    pub formatter: FormatterConfig,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}

/// Server binding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerBindConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request timeout.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerBindConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerBindConfig {
    /// Socket address to bind. An unparseable host falls back to all interfaces;
    /// `validate_config` reports it before the server starts.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self
            .host
            .parse::<IpAddr>()
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        SocketAddr::new(ip, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty, compact or json).
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Enable request logging.
    #[serde(default = "default_true")]
    pub log_requests: bool,
    /// Path prefixes to exclude from request logging.
    #[serde(default)]
    pub exclude_paths: Vec<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_requests: true,
            exclude_paths: vec!["/internal/health".to_string()],
        }
    }
}

impl LoggingConfig {
    /// Build the subscriber configuration, layering environment overrides
    /// (`SPOKEN_TIME_LOG_*`) on top of this section.
    pub fn to_log_config(&self) -> LogConfig {
        let env = LogConfig::from_env();
        let level_overridden = std::env::var(spoken_time_common_log::vars::LOG_LEVEL).is_ok();
        let format_overridden = std::env::var(spoken_time_common_log::vars::LOG_FORMAT).is_ok();

        LogConfig {
            level: if level_overridden {
                env.level
            } else {
                LogLevel::parse(&self.level).unwrap_or_default()
            },
            format: if format_overridden {
                env.format
            } else {
                LogFormat::parse(&self.format).unwrap_or_default()
            },
            ..env
        }
    }
}

/// Upload and batch limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// Maximum number of times in one uploaded file.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

fn default_max_upload_bytes() -> usize {
    1024 * 1024 // 1MB
}

fn default_max_batch_size() -> usize {
    spoken_time_core::DEFAULT_MAX_TIMES
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

/// Formatter selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Locale used when a request does not name one.
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

fn default_locale() -> String {
    spoken_time_core::BritishFormatter::LOCALE.to_string()
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
        }
    }
}
