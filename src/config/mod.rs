//! Runtime settings for the HTTP server.
//!
//! These are read once at startup. The form configuration itself (`APP_CONFIG`
//! and `GAS_URL`) is deliberately not part of this struct: it is resolved on
//! every request by [`crate::form::ConfigResolver`].

mod provider;

pub use provider::{ConfigProvider, EnvProvider, StaticProvider};

#[cfg(test)]
pub use provider::MockConfigProvider;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

/// Environment variable names. Keeping them public lets tests and tooling
/// refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_WEBHOOK_TIMEOUT_SECS: &str = "WEBHOOK_TIMEOUT_SECS";
pub const ENV_WEBHOOK_CONNECT_TIMEOUT_SECS: &str = "WEBHOOK_CONNECT_TIMEOUT_SECS";
pub const ENV_MAX_PAYLOAD_BYTES: &str = "MAX_PAYLOAD_BYTES";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 30;
const DEFAULT_WEBHOOK_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_PAYLOAD_BYTES: usize = 1024 * 1024;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "{} is not a supported log format. Use either `pretty` or `json`.",
                other
            )),
        }
    }
}

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    webhook_timeout: Duration,
    webhook_connect_timeout: Duration,
    max_payload_bytes: usize,
    log_format: LogFormat,
}

impl Config {
    /// Load from the process environment, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_provider(&EnvProvider)
    }

    /// Load from any [`ConfigProvider`]. Values that are present but cannot be
    /// parsed are reported instead of silently replaced by a default.
    pub fn from_provider(provider: &dyn ConfigProvider) -> Result<Self, ConfigError> {
        let bind_addr = provider
            .var(ENV_BIND_ADDR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let webhook_timeout = Duration::from_secs(parse_or(
            provider,
            ENV_WEBHOOK_TIMEOUT_SECS,
            DEFAULT_WEBHOOK_TIMEOUT_SECS,
        )?);
        let webhook_connect_timeout = Duration::from_secs(parse_or(
            provider,
            ENV_WEBHOOK_CONNECT_TIMEOUT_SECS,
            DEFAULT_WEBHOOK_CONNECT_TIMEOUT_SECS,
        )?);
        let max_payload_bytes =
            parse_or(provider, ENV_MAX_PAYLOAD_BYTES, DEFAULT_MAX_PAYLOAD_BYTES)?;
        let log_format = parse_or(provider, ENV_LOG_FORMAT, LogFormat::default())?;

        if webhook_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: ENV_WEBHOOK_TIMEOUT_SECS,
                reason: "must be greater than zero".to_string(),
            });
        }
        if max_payload_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: ENV_MAX_PAYLOAD_BYTES,
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            bind_addr,
            webhook_timeout,
            webhook_connect_timeout,
            max_payload_bytes,
            log_format,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Upper bound for a whole webhook call, connect included.
    pub fn webhook_timeout(&self) -> Duration {
        self.webhook_timeout
    }
    pub fn webhook_connect_timeout(&self) -> Duration {
        self.webhook_connect_timeout
    }
    /// Largest request body accepted by the server.
    pub fn max_payload_bytes(&self) -> usize {
        self.max_payload_bytes
    }
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Same config with a different bind address. Tests bind to port 0.
    pub fn with_bind_addr(mut self, bind_addr: impl Into<String>) -> Self {
        self.bind_addr = bind_addr.into();
        self
    }
}

/// Development defaults; same as `from_env` with nothing set.
impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            webhook_timeout: Duration::from_secs(DEFAULT_WEBHOOK_TIMEOUT_SECS),
            webhook_connect_timeout: Duration::from_secs(DEFAULT_WEBHOOK_CONNECT_TIMEOUT_SECS),
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
            log_format: LogFormat::Pretty,
        }
    }
}

fn parse_or<T>(provider: &dyn ConfigProvider, field: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match provider.var(field) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|err: T::Err| ConfigError::InvalidValue {
                field,
                reason: err.to_string(),
            }),
        None => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
