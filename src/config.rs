use std::net::SocketAddr;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "OsteoFlag";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identifier of the scoring rubric. Bump whenever a weight or threshold
/// in `screening::rubric` changes so stored reports stay attributable.
pub const ENGINE_VERSION: &str = "osteoflag-rubric-v1";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";
/// Large enough for a base64-encoded CXR export plus the intake form.
pub const DEFAULT_MAX_BODY_BYTES: usize = 12 * 1024 * 1024;
pub const DEFAULT_LOG_CAPACITY: usize = 500;

const ENV_BIND_ADDR: &str = "OSTEOFLAG_BIND_ADDR";
const ENV_MAX_BODY_BYTES: &str = "OSTEOFLAG_MAX_BODY_BYTES";
const ENV_LOG_CAPACITY: &str = "OSTEOFLAG_LOG_CAPACITY";

/// Tracing filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,osteoflag_lib=debug"
    } else {
        "info"
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },

    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
}

/// Transport settings. The scoring engine never sees this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub max_body_bytes: usize,
    pub screening_log_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8787))),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            screening_log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

impl ServerConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_BIND_ADDR) {
            config.bind_addr = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_BIND_ADDR,
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup(ENV_MAX_BODY_BYTES) {
            config.max_body_bytes = parse_positive(ENV_MAX_BODY_BYTES, &raw)?;
        }
        if let Some(raw) = lookup(ENV_LOG_CAPACITY) {
            config.screening_log_capacity = parse_positive(ENV_LOG_CAPACITY, &raw)?;
        }

        Ok(config)
    }
}

fn parse_positive(var: &'static str, raw: &str) -> Result<usize, ConfigError> {
    let value: usize = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: raw.to_string(),
    })?;
    if value == 0 {
        return Err(ConfigError::Zero { var });
    }
    Ok(value)
}
