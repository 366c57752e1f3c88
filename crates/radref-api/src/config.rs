use std::env;
use std::net::SocketAddr;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "RADREF_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "RADREF_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event, for log shipping.
    #[default]
    Json,
    /// Multi-line human-readable output for local runs.
    Pretty,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address '{value}'")]
    BindAddr { var: &'static str, value: String },

    #[error("{var}: expected 'json' or 'pretty', got '{value}'")]
    LogFormat { var: &'static str, value: String },
}

/// Service settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Unset or empty variables take
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr: SocketAddr = match var(BIND_ADDR_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::BindAddr {
                var: BIND_ADDR_VAR,
                value,
            })?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| ConfigError::BindAddr {
                    var: BIND_ADDR_VAR,
                    value: DEFAULT_BIND_ADDR.to_string(),
                })?,
        };

        let log_format = match var(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => {
                    return Err(ConfigError::LogFormat {
                        var: LOG_FORMAT_VAR,
                        value,
                    });
                }
            },
        };

        Ok(Self {
            bind_addr,
            log_format,
        })
    }
}
