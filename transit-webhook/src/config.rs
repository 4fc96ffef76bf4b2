//! Server configuration from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use tracing::warn;

use crate::tfl::{DEFAULT_BASE_URL, TflConfig};

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but couldn't be parsed
    #[error("invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TfL application id (`TFL_APP_ID`)
    pub app_id: String,
    /// TfL application key (`TFL_APP_KEY`)
    pub app_key: String,
    /// TfL API base URL (`TFL_API_BASE_URL`)
    pub base_url: String,
    /// Per-request timeout (`TFL_TIMEOUT_SECS`)
    pub timeout: Duration,
    /// Listen address (`BIND_ADDR`)
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Missing credentials only produce a warning: TfL accepts anonymous
    /// requests at a lower rate limit.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let app_id = var("TFL_APP_ID").unwrap_or_else(|| {
            warn!("TFL_APP_ID not set; calling TfL anonymously");
            String::new()
        });
        let app_key = var("TFL_APP_KEY").unwrap_or_else(|| {
            warn!("TFL_APP_KEY not set; calling TfL anonymously");
            String::new()
        });

        let base_url = var("TFL_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match var("TFL_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        name: "TFL_TIMEOUT_SECS",
                        value,
                        reason: "must be at least 1".to_string(),
                    });
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        name: "TFL_TIMEOUT_SECS",
                        value,
                        reason: e.to_string(),
                    });
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let bind_value = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                value: bind_value.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            app_id,
            app_key,
            base_url,
            timeout,
            bind_addr,
        })
    }

    /// Client configuration for the TfL API.
    pub fn tfl(&self) -> TflConfig {
        TflConfig::new(&self.app_id, &self.app_key)
            .with_base_url(&self.base_url)
            .with_timeout(self.timeout)
    }
}
