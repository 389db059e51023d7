//! API configuration

use serde::Deserialize;

use core_kernel::Points;
use domain_point::PointPolicy;

/// API configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Highest balance a charge may produce; unset means unbounded
    pub max_balance: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            max_balance: None,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Loads configuration, falling back to individual variables
    ///
    /// Returns the error that forced the fallback, if any, so the caller can
    /// report it once logging is up.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    pub fn load() -> Result<(Self, Option<config::ConfigError>), config::ConfigError> {
        match Self::from_env() {
            Ok(config) => Ok((config, None)),
            Err(e) => {
                let config = Self::from_vars(|key| std::env::var(key).ok())?;
                Ok((config, Some(e)))
            }
        }
    }

    /// Builds configuration from single `API_*` variables looked up with `var`
    ///
    /// Unset variables take their defaults. `RUST_LOG` stands in for an
    /// unset `API_LOG_LEVEL`.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_PORT` or `API_MAX_BALANCE` is set but malformed
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: var("API_HOST").unwrap_or(defaults.host),
            port: parse_var(&var, "API_PORT")?.unwrap_or(defaults.port),
            log_level: var("API_LOG_LEVEL")
                .or_else(|| var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            max_balance: parse_var(&var, "API_MAX_BALANCE")?,
        })
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Balance policy for the point service
    pub fn policy(&self) -> PointPolicy {
        PointPolicy {
            max_balance: self.max_balance.map(Points::new),
        }
    }
}

fn parse_var<T>(var: impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, config::ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match var(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|e| {
            config::ConfigError::Message(format!("invalid {} '{}': {}", key, raw, e))
        }),
    }
}
