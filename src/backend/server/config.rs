/**
 * Server Configuration
 *
 * This module handles loading and validation of the server configuration
 * from environment variables, with defaults suitable for local development.
 *
 * # Configuration Sources
 *
 * | Variable                   | Default                         |
 * |----------------------------|---------------------------------|
 * | `SERVER_PORT`              | `5000`                          |
 * | `DATABASE_URL`             | `sqlite://roomchat.db?mode=rwc` |
 * | `DATABASE_MAX_CONNECTIONS` | `5`                             |
 * | `STORE_TIMEOUT_MS`         | `5000`                          |
 * | `SWEEP_INTERVAL_MS`        | `15000`                         |
 * | `INACTIVITY_TOLERANCE_MS`  | `10000`                         |
 * | `SWEEP_CONCURRENCY`        | `8`                             |
 *
 * # Error Handling
 *
 * Unlike optional services, a bad value here is fatal: the server refuses
 * to start with a configuration it cannot parse.
 */

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::backend::store::DEFAULT_STORE_TIMEOUT;
use crate::backend::sweeper::SweeperConfig;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://roomchat.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_millis(15_000);
const DEFAULT_INACTIVITY_TOLERANCE: Duration = Duration::from_millis(10_000);
const DEFAULT_SWEEP_CONCURRENCY: usize = 8;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("{0} must be greater than zero")]
    MustBePositive(&'static str),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port the HTTP listener binds on all interfaces
    pub port: u16,
    /// Connection string of the chat store
    pub database_url: String,
    /// Upper bound of the store connection pool
    pub max_connections: u32,
    /// Bound on every individual store call
    pub store_timeout: Duration,
    /// Period of the inactivity sweep
    pub sweep_interval: Duration,
    /// Heartbeat age after which a participant is evicted
    pub inactivity_tolerance: Duration,
    /// Evictions run in parallel within one sweep
    pub sweep_concurrency: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            store_timeout: DEFAULT_STORE_TIMEOUT,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            inactivity_tolerance: DEFAULT_INACTIVITY_TOLERANCE,
            sweep_concurrency: DEFAULT_SWEEP_CONCURRENCY,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            port: parse_or(&lookup, "SERVER_PORT", DEFAULT_PORT)?,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            store_timeout: millis_or(&lookup, "STORE_TIMEOUT_MS", DEFAULT_STORE_TIMEOUT)?,
            sweep_interval: millis_or(&lookup, "SWEEP_INTERVAL_MS", DEFAULT_SWEEP_INTERVAL)?,
            inactivity_tolerance: millis_or(
                &lookup,
                "INACTIVITY_TOLERANCE_MS",
                DEFAULT_INACTIVITY_TOLERANCE,
            )?,
            sweep_concurrency: parse_or(&lookup, "SWEEP_CONCURRENCY", DEFAULT_SWEEP_CONCURRENCY)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_connections == 0 {
            return Err(ConfigError::MustBePositive("DATABASE_MAX_CONNECTIONS"));
        }
        if self.store_timeout.is_zero() {
            return Err(ConfigError::MustBePositive("STORE_TIMEOUT_MS"));
        }
        if self.sweep_interval.is_zero() {
            return Err(ConfigError::MustBePositive("SWEEP_INTERVAL_MS"));
        }
        if self.inactivity_tolerance.is_zero() {
            return Err(ConfigError::MustBePositive("INACTIVITY_TOLERANCE_MS"));
        }
        if self.sweep_concurrency == 0 {
            return Err(ConfigError::MustBePositive("SWEEP_CONCURRENCY"));
        }
        Ok(())
    }

    /// Settings for the inactivity sweeper
    pub fn sweeper(&self) -> SweeperConfig {
        SweeperConfig {
            interval: self.sweep_interval,
            tolerance: self.inactivity_tolerance,
            concurrency: self.sweep_concurrency,
        }
    }
}

fn parse_opt<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

fn millis_or<F>(lookup: &F, key: &'static str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_opt::<u64, F>(lookup, key)?.map_or(default, Duration::from_millis))
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    pub fn max_connections(mut self, max_connections: u32) -> Self {
        self.config.max_connections = max_connections;
        self
    }

    pub fn store_timeout(mut self, timeout: Duration) -> Self {
        self.config.store_timeout = timeout;
        self
    }

    pub fn sweep_interval(mut self, interval: Duration) -> Self {
        self.config.sweep_interval = interval;
        self
    }

    pub fn inactivity_tolerance(mut self, tolerance: Duration) -> Self {
        self.config.inactivity_tolerance = tolerance;
        self
    }

    pub fn sweep_concurrency(mut self, concurrency: usize) -> Self {
        self.config.sweep_concurrency = concurrency;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
