//! Database settings for the `PostgreSQL` reporting adapters.
//!
//! Settings come from the process environment:
//!
//! - `DATABASE_URL` (required)
//! - `REPORTS_DB_POOL_SIZE` (default 4, must be positive)
//! - `REPORTS_DB_CONNECT_TIMEOUT_SECS` (default 30, must be positive)

use crate::report::adapters::postgres::ReportPgPool;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable holding the maximum pool size.
pub const POOL_SIZE_VAR: &str = "REPORTS_DB_POOL_SIZE";
/// Environment variable holding the connection timeout in seconds.
pub const CONNECT_TIMEOUT_VAR: &str = "REPORTS_DB_CONNECT_TIMEOUT_SECS";

const DEFAULT_POOL_SIZE: u32 = 4;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while loading settings or opening the pool.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required setting {0}")]
    Missing(&'static str),
    /// A variable could not be parsed as a positive integer.
    #[error("invalid value '{value}' for {key}, expected a positive integer")]
    Invalid {
        /// Offending variable name.
        key: &'static str,
        /// Raw value found in the environment.
        value: String,
    },
    /// The connection pool could not be created.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Connection settings for the reporting database.
#[derive(Clone, PartialEq, Eq)]
pub struct ReportsConfig {
    database_url: String,
    max_pool_size: u32,
    connection_timeout: Duration,
}

impl std::fmt::Debug for ReportsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportsConfig")
            .field("database_url", &"<redacted>")
            .field("max_pool_size", &self.max_pool_size)
            .field("connection_timeout", &self.connection_timeout)
            .finish()
    }
}

impl ReportsConfig {
    /// Creates settings with default pool size and timeout.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_pool_size: DEFAULT_POOL_SIZE,
            connection_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Overrides the maximum number of pooled connections.
    #[must_use]
    pub const fn with_max_pool_size(mut self, size: u32) -> Self {
        self.max_pool_size = size;
        self
    }

    /// Overrides the connection checkout timeout.
    #[must_use]
    pub const fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Loads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when `DATABASE_URL` is unset and
    /// [`ConfigError::Invalid`] when a numeric setting does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads settings through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ReportsConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let mut config = Self::new(database_url);
        if let Some(size) = parse_positive(&lookup, POOL_SIZE_VAR)? {
            let size = u32::try_from(size).map_err(|_| ConfigError::Invalid {
                key: POOL_SIZE_VAR,
                value: size.to_string(),
            })?;
            config = config.with_max_pool_size(size);
        }
        if let Some(secs) = parse_positive(&lookup, CONNECT_TIMEOUT_VAR)? {
            config = config.with_connection_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Returns the connection string.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the maximum pool size.
    #[must_use]
    pub const fn max_pool_size(&self) -> u32 {
        self.max_pool_size
    }

    /// Returns the connection checkout timeout.
    #[must_use]
    pub const fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }

    /// Opens the r2d2 pool shared by the `PostgreSQL` repositories.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pool`] when no connection can be established
    /// within the configured timeout.
    pub fn build_pool(&self) -> Result<ReportPgPool, ConfigError> {
        let manager = ConnectionManager::<PgConnection>::new(self.database_url.as_str());
        let pool = Pool::builder()
            .max_size(self.max_pool_size)
            .connection_timeout(self.connection_timeout)
            .build(manager)?;
        tracing::info!(max_pool_size = self.max_pool_size, "reporting pool ready");
        Ok(pool)
    }
}

fn parse_positive<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}
