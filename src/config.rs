//! Runtime configuration read from the environment.
//!
//! Settings are read once at start-up. Lookups go through a closure so
//! tests can supply a map instead of mutating the process environment.

use std::env;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::TimeDelta;
use thiserror::Error;

/// Selects the store backend.
pub const STORE_ENV: &str = "TASKBOARD_STORE";
/// `PostgreSQL` connection string.
pub const DATABASE_URL_ENV: &str = "TASKBOARD_DATABASE_URL";
/// Maximum `PostgreSQL` pool size.
pub const POOL_SIZE_ENV: &str = "TASKBOARD_POOL_SIZE";
/// Seconds a failure notice stays visible.
pub const NOTICE_TTL_ENV: &str = "TASKBOARD_NOTICE_TTL_SECS";
/// Fallback tracing filter when `RUST_LOG` is unset.
pub const LOG_FILTER_ENV: &str = "TASKBOARD_LOG";
/// Log destination for the terminal board.
pub const LOG_FILE_ENV: &str = "TASKBOARD_LOG_FILE";

const DEFAULT_POOL_SIZE: NonZeroU32 = NonZeroU32::MIN.saturating_add(3);
const DEFAULT_NOTICE_TTL_SECS: u32 = 5;
const DEFAULT_LOG_FILTER: &str = "taskboard=info";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The store backend name is not recognised.
    #[error("unknown store backend '{0}', expected 'memory' or 'postgres'")]
    UnknownStore(String),
    /// The `PostgreSQL` backend was selected without a connection string.
    #[error("TASKBOARD_DATABASE_URL must be set when the postgres store is selected")]
    MissingDatabaseUrl,
    /// A numeric setting could not be parsed.
    #[error("{key} must be {expected}, got '{value}'")]
    InvalidNumber {
        /// Environment variable name.
        key: &'static str,
        /// Raw value.
        value: String,
        /// What the value should have been.
        expected: &'static str,
    },
}

/// Task store backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-local store; contents are lost on exit.
    #[default]
    Memory,
    /// `PostgreSQL` JSONB document table.
    Postgres,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(Self::Memory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(ConfigError::UnknownStore(value.to_owned())),
        }
    }
}

/// Settings for the task board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    store: StoreBackend,
    database_url: Option<String>,
    pool_size: NonZeroU32,
    notice_ttl_secs: u32,
    log_filter: String,
    log_file: Option<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            store: StoreBackend::default(),
            database_url: None,
            pool_size: DEFAULT_POOL_SIZE,
            notice_ttl_secs: DEFAULT_NOTICE_TTL_SECS,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            log_file: None,
        }
    }
}

impl BoardConfig {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let store = read(STORE_ENV)
            .map(|value| value.parse::<StoreBackend>())
            .transpose()?
            .unwrap_or(defaults.store);
        let pool_size = read(POOL_SIZE_ENV)
            .map(|value| parse_number::<NonZeroU32>(POOL_SIZE_ENV, &value, "a positive integer"))
            .transpose()?
            .unwrap_or(defaults.pool_size);
        let notice_ttl_secs = read(NOTICE_TTL_ENV)
            .map(|value| parse_number::<u32>(NOTICE_TTL_ENV, &value, "a whole number of seconds"))
            .transpose()?
            .unwrap_or(defaults.notice_ttl_secs);

        Ok(Self {
            store,
            database_url: read(DATABASE_URL_ENV),
            pool_size,
            notice_ttl_secs,
            log_filter: read(LOG_FILTER_ENV).unwrap_or(defaults.log_filter),
            log_file: read(LOG_FILE_ENV).map(PathBuf::from),
        })
    }

    /// Overrides the store backend.
    #[must_use]
    pub const fn with_store(mut self, store: StoreBackend) -> Self {
        self.store = store;
        self
    }

    /// Overrides the `PostgreSQL` connection string.
    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Returns the selected store backend.
    #[must_use]
    pub const fn store(&self) -> StoreBackend {
        self.store
    }

    /// Returns the `PostgreSQL` connection string, if configured.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Returns the connection string required by the `PostgreSQL` store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when none is configured.
    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url().ok_or(ConfigError::MissingDatabaseUrl)
    }

    /// Returns the maximum `PostgreSQL` pool size.
    #[must_use]
    pub const fn pool_size(&self) -> NonZeroU32 {
        self.pool_size
    }

    /// Returns how long failure notices stay visible.
    #[must_use]
    pub fn notice_ttl(&self) -> TimeDelta {
        TimeDelta::seconds(i64::from(self.notice_ttl_secs))
    }

    /// Returns the fallback tracing filter.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the terminal board's log file, if configured.
    #[must_use]
    pub fn log_file(&self) -> Option<&std::path::Path> {
        self.log_file.as_deref()
    }
}

fn parse_number<T: FromStr>(
    key: &'static str,
    value: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: value.to_owned(),
            expected,
        })
}
