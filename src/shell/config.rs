//! Service configuration, read from environment variables.

use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("unknown storage kind: {0} (expected sqlite or memory)")]
    UnknownStorage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Sqlite,
    Memory,
}

impl FromStr for StorageKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageKind::Sqlite),
            "memory" => Ok(StorageKind::Memory),
            _ => Err(ConfigError::UnknownStorage(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bind address (env: HOST)
    pub host: String,
    /// HTTP port (env: HTTP_PORT)
    pub http_port: u16,
    /// Repository backend (env: EMPLOYEES_STORAGE)
    pub storage: StorageKind,
    /// SQLite connection URL (env: DATABASE_URL)
    pub database_url: String,
    /// Pool size, at least 1 (env: DATABASE_MAX_CONNECTIONS)
    pub database_max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            http_port: 8080,
            storage: StorageKind::Sqlite,
            database_url: "sqlite://employees.db".into(),
            database_max_connections: 5,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from `lookup`, falling back to defaults for unset
    /// or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),
            http_port: parse_or("HTTP_PORT", var("HTTP_PORT"), defaults.http_port)?,
            storage: match var("EMPLOYEES_STORAGE") {
                Some(kind) => kind.parse()?,
                None => defaults.storage,
            },
            database_url: var("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                var("DATABASE_MAX_CONNECTIONS"),
                NonZeroU32::new(defaults.database_max_connections).unwrap_or(NonZeroU32::MIN),
            )?
            .get(),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}

/// A missing `.env` file is fine; a malformed one is reported.
pub fn tolerate_missing_env_file<T>(
    result: Result<T, dotenvy::Error>,
) -> Result<(), dotenvy::Error> {
    match result {
        Ok(_) => Ok(()),
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(error),
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        None => Ok(default),
    }
}
