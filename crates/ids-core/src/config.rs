//! Configuration management.
//!
//! Configuration is loaded from environment variables (and a `.env` file if
//! present) with sensible defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Credential store configuration.
    pub credentials: CredentialConfig,
    /// Log filter directive (`RUST_LOG` syntax).
    pub log_level: String,
}

/// Database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL. `None` when no SQL store is configured.
    pub url: Option<String>,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    pub min_connections: u32,
    /// Seconds to wait for a free pooled connection.
    pub acquire_timeout_secs: u64,
}

/// Credential store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialConfig {
    /// Minimum accepted password length.
    pub password_min_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: None,
                max_connections: 10,
                min_connections: 1,
                acquire_timeout_secs: 30,
            },
            credentials: CredentialConfig {
                password_min_length: 6,
            },
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if it exists.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is not an error.
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());

        let min_connections = parse_or(
            &lookup,
            "IDS_DB_MIN_CONNECTIONS",
            defaults.database.min_connections,
        )?;
        let max_connections = parse_or(
            &lookup,
            "IDS_DB_MAX_CONNECTIONS",
            defaults.database.max_connections,
        )?;

        if min_connections > max_connections {
            return Err(Error::Config(format!(
                "IDS_DB_MIN_CONNECTIONS ({min_connections}) exceeds IDS_DB_MAX_CONNECTIONS ({max_connections})"
            )));
        }

        let acquire_timeout_secs = parse_or(
            &lookup,
            "IDS_DB_ACQUIRE_TIMEOUT_SECS",
            defaults.database.acquire_timeout_secs,
        )?;

        let password_min_length = parse_or(
            &lookup,
            "IDS_PASSWORD_MIN_LENGTH",
            defaults.credentials.password_min_length,
        )?;

        let log_level = lookup("RUST_LOG").unwrap_or(defaults.log_level);

        Ok(Self {
            database: DatabaseConfig {
                url,
                max_connections,
                min_connections,
                acquire_timeout_secs,
            },
            credentials: CredentialConfig {
                password_min_length,
            },
            log_level,
        })
    }

    /// Creates a configuration for testing.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            database: DatabaseConfig {
                url: None,
                max_connections: 5,
                min_connections: 1,
                acquire_timeout_secs: 5,
            },
            log_level: "debug".to_string(),
            ..Self::default()
        }
    }

    /// Returns the database URL or an error naming the missing variable.
    pub fn require_database_url(&self) -> Result<&str> {
        self.database
            .url
            .as_deref()
            .ok_or(Error::MissingSetting("DATABASE_URL"))
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidSetting { name, value }),
        None => Ok(default),
    }
}
