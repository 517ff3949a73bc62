//! Connection pool setup and schema migrations.

use std::time::Duration;

use ids_storage::StorageError;
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Connection settings for the `PostgreSQL` stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Database connection URL.
    pub url: String,
    /// Upper bound on open connections.
    pub max_connections: u32,
    /// Connections kept open while idle.
    pub min_connections: u32,
    /// How long a caller waits for a free connection.
    pub acquire_timeout: Duration,
}

impl PoolConfig {
    /// Settings for `url` with a small pool.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// Sets both pool bounds.
    #[must_use]
    pub const fn connections(mut self, min: u32, max: u32) -> Self {
        self.min_connections = min;
        self.max_connections = max;
        self
    }

    /// Sets the acquire timeout.
    #[must_use]
    pub const fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Opens a pool and checks that the database is reachable.
pub async fn create_pool(config: &PoolConfig) -> Result<PgPool, StorageError> {
    let pool = config
        .options()
        .connect(&config.url)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    tracing::debug!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| StorageError::Internal(format!("migration failed: {e}")))?;

    tracing::debug!("database migrations applied");
    Ok(())
}
