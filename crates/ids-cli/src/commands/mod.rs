//! Command implementations.

pub mod activate;
pub mod catalog;
pub mod seed;

pub use activate::run_activate;
pub use catalog::run_catalog;
pub use seed::run_seed;

use std::time::Duration;

use ids_core::Config;
use ids_storage::{PasswordHasherService, PasswordPolicy};
use ids_storage_sql::{PgPool, PoolConfig, create_pool, run_migrations};

/// Connects to the configured database and applies migrations.
pub async fn connect(config: &Config, database_url: Option<&str>) -> crate::CliResult<PgPool> {
    let url = match database_url {
        Some(url) => url,
        None => config.require_database_url()?,
    };

    let pool_config = PoolConfig::new(url)
        .connections(
            config.database.min_connections,
            config.database.max_connections,
        )
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs));

    let pool = create_pool(&pool_config).await?;
    run_migrations(&pool).await?;
    tracing::info!(
        max_connections = pool_config.max_connections,
        "connected to database"
    );
    Ok(pool)
}

/// Builds the password policy from configuration.
#[must_use]
pub fn password_policy(config: &Config) -> PasswordPolicy {
    PasswordPolicy::default().required_length(config.credentials.password_min_length)
}

/// Builds the password hasher.
#[must_use]
pub fn password_hasher() -> PasswordHasherService {
    PasswordHasherService::default()
}
