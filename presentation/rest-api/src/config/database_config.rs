use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::{env, time::Duration};

/// Read database configuration from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_ACQUIRE_TIMEOUT_SECS: pool acquire timeout (default: 30)
/// - DATABASE_MIGRATIONS_PATH: migrations directory (default: "./migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set or a numeric setting does not parse
pub fn from_env() -> anyhow::Result<DatabaseConfig> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let mut config = DatabaseConfig::new(db_url);

    if let Ok(max) = env::var("DATABASE_MAX_CONNECTIONS") {
        config.max_connections = max
            .parse()
            .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?;
    }
    if let Ok(secs) = env::var("DATABASE_ACQUIRE_TIMEOUT_SECS") {
        config.acquire_timeout = Duration::from_secs(
            secs.parse()
                .context("DATABASE_ACQUIRE_TIMEOUT_SECS must be a number of seconds")?,
        );
    }
    if let Ok(path) = env::var("DATABASE_MIGRATIONS_PATH") {
        config.migrations_path = path;
    }

    Ok(config)
}

/// Connect the pool and bring the schema up to date
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(config).await?;
    run_migrations(&pool, &config.migrations_path).await?;
    tracing::info!(
        max_connections = config.max_connections,
        "Database pool ready and migrations applied"
    );
    Ok(pool)
}
