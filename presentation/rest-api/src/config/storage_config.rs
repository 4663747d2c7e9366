use std::env;

use persistence::db::DatabaseConfig;

use super::database_config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_storage_backend: {0}")]
    InvalidStorageBackend(String),
}

/// Where product records are kept.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    Postgres(DatabaseConfig),
    /// Process-local store; records are lost on restart.
    Memory,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - STORAGE_BACKEND: "postgres" (default) or "memory"
    /// - DATABASE_*: see `database_config::from_env`, read only for postgres
    pub fn from_env() -> anyhow::Result<Self> {
        let backend = env::var("STORAGE_BACKEND").unwrap_or_else(|_| "postgres".to_string());
        match parse_backend(&backend)? {
            Backend::Postgres => Ok(StorageConfig::Postgres(database_config::from_env()?)),
            Backend::Memory => Ok(StorageConfig::Memory),
        }
    }
}

#[derive(Debug, PartialEq)]
enum Backend {
    Postgres,
    Memory,
}

fn parse_backend(raw: &str) -> Result<Backend, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "postgres" | "postgresql" => Ok(Backend::Postgres),
        "memory" | "in-memory" => Ok(Backend::Memory),
        other => Err(ConfigError::InvalidStorageBackend(other.to_string())),
    }
}
