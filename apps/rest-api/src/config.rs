//! REST API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Pool bounds and paths are tunables; none of them carry a
//! correctness contract.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// REST API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Socket address the server binds to.
    pub bind_addr: String,

    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Directory receipt files are stored in.
    pub upload_dir: PathBuf,

    /// Base path every REST resource is nested under (the websocket
    /// endpoint lives outside it). Must start with `/`.
    pub api_base_path: String,

    /// Maximum open connections in the database pool.
    pub db_max_connections: u32,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable             | Default        |
    /// |----------------------|----------------|
    /// | `BIND_ADDR`          | `0.0.0.0:5000` |
    /// | `DATABASE_PATH`      | `stockroom.db` |
    /// | `UPLOAD_DIR`         | `uploads`      |
    /// | `API_BASE_PATH`      | `/api`         |
    /// | `DB_MAX_CONNECTIONS` | `4`            |
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),

            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "stockroom.db".to_string())
                .into(),

            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),

            api_base_path: env::var("API_BASE_PATH").unwrap_or_else(|_| "/api".to_string()),

            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,
        };

        if !config.api_base_path.starts_with('/') {
            return Err(ConfigError::InvalidValue("API_BASE_PATH".to_string()));
        }

        Ok(config)
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Only read when the variables are unset, which is the test default
        let config = ApiConfig::load().unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:5000");
        assert_eq!(config.api_base_path, "/api");
        assert_eq!(config.db_max_connections, 4);
    }
}
