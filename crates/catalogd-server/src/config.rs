// ABOUTME: Configuration loading for the catalogd server.
// ABOUTME: Reads environment variables with sensible defaults and validates the bind address.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CATALOGD_BIND is not a valid socket address: {0}")]
    InvalidBind(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CatalogdConfig {
    pub home: PathBuf,
    pub bind: SocketAddr,
}

impl CatalogdConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - CATALOGD_HOME: data directory (default: ~/.catalogd)
    /// - CATALOGD_BIND: socket address to bind (default: 127.0.0.1:3000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let home = std::env::var("CATALOGD_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                std::env::var("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("/tmp"))
                    .join(".catalogd")
            });

        let bind_str =
            std::env::var("CATALOGD_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        Ok(Self { home, bind })
    }

    /// Path to the durable catalog file inside the home directory.
    pub fn data_file(&self) -> PathBuf {
        self.home.join("products.json")
    }
}
