//! Gateway configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! development defaults.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Directory holding the three JSON documents.
    pub data_dir: PathBuf,

    /// HTTP listen port.
    pub port: u16,

    /// Shared admin secret for catalog and price-edit routes.
    ///
    /// Compared case-sensitively, no hashing - this gates a back-office
    /// form on a trusted LAN, not an internet-facing login.
    pub admin_token: String,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = GatewayConfig {
            data_dir: env::var("SPICEBILL_DATA_DIR")
                .unwrap_or_else(|_| "./data".to_string())
                .into(),

            port: env::var("SPICEBILL_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SPICEBILL_PORT".to_string()))?,

            // Development default; override in any real deployment
            admin_token: env::var("SPICEBILL_ADMIN_TOKEN")
                .unwrap_or_else(|_| "admin123".to_string()),
        };

        Ok(config)
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
