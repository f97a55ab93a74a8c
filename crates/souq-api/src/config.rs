//! Boundary configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. The shop is in-memory, so the surface is small: which catalog
//! to start with and what the primary admin credential is.

use serde::{Deserialize, Serialize};
use std::env;

/// Shop boundary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Username of the primary seeded admin account
    pub admin_username: String,

    /// Credential of the primary seeded admin account.
    /// Stored and compared in plain text; hashing is out of scope here.
    pub admin_password: String,

    /// Whether to start from the 30-product demo catalog
    /// (false = empty catalog, used by harnesses that seed their own)
    pub seed_demo_catalog: bool,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable             | Default |
    /// |----------------------|---------|
    /// | `SOUQ_ADMIN_USER`    | `admin` |
    /// | `SOUQ_ADMIN_PASS`    | `123`   |
    /// | `SOUQ_SEED_CATALOG`  | `true`  |
    pub fn load() -> Result<Self, ConfigError> {
        let config = ShopConfig {
            admin_username: env::var("SOUQ_ADMIN_USER").unwrap_or_else(|_| "admin".to_string()),

            admin_password: env::var("SOUQ_ADMIN_PASS").unwrap_or_else(|_| "123".to_string()),

            seed_demo_catalog: env::var("SOUQ_SEED_CATALOG")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SOUQ_SEED_CATALOG".to_string()))?,
        };

        if config.admin_username.trim().is_empty() {
            return Err(ConfigError::InvalidValue("SOUQ_ADMIN_USER".to_string()));
        }
        if config.admin_password.is_empty() {
            return Err(ConfigError::InvalidValue("SOUQ_ADMIN_PASS".to_string()));
        }

        Ok(config)
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            admin_username: "admin".to_string(),
            admin_password: "123".to_string(),
            seed_demo_catalog: true,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShopConfig::default();
        assert_eq!(config.admin_username, "admin");
        assert_eq!(config.admin_password, "123");
        assert!(config.seed_demo_catalog);
    }
}
