//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOREFRONT_CATALOG_PATH` - Catalog JSON file (default: catalog.json)
//! - `SHOREFRONT_CART_PATH` - Cart persistence file (default: cart.json)
//! - `SHOREFRONT_PAGE_SIZE` - Products per catalog page (default: 10)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_CATALOG_PATH: &str = "catalog.json";
const DEFAULT_CART_PATH: &str = "cart.json";
const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the catalog JSON supplied by the catalog collaborator.
    pub catalog_path: PathBuf,
    /// Fixed key (file path) under which the cart collection is persisted.
    pub cart_path: PathBuf,
    /// Fixed page size for catalog queries.
    pub page_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            cart_path: PathBuf::from(DEFAULT_CART_PATH),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid
    /// (currently only the page size, which must parse and be >= 1).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_path = PathBuf::from(get_env_or_default(
            "SHOREFRONT_CATALOG_PATH",
            DEFAULT_CATALOG_PATH,
        ));
        let cart_path = PathBuf::from(get_env_or_default("SHOREFRONT_CART_PATH", DEFAULT_CART_PATH));
        let page_size = match std::env::var("SHOREFRONT_PAGE_SIZE") {
            Ok(raw) => parse_page_size(&raw)?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            catalog_path,
            cart_path,
            page_size,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and validate a page size value.
fn parse_page_size(raw: &str) -> Result<usize, ConfigError> {
    let size = raw.parse::<usize>().map_err(|e| {
        ConfigError::InvalidEnvVar("SHOREFRONT_PAGE_SIZE".to_string(), e.to_string())
    })?;
    if size == 0 {
        return Err(ConfigError::InvalidEnvVar(
            "SHOREFRONT_PAGE_SIZE".to_string(),
            "must be at least 1".to_string(),
        ));
    }
    Ok(size)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.catalog_path, PathBuf::from("catalog.json"));
        assert_eq!(config.cart_path, PathBuf::from("cart.json"));
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_parse_page_size_valid() {
        assert_eq!(parse_page_size("25").unwrap(), 25);
    }

    #[test]
    fn test_parse_page_size_zero() {
        let err = parse_page_size("0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_parse_page_size_not_a_number() {
        assert!(parse_page_size("ten").is_err());
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        assert_eq!(
            get_env_or_default("SHOREFRONT_TEST_UNSET_VAR", "fallback"),
            "fallback"
        );
    }
}
