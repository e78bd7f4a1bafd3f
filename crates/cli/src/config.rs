//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VITRINE_STORAGE_DIR` - Directory holding cart snapshots (default: .vitrine)
//! - `VITRINE_CART_KEY` - Storage key of the cart snapshot (default: cart)
//! - `RUST_LOG` - Log filter (default: `vitrine_cli=info,vitrine_cart=info`)
//! - `VITRINE_LOG_FORMAT` - `json` for JSON log lines (default: text)

use std::path::PathBuf;

use thiserror::Error;
use vitrine_cart::storage::is_valid_key;
use vitrine_cart::store::DEFAULT_KEY;

const DEFAULT_STORAGE_DIR: &str = ".vitrine";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory for the file-backed cart storage
    pub storage_dir: PathBuf,
    /// Key the cart snapshot is stored under
    pub cart_key: String,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_dir = lookup("VITRINE_STORAGE_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR), PathBuf::from);

        let cart_key = lookup("VITRINE_CART_KEY").unwrap_or_else(|| DEFAULT_KEY.to_string());
        if !is_valid_key(&cart_key) {
            return Err(ConfigError::InvalidEnvVar(
                "VITRINE_CART_KEY".to_string(),
                format!("{cart_key:?} must be ASCII letters, digits, '-' or '_'"),
            ));
        }

        Ok(Self {
            storage_dir,
            cart_key,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.storage_dir, PathBuf::from(".vitrine"));
        assert_eq!(config.cart_key, "cart");
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::from_lookup(lookup(&[
            ("VITRINE_STORAGE_DIR", "/tmp/shop"),
            ("VITRINE_CART_KEY", "cart-staging"),
        ]))
        .unwrap();
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/shop"));
        assert_eq!(config.cart_key, "cart-staging");
    }

    #[test]
    fn test_blank_storage_dir_uses_default() {
        let config = CliConfig::from_lookup(lookup(&[("VITRINE_STORAGE_DIR", "  ")])).unwrap();
        assert_eq!(config.storage_dir, PathBuf::from(".vitrine"));
    }

    #[test]
    fn test_invalid_cart_key() {
        let result = CliConfig::from_lookup(lookup(&[("VITRINE_CART_KEY", "../etc/passwd")]));
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref name, _) if name == "VITRINE_CART_KEY"));
    }

    #[test]
    fn test_empty_cart_key() {
        assert!(CliConfig::from_lookup(lookup(&[("VITRINE_CART_KEY", "")])).is_err());
    }
}
