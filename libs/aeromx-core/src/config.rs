//! Configuration for aeromx database access

use crate::error::{AeromxError, Result};
use aeromx_common::utils::get_default_database_path;
use std::path::{Path, PathBuf};

/// Configuration for locating the aeromx database
#[derive(Debug, Clone)]
pub struct AeromxConfig {
    /// Path to the aeromx SQLite database
    pub database_path: PathBuf,
    /// Whether to use the default database path if the specified path doesn't exist
    pub fallback_to_default: bool,
}

impl AeromxConfig {
    /// Create a new configuration with a custom database path
    #[must_use]
    pub fn new<P: AsRef<Path>>(database_path: P, fallback_to_default: bool) -> Self {
        Self {
            database_path: database_path.as_ref().to_path_buf(),
            fallback_to_default,
        }
    }

    /// Create a configuration with the default database path
    #[must_use]
    pub fn with_default_path() -> Self {
        Self {
            database_path: get_default_database_path(),
            fallback_to_default: false,
        }
    }

    /// Get the effective database path, falling back to default if needed
    ///
    /// # Errors
    /// Returns `AeromxError::Configuration` if neither the specified path nor
    /// the default path exists
    pub fn get_effective_database_path(&self) -> Result<PathBuf> {
        if self.database_path.exists() {
            return Ok(self.database_path.clone());
        }

        if self.fallback_to_default {
            let default_path = get_default_database_path();
            if default_path.exists() {
                return Ok(default_path);
            }
        }

        Err(AeromxError::configuration(format!(
            "Database not found at {} and fallback is {}",
            self.database_path.display(),
            if self.fallback_to_default {
                "enabled but default path also not found"
            } else {
                "disabled"
            }
        )))
    }

    /// Create configuration from environment variables
    ///
    /// Reads `AEROMX_DATABASE_PATH` and `AEROMX_FALLBACK_TO_DEFAULT`
    #[must_use]
    pub fn from_env() -> Self {
        let database_path = std::env::var("AEROMX_DATABASE_PATH")
            .map_or_else(|_| get_default_database_path(), PathBuf::from);

        let fallback_to_default = std::env::var("AEROMX_FALLBACK_TO_DEFAULT")
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes" | "on"))
            .unwrap_or(true);

        Self::new(database_path, fallback_to_default)
    }
}

impl Default for AeromxConfig {
    fn default() -> Self {
        Self::with_default_path()
    }
}
