//! Application configuration loaded from `config.toml`.
//!
//! A missing or empty file yields [`AppConfig::default`]. A file that exists
//! but does not parse is a [`InvoiceError::Config`] error.

use std::fs;
use std::path::{Path, PathBuf};

use invoice_core::error::{InvoiceError, Result};
use serde::{Deserialize, Serialize};

use crate::paths::InvoicePaths;

const DEFAULT_LOG_LEVEL: &str = "warn";

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Settings for the invoice-desk binary.
///
/// ```toml
/// storage_dir = "/var/lib/invoice-desk"
/// log_level = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory backing the key/value store. Defaults to
    /// [`InvoicePaths::storage_dir`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from the platform config file.
    pub fn load_default() -> Result<Self> {
        match InvoicePaths::config_file() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!(error = %e, "no config directory; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads the configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            InvoiceError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(&content).map_err(|e| {
            InvoiceError::config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Resolves the store directory: explicit setting, else the platform default.
    pub fn resolve_storage_dir(&self) -> Result<PathBuf> {
        match &self.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => InvoicePaths::storage_dir().map_err(|e| InvoiceError::config(e.to_string())),
        }
    }
}
