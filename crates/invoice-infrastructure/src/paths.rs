//! Unified path management for invoice-desk files.
//!
//! ```text
//! ~/.config/invoice-desk/       # Config directory
//! └── config.toml               # Application configuration
//!
//! ~/.local/share/invoice-desk/  # Data directory
//! └── storage/                  # Key/value store (user.json, invoiceForm.json)
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "invoice-desk";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Platform directories for invoice-desk, resolved through `dirs`.
pub struct InvoicePaths;

impl InvoicePaths {
    /// Returns the configuration directory (e.g., `~/.config/invoice-desk/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the data directory (e.g., `~/.local/share/invoice-desk/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default directory backing the key/value store.
    pub fn storage_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("storage"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        let Ok(config_file) = InvoicePaths::config_file() else {
            return; // no home directory in this environment
        };
        assert!(config_file.ends_with("invoice-desk/config.toml"));
    }

    #[test]
    fn test_storage_dir_is_under_data_dir() {
        let (Ok(storage), Ok(data)) = (InvoicePaths::storage_dir(), InvoicePaths::data_dir())
        else {
            return;
        };
        assert!(storage.starts_with(&data));
        assert!(storage.ends_with("storage"));
    }
}
