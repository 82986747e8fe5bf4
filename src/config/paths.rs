//! Where FinFlow keeps its files
//!
//! ```text
//! <base>/config.json        settings
//! <base>/data/profile.json  the finance profile
//! <base>/exports/           suggested place for profile exports
//! ```
//!
//! ## Base directory
//!
//! 1. `FINFLOW_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/finflow` or `~/.config/finflow`
//! 3. Windows: `%APPDATA%\finflow`

use std::path::PathBuf;

use crate::error::FinflowError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINFLOW_DATA_DIR";

#[derive(Debug, Clone)]
pub struct FinflowPaths {
    base_dir: PathBuf,
}

impl FinflowPaths {
    /// Resolve the base directory from `FINFLOW_DATA_DIR` or the platform
    /// default
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor HOME/APPDATA is set.
    pub fn new() -> Result<Self, FinflowError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Root everything at `base_dir`
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Settings live directly in the base directory
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn profile_file(&self) -> PathBuf {
        self.data_dir().join("profile.json")
    }

    /// Create the base and data directories
    pub fn ensure_directories(&self) -> Result<(), FinflowError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinflowError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinflowError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// A profile has been saved at least once
    pub fn is_initialized(&self) -> bool {
        self.profile_file().exists()
    }
}

/// `$XDG_CONFIG_HOME/finflow`, falling back to `~/.config/finflow`
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FinflowError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                FinflowError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("finflow"))
}

/// `%APPDATA%\finflow`
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FinflowError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FinflowError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("finflow"))
}
