//! User settings for FinFlow
//!
//! Manages user preferences: currency symbol, date formats, the strategy a new
//! profile starts with, and the default log level.

use serde::{Deserialize, Serialize};

use super::paths::FinflowPaths;
use crate::error::FinflowError;
use crate::models::BudgetStrategy;

/// User settings for FinFlow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Date format tried first when reading statement files
    #[serde(default = "default_statement_date_format")]
    pub statement_date_format: String,

    /// Strategy given to a freshly initialized profile
    #[serde(default)]
    pub default_strategy: BudgetStrategy,

    /// Log filter used when neither RUST_LOG nor --verbose is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "£".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_statement_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            statement_date_format: default_statement_date_format(),
            default_strategy: BudgetStrategy::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinflowPaths) -> Result<Self, FinflowError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinflowError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinflowError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinflowPaths) -> Result<(), FinflowError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinflowError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinflowError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
