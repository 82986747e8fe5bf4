//! Export module for FinFlow
//!
//! Exports the profile, with its current allocation, in two formats:
//! - JSON: machine-readable
//! - YAML: human-readable

pub mod json;
pub mod yaml;

pub use json::{export_json, import_from_json, ProfileExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_yaml, import_from_yaml};

use crate::error::FinflowResult;

/// Read an export in either format, picking YAML for `.yaml`/`.yml` paths
pub fn import_from_path(path: &std::path::Path) -> FinflowResult<ProfileExport> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::error::FinflowError::Import(format!("Failed to read {}: {}", path.display(), e))
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
            import_from_yaml(&content)
        }
        _ => import_from_json(&content),
    }
}
