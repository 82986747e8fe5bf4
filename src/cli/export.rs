//! CLI commands for profile export and import

use chrono::Local;
use clap::ValueEnum;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{FinflowError, FinflowResult};
use crate::export::{export_json, export_yaml, import_from_path, ProfileExport};
use crate::services::ProfileService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Write the profile and today's allocation to `output`
pub fn handle_export_command(
    storage: &Storage,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> FinflowResult<()> {
    let profile = ProfileService::new(storage).current()?;
    let export = ProfileExport::new(profile, Local::now().date_naive());

    let file = File::create(output).map_err(|e| {
        FinflowError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => export_json(&export, &mut writer, pretty)?,
        ExportFormat::Yaml => export_yaml(&export, &mut writer)?,
    }

    println!("Profile exported to: {}", output.display());
    Ok(())
}

/// Replace the profile with one read from an export file
pub fn handle_import_command(storage: &Storage, input: &Path) -> FinflowResult<()> {
    let export = import_from_path(input)?;
    let profile = export.profile;

    println!(
        "Importing profile exported {} (app version {})",
        export.exported_at.format("%Y-%m-%d %H:%M"),
        export.app_version
    );

    let incomes = profile.income_sources.len();
    let expenses = profile.expenses.len();
    ProfileService::new(storage).replace(profile)?;

    println!(
        "Imported {} income sources and {} expenses",
        incomes, expenses
    );
    Ok(())
}
