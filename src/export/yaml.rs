//! YAML export of the finance profile
//!
//! Same structure as the JSON export, with a comment header for humans.

use crate::error::{FinflowError, FinflowResult};
use crate::export::json::ProfileExport;
use std::io::Write;

/// Write an export as YAML
pub fn export_yaml<W: Write>(export: &ProfileExport, writer: &mut W) -> FinflowResult<()> {
    let header = format!(
        "# FinFlow profile export\n\
         # Generated: {}\n\
         # App Version: {}\n\
         # Allocation computed for {}\n\n",
        export.exported_at, export.app_version, export.allocation_date
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| FinflowError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| FinflowError::Export(e.to_string()))?;

    Ok(())
}

/// Read an export back from YAML
pub fn import_from_yaml(yaml_str: &str) -> FinflowResult<ProfileExport> {
    let export: ProfileExport =
        serde_yaml::from_str(yaml_str).map_err(|e| FinflowError::Import(e.to_string()))?;

    export.validate().map_err(FinflowError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetStrategy, FinanceProfile, IncomeSource, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export_and_read_back() {
        let mut profile = FinanceProfile::with_strategy(BudgetStrategy::Fire);
        profile.add_income(IncomeSource::new("Job", Money::from_units(1800), [1, 15]));
        profile.balance = Money::from_units(500);
        let export = ProfileExport::new(profile, NaiveDate::from_ymd_opt(2025, 2, 20).unwrap());

        let mut buffer = Vec::new();
        export_yaml(&export, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# FinFlow profile export"));
        assert!(text.contains("FIRE (Extreme Frugality)"));

        let imported = import_from_yaml(&text).unwrap();
        assert_eq!(imported.profile, export.profile);
        assert_eq!(imported.allocation.savings_contribution, Money::from_units(450));
    }

    #[test]
    fn test_garbage_is_import_error() {
        let err = import_from_yaml("profile: [not, a, profile]").unwrap_err();
        assert!(matches!(err, FinflowError::Import(_)));
    }
}
