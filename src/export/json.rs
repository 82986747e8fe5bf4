//! JSON export of the finance profile
//!
//! An export carries the profile plus the allocation computed on the export
//! date, with a schema version so it can be read back safely.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FinflowError, FinflowResult};
use crate::models::{AllocationResult, FinanceProfile};
use crate::services::AllocationEngine;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Profile export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub profile: FinanceProfile,

    /// Allocation as of `allocation_date`, for reference only
    pub allocation_date: NaiveDate,
    pub allocation: AllocationResult,
}

impl ProfileExport {
    /// Build an export of `profile` with its allocation on `date`
    pub fn new(profile: FinanceProfile, date: NaiveDate) -> Self {
        let allocation = AllocationEngine::compute(&profile, date);
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            profile,
            allocation_date: date,
            allocation,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        self.profile.validate()
    }
}

/// Write an export as JSON
pub fn export_json<W: Write>(export: &ProfileExport, writer: &mut W, pretty: bool) -> FinflowResult<()> {
    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    };
    result.map_err(|e| FinflowError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| FinflowError::Export(e.to_string()))?;
    Ok(())
}

/// Read an export back from JSON
pub fn import_from_json(json_str: &str) -> FinflowResult<ProfileExport> {
    let export: ProfileExport =
        serde_json::from_str(json_str).map_err(|e| FinflowError::Import(e.to_string()))?;

    export.validate().map_err(FinflowError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetStrategy, Expense, IncomeSource, Money};

    fn sample_export() -> ProfileExport {
        let mut profile = FinanceProfile::with_strategy(BudgetStrategy::SafeDebt);
        profile.add_income(IncomeSource::new("Job", Money::from_units(2000), [15]));
        profile.add_expense(Expense::new("Rent", Money::from_units(200), 12));
        profile.balance = Money::from_units(1000);
        ProfileExport::new(profile, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap())
    }

    #[test]
    fn test_export_includes_allocation() {
        let export = sample_export();
        assert_eq!(export.allocation.critical_total, Money::from_units(200));
        assert_eq!(export.allocation.extra_debt_payment, Money::from_units(240));
    }

    #[test]
    fn test_json_export_and_read_back() {
        let export = sample_export();
        let mut buffer = Vec::new();
        export_json(&export, &mut buffer, true).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"target_strategy\": \"Safe Debt\""));

        let imported = import_from_json(&text).unwrap();
        assert_eq!(imported.profile, export.profile);
        assert_eq!(imported.allocation, export.allocation);
    }

    #[test]
    fn test_schema_mismatch_rejected() {
        let mut export = sample_export();
        export.schema_version = "0.1.0".into();
        let json = serde_json::to_string(&export).unwrap();

        let err = import_from_json(&json).unwrap_err();
        assert!(err.to_string().contains("Schema version mismatch"));
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let mut export = sample_export();
        export.profile.expenses[0].due_day = 0;
        let json = serde_json::to_string(&export).unwrap();

        assert!(import_from_json(&json).is_err());
    }
}
