//! Status command: the allocation dashboard

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::display::format_allocation;
use crate::error::{FinflowError, FinflowResult};
use crate::services::ProfileService;
use crate::storage::Storage;

/// Parse a `YYYY-MM-DD` reference date, defaulting to today
pub fn parse_reference_date(date: Option<&str>) -> FinflowResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            FinflowError::Validation(format!(
                "Invalid date '{}'. Use the format YYYY-MM-DD.",
                s
            ))
        }),
        None => Ok(Local::now().date_naive()),
    }
}

/// Handle the status command
pub fn handle_status_command(
    storage: &Storage,
    settings: &Settings,
    date: Option<String>,
) -> FinflowResult<()> {
    let today = parse_reference_date(date.as_deref())?;
    let service = ProfileService::new(storage);
    let result = service.allocation(today)?;

    print!(
        "{}",
        format_allocation(&result, today, &settings.currency_symbol)
    );
    Ok(())
}
