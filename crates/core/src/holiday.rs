//! Leave/holiday rules that do not need the database.

use chrono::NaiveDate;

use crate::errors::{ClinicError, ClinicResult};
use crate::models::holiday::{HolidaySpan, ModuleType, HOLIDAY_ACTIVE};

/// Rejects ranges whose start falls after their end.
pub fn validate_range(start_date: NaiveDate, end_date: NaiveDate) -> ClinicResult<()> {
    if start_date > end_date {
        return Err(ClinicError::Validation(
            "Holiday start date must not be after its end date".to_string(),
        ));
    }
    Ok(())
}

/// Overlap rule for holiday submissions.
///
/// An existing row conflicts when its start or its end date lies inside the
/// new inclusive range. A new range lying strictly inside an existing one is
/// not detected.
pub fn endpoint_within(
    existing_start: NaiveDate,
    existing_end: NaiveDate,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> bool {
    let inside = |d: NaiveDate| start_date <= d && d <= end_date;
    inside(existing_start) || inside(existing_end)
}

/// Whether a new range `[start_date, end_date]` runs into one of `existing`.
///
/// Only active rows count, and the row with `exclude_id` (the one being
/// updated) is skipped.
pub fn overlaps(
    existing: &[HolidaySpan],
    start_date: NaiveDate,
    end_date: NaiveDate,
    exclude_id: Option<i64>,
) -> bool {
    existing
        .iter()
        .filter(|span| span.status == HOLIDAY_ACTIVE)
        .filter(|span| Some(span.id) != exclude_id)
        .any(|span| endpoint_within(span.start_date, span.end_date, start_date, end_date))
}

pub fn already_scheduled_message(module_type: ModuleType) -> String {
    format!("{} already has holiday scheduled.", module_type.label())
}

pub fn saved_message(module_type: ModuleType, updated: bool) -> String {
    if updated {
        format!("{} holiday schedule updated successfully.", module_type.label())
    } else {
        format!("{} holiday scheduled successfully.", module_type.label())
    }
}
