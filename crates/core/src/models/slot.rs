use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bookable time window, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// `hh:mm AM` in the clinic's local time.
    pub time: String,
    pub available: bool,
}

/// Query parameters of the slot endpoint.
///
/// `date`, `doctor_id` and `clinic_id` are required for any slot to be
/// produced; when one is missing the result is simply empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotQuery {
    pub date: Option<NaiveDate>,
    pub doctor_id: Option<i64>,
    pub clinic_id: Option<i64>,
    pub appointment_id: Option<i64>,
    #[serde(default)]
    pub only_available: bool,
}
