use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ClinicError;

/// Whose leave a holiday row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    Doctor,
    Clinic,
}

impl ModuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleType::Doctor => "doctor",
            ModuleType::Clinic => "clinic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModuleType::Doctor => "Doctor",
            ModuleType::Clinic => "Clinic",
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleType {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "doctor" => Ok(ModuleType::Doctor),
            "clinic" => Ok(ModuleType::Clinic),
            other => Err(ClinicError::Validation(format!(
                "Unknown module type: {}",
                other
            ))),
        }
    }
}

pub const HOLIDAY_ACTIVE: i32 = 1;

/// A closed date range for a doctor or a whole clinic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicHoliday {
    pub id: i64,
    pub module_type: ModuleType,
    pub module_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
    pub status: i32,
}

impl ClinicHoliday {
    /// Whether this row closes the given doctor or clinic.
    pub fn applies_to(&self, doctor_id: i64, clinic_id: i64) -> bool {
        match self.module_type {
            ModuleType::Clinic => self.module_id == clinic_id,
            ModuleType::Doctor => self.module_id == doctor_id,
        }
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Id, state and range of an existing holiday row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidaySpan {
    pub id: i64,
    pub status: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveHolidayRequest {
    pub id: Option<i64>,
    pub module_type: ModuleType,
    pub module_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Holiday row as shown in listings, with the doctor or clinic name resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayListItem {
    pub id: i64,
    pub module_type: ModuleType,
    pub module_id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
    pub status: i32,
    pub created_at: DateTime<Utc>,
}
