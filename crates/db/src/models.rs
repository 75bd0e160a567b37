use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clinicdesk_core::models::{
    appointment::{Appointment, CancelledAppointment},
    holiday::{ClinicHoliday, HolidayListItem, HolidaySpan, ModuleType},
    prescription::{PatientEncounter, Prescription},
    session::ClinicSession,
};
use eyre::Report;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClinicSession {
    pub id: i64,
    pub clinic_id: i64,
    pub doctor_id: i64,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub time_slot: i32,
    pub parent_id: Option<i64>,
}

impl From<DbClinicSession> for ClinicSession {
    fn from(row: DbClinicSession) -> Self {
        Self {
            id: row.id,
            clinic_id: row.clinic_id,
            doctor_id: row.doctor_id,
            day: row.day,
            start_time: row.start_time,
            end_time: row.end_time,
            time_slot: row.time_slot,
            parent_id: row.parent_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: i64,
    pub doctor_id: i64,
    pub clinic_id: i64,
    pub patient_id: i64,
    pub appointment_start_date: NaiveDate,
    pub appointment_start_time: NaiveTime,
    pub status: i32,
}

impl From<DbAppointment> for Appointment {
    fn from(row: DbAppointment) -> Self {
        Self {
            id: row.id,
            doctor_id: row.doctor_id,
            clinic_id: row.clinic_id,
            patient_id: row.patient_id,
            appointment_start_date: row.appointment_start_date,
            appointment_start_time: row.appointment_start_time,
            status: row.status,
        }
    }
}

/// Appointment cancelled by a holiday, with the names its notice needs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCancelledAppointment {
    pub id: i64,
    pub appointment_start_date: NaiveDate,
    pub appointment_start_time: NaiveTime,
    pub patient_email: Option<String>,
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    pub clinic_name: Option<String>,
}

impl From<DbCancelledAppointment> for CancelledAppointment {
    fn from(row: DbCancelledAppointment) -> Self {
        Self {
            id: row.id,
            appointment_start_date: row.appointment_start_date,
            appointment_start_time: row.appointment_start_time,
            patient_email: row.patient_email,
            patient_name: row.patient_name,
            doctor_name: row.doctor_name,
            clinic_name: row.clinic_name,
        }
    }
}

/// Dates and state of one holiday row, as the overlap check reads them.
#[derive(Debug, Clone, FromRow)]
pub struct DbHolidaySpan {
    pub id: i64,
    pub status: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<DbHolidaySpan> for HolidaySpan {
    fn from(row: DbHolidaySpan) -> Self {
        Self {
            id: row.id,
            status: row.status,
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClinicHoliday {
    pub id: i64,
    pub module_type: String,
    pub module_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
    pub status: i32,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbClinicHoliday> for ClinicHoliday {
    type Error = Report;

    fn try_from(row: DbClinicHoliday) -> Result<Self, Self::Error> {
        let module_type: ModuleType = row.module_type.parse().map_err(Report::new)?;
        Ok(Self {
            id: row.id,
            module_type,
            module_id: row.module_id,
            start_date: row.start_date,
            end_date: row.end_date,
            description: row.description,
            status: row.status,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbHolidayListing {
    pub id: i64,
    pub module_type: String,
    pub module_id: i64,
    pub name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
    pub status: i32,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbHolidayListing> for HolidayListItem {
    type Error = Report;

    fn try_from(row: DbHolidayListing) -> Result<Self, Self::Error> {
        let module_type: ModuleType = row.module_type.parse().map_err(Report::new)?;
        Ok(Self {
            id: row.id,
            module_type,
            module_id: row.module_id,
            name: row.name.unwrap_or_default(),
            start_date: row.start_date,
            end_date: row.end_date,
            description: row.description,
            status: row.status,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPatientEncounter {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub clinic_id: i64,
    pub encounter_date: NaiveDate,
}

impl From<DbPatientEncounter> for PatientEncounter {
    fn from(row: DbPatientEncounter) -> Self {
        Self {
            id: row.id,
            patient_id: row.patient_id,
            doctor_id: row.doctor_id,
            clinic_id: row.clinic_id,
            encounter_date: row.encounter_date,
        }
    }
}

/// Names and addresses around an encounter, used for patient mail.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEncounterContacts {
    pub encounter_id: i64,
    pub patient_email: Option<String>,
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    pub clinic_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPrescription {
    pub id: i64,
    pub encounter_id: i64,
    pub patient_id: i64,
    pub name: String,
    pub frequency: String,
    pub duration: String,
    pub instruction: Option<String>,
    pub added_by: i64,
    pub created_at: DateTime<Utc>,
}

impl From<DbPrescription> for Prescription {
    fn from(row: DbPrescription) -> Self {
        Self {
            id: row.id,
            encounter_id: row.encounter_id,
            patient_id: row.patient_id,
            name: row.name,
            frequency: row.frequency,
            duration: row.duration,
            instruction: row.instruction,
            added_by: row.added_by,
            created_at: row.created_at,
        }
    }
}
