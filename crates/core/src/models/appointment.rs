use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub const STATUS_CANCELLED: i32 = 0;
pub const STATUS_BOOKED: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub doctor_id: i64,
    pub clinic_id: i64,
    pub patient_id: i64,
    pub appointment_start_date: NaiveDate,
    pub appointment_start_time: NaiveTime,
    pub status: i32,
}

impl Appointment {
    pub fn is_active(&self) -> bool {
        self.status != STATUS_CANCELLED
    }
}

/// Appointment cancelled by a holiday, with the names its notice needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelledAppointment {
    pub id: i64,
    pub appointment_start_date: NaiveDate,
    pub appointment_start_time: NaiveTime,
    pub patient_email: Option<String>,
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    pub clinic_name: Option<String>,
}
