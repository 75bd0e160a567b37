use async_trait::async_trait;
use chrono::{NaiveDate, Weekday};
use eyre::Result;

use crate::models::{appointment::Appointment, holiday::ClinicHoliday, session::ClinicSession};

/// Read access to the rows slot generation needs.
#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    /// Sessions of a doctor at a clinic whose day matches `weekday` in
    /// either its abbreviated or its full spelling.
    async fn sessions_for_day(
        &self,
        doctor_id: i64,
        clinic_id: i64,
        weekday: Weekday,
    ) -> Result<Vec<ClinicSession>>;

    /// Active holiday rows whose range covers `date`.
    async fn holidays_covering(&self, date: NaiveDate) -> Result<Vec<ClinicHoliday>>;

    /// All non-cancelled appointments starting on `date`, for every doctor
    /// and clinic.
    async fn active_appointments_on(&self, date: NaiveDate) -> Result<Vec<Appointment>>;
}
