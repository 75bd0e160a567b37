use async_trait::async_trait;
use chrono::{NaiveDate, Weekday};
use clinicdesk_core::{
    models::{
        appointment::Appointment,
        holiday::ClinicHoliday,
        session::{weekday_names, ClinicSession},
    },
    store::AvailabilityStore,
};
use eyre::Result;

use crate::{repositories, DbPool};

/// PostgreSQL-backed [`AvailabilityStore`].
#[derive(Debug, Clone)]
pub struct PgClinicStore {
    pool: DbPool,
}

impl PgClinicStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityStore for PgClinicStore {
    async fn sessions_for_day(
        &self,
        doctor_id: i64,
        clinic_id: i64,
        weekday: Weekday,
    ) -> Result<Vec<ClinicSession>> {
        let (day_short, day_full) = weekday_names(weekday);
        let rows =
            repositories::session::find_for_day(&self.pool, doctor_id, clinic_id, day_short, day_full)
                .await?;
        Ok(rows.into_iter().map(ClinicSession::from).collect())
    }

    async fn holidays_covering(&self, date: NaiveDate) -> Result<Vec<ClinicHoliday>> {
        repositories::holiday::covering(&self.pool, date)
            .await?
            .into_iter()
            .map(ClinicHoliday::try_from)
            .collect()
    }

    async fn active_appointments_on(&self, date: NaiveDate) -> Result<Vec<Appointment>> {
        let rows = repositories::appointment::active_on(&self.pool, date).await?;
        Ok(rows.into_iter().map(Appointment::from).collect())
    }
}
