use async_trait::async_trait;
use chrono::{NaiveDate, Weekday};
use mockall::mock;

use crate::models::{appointment::Appointment, holiday::ClinicHoliday, session::ClinicSession};
use crate::notify::{NotificationPayload, Notifier};
use crate::store::AvailabilityStore;

// Mock collaborators for testing
mock! {
    pub ClinicStore {}

    #[async_trait]
    impl AvailabilityStore for ClinicStore {
        async fn sessions_for_day(
            &self,
            doctor_id: i64,
            clinic_id: i64,
            weekday: Weekday,
        ) -> eyre::Result<Vec<ClinicSession>>;

        async fn holidays_covering(&self, date: NaiveDate) -> eyre::Result<Vec<ClinicHoliday>>;

        async fn active_appointments_on(&self, date: NaiveDate) -> eyre::Result<Vec<Appointment>>;
    }
}

mock! {
    pub NotificationSender {}

    #[async_trait]
    impl Notifier for NotificationSender {
        async fn send(&self, payload: NotificationPayload) -> eyre::Result<bool>;
    }
}
