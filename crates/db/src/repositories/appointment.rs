use crate::models::{DbAppointment, DbCancelledAppointment};
use chrono::NaiveDate;
use clinicdesk_core::models::{
    appointment::{STATUS_BOOKED, STATUS_CANCELLED},
    holiday::ModuleType,
};
use eyre::Result;
use sqlx::{PgExecutor, Pool, Postgres};

/// Every appointment on `date` that has not been cancelled.
pub async fn active_on(pool: &Pool<Postgres>, date: NaiveDate) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, doctor_id, clinic_id, patient_id, appointment_start_date,
               appointment_start_time, status
        FROM appointments
        WHERE appointment_start_date = $1 AND status <> $2
        ORDER BY appointment_start_time ASC
        "#,
    )
    .bind(date)
    .bind(STATUS_CANCELLED)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Cancels the booked appointments of a doctor or clinic inside a date
/// range and returns what the patient notices need.
pub async fn cancel_in_range<'e, E>(
    executor: E,
    module_type: ModuleType,
    module_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<DbCancelledAppointment>>
where
    E: PgExecutor<'e>,
{
    let cancelled = sqlx::query_as::<_, DbCancelledAppointment>(
        r#"
        WITH cancelled AS (
            UPDATE appointments
            SET status = $5
            WHERE appointment_start_date >= $1
              AND appointment_start_date <= $2
              AND status = $6
              AND (CASE WHEN $3::TEXT = 'doctor' THEN doctor_id ELSE clinic_id END) = $4
            RETURNING id, doctor_id, clinic_id, patient_id,
                      appointment_start_date, appointment_start_time
        )
        SELECT c.id, c.appointment_start_date, c.appointment_start_time,
               p.email AS patient_email, p.display_name AS patient_name,
               d.display_name AS doctor_name, cl.name AS clinic_name
        FROM cancelled c
        LEFT JOIN users p ON p.id = c.patient_id
        LEFT JOIN users d ON d.id = c.doctor_id
        LEFT JOIN clinics cl ON cl.id = c.clinic_id
        ORDER BY c.appointment_start_date ASC, c.appointment_start_time ASC
        "#,
    )
    .bind(start_date)
    .bind(end_date)
    .bind(module_type.as_str())
    .bind(module_id)
    .bind(STATUS_CANCELLED)
    .bind(STATUS_BOOKED)
    .fetch_all(executor)
    .await?;

    Ok(cancelled)
}
