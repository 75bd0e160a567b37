use crate::models::DbClinicSession;
use chrono::NaiveTime;
use eyre::Result;
use sqlx::{PgExecutor, Pool, Postgres};

/// Sessions of a doctor at a clinic stored under either spelling of a day.
pub async fn find_for_day(
    pool: &Pool<Postgres>,
    doctor_id: i64,
    clinic_id: i64,
    day_short: &str,
    day_full: &str,
) -> Result<Vec<DbClinicSession>> {
    let sessions = sqlx::query_as::<_, DbClinicSession>(
        r#"
        SELECT id, clinic_id, doctor_id, day, start_time, end_time, time_slot, parent_id
        FROM clinic_sessions
        WHERE doctor_id = $1 AND clinic_id = $2 AND (day = $3 OR day = $4)
        ORDER BY id ASC
        "#,
    )
    .bind(doctor_id)
    .bind(clinic_id)
    .bind(day_short)
    .bind(day_full)
    .fetch_all(pool)
    .await?;

    Ok(sessions)
}

pub async fn list_for_doctor(
    pool: &Pool<Postgres>,
    doctor_id: i64,
    clinic_id: Option<i64>,
) -> Result<Vec<DbClinicSession>> {
    let sessions = sqlx::query_as::<_, DbClinicSession>(
        r#"
        SELECT id, clinic_id, doctor_id, day, start_time, end_time, time_slot, parent_id
        FROM clinic_sessions
        WHERE doctor_id = $1 AND ($2::BIGINT IS NULL OR clinic_id = $2)
        ORDER BY day ASC, start_time ASC
        "#,
    )
    .bind(doctor_id)
    .bind(clinic_id)
    .fetch_all(pool)
    .await?;

    Ok(sessions)
}

/// Every session row of a clinic, parents and split-shift children alike.
pub async fn list_for_clinic(pool: &Pool<Postgres>, clinic_id: i64) -> Result<Vec<DbClinicSession>> {
    let sessions = sqlx::query_as::<_, DbClinicSession>(
        r#"
        SELECT id, clinic_id, doctor_id, day, start_time, end_time, time_slot, parent_id
        FROM clinic_sessions
        WHERE clinic_id = $1
        ORDER BY doctor_id ASC, id ASC
        "#,
    )
    .bind(clinic_id)
    .fetch_all(pool)
    .await?;

    Ok(sessions)
}

/// Deletes a session; its split-shift child goes with it through the
/// `parent_id` cascade.
pub async fn delete_session(pool: &Pool<Postgres>, id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM clinic_sessions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

#[allow(clippy::too_many_arguments)]
pub async fn create_session<'e, E>(
    executor: E,
    clinic_id: i64,
    doctor_id: i64,
    day: &str,
    start_time: NaiveTime,
    end_time: NaiveTime,
    time_slot: i32,
    parent_id: Option<i64>,
) -> Result<DbClinicSession>
where
    E: PgExecutor<'e>,
{
    let session = sqlx::query_as::<_, DbClinicSession>(
        r#"
        INSERT INTO clinic_sessions (clinic_id, doctor_id, day, start_time, end_time, time_slot, parent_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, clinic_id, doctor_id, day, start_time, end_time, time_slot, parent_id
        "#,
    )
    .bind(clinic_id)
    .bind(doctor_id)
    .bind(day)
    .bind(start_time)
    .bind(end_time)
    .bind(time_slot)
    .bind(parent_id)
    .fetch_one(executor)
    .await?;

    Ok(session)
}
