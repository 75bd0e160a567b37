use crate::models::{DbClinicHoliday, DbHolidayListing, DbHolidaySpan};
use chrono::NaiveDate;
use clinicdesk_core::{
    holiday::overlaps,
    models::holiday::{HolidaySpan, ModuleType, HOLIDAY_ACTIVE},
};
use eyre::Result;
use sqlx::{PgExecutor, Pool, Postgres};

/// Active holiday rows whose range includes `date`.
pub async fn covering(pool: &Pool<Postgres>, date: NaiveDate) -> Result<Vec<DbClinicHoliday>> {
    let holidays = sqlx::query_as::<_, DbClinicHoliday>(
        r#"
        SELECT id, module_type, module_id, start_date, end_date, description, status, created_at
        FROM clinic_schedules
        WHERE start_date <= $1 AND end_date >= $1 AND status = $2
        "#,
    )
    .bind(date)
    .bind(HOLIDAY_ACTIVE)
    .fetch_all(pool)
    .await?;

    Ok(holidays)
}

/// Whether another active holiday of the same doctor or clinic has a start
/// or end date inside `[start_date, end_date]`.
///
/// `exclude_id` skips the row being updated.
pub async fn has_overlap<'e, E>(
    executor: E,
    module_type: ModuleType,
    module_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    exclude_id: Option<i64>,
) -> Result<bool>
where
    E: PgExecutor<'e>,
{
    let spans = sqlx::query_as::<_, DbHolidaySpan>(
        r#"
        SELECT id, status, start_date, end_date
        FROM clinic_schedules
        WHERE module_type = $1 AND module_id = $2
        "#,
    )
    .bind(module_type.as_str())
    .bind(module_id)
    .fetch_all(executor)
    .await?
    .into_iter()
    .map(HolidaySpan::from)
    .collect::<Vec<_>>();

    Ok(overlaps(&spans, start_date, end_date, exclude_id))
}

pub async fn create_holiday<'e, E>(
    executor: E,
    module_type: ModuleType,
    module_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    description: Option<&str>,
) -> Result<DbClinicHoliday>
where
    E: PgExecutor<'e>,
{
    let holiday = sqlx::query_as::<_, DbClinicHoliday>(
        r#"
        INSERT INTO clinic_schedules (module_type, module_id, start_date, end_date, description, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, module_type, module_id, start_date, end_date, description, status, created_at
        "#,
    )
    .bind(module_type.as_str())
    .bind(module_id)
    .bind(start_date)
    .bind(end_date)
    .bind(description)
    .bind(HOLIDAY_ACTIVE)
    .fetch_one(executor)
    .await?;

    Ok(holiday)
}

pub async fn update_holiday<'e, E>(
    executor: E,
    id: i64,
    module_type: ModuleType,
    module_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    description: Option<&str>,
) -> Result<Option<DbClinicHoliday>>
where
    E: PgExecutor<'e>,
{
    let holiday = sqlx::query_as::<_, DbClinicHoliday>(
        r#"
        UPDATE clinic_schedules
        SET module_type = $2, module_id = $3, start_date = $4, end_date = $5,
            description = $6, status = $7
        WHERE id = $1
        RETURNING id, module_type, module_id, start_date, end_date, description, status, created_at
        "#,
    )
    .bind(id)
    .bind(module_type.as_str())
    .bind(module_id)
    .bind(start_date)
    .bind(end_date)
    .bind(description)
    .bind(HOLIDAY_ACTIVE)
    .fetch_optional(executor)
    .await?;

    Ok(holiday)
}

pub async fn get_holiday_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<DbClinicHoliday>> {
    tracing::debug!("Getting holiday by id: {}", id);

    let holiday = sqlx::query_as::<_, DbClinicHoliday>(
        r#"
        SELECT id, module_type, module_id, start_date, end_date, description, status, created_at
        FROM clinic_schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(holiday)
}

pub async fn delete_holiday(pool: &Pool<Postgres>, id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM clinic_schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Newest-first page of holidays with the doctor or clinic name resolved.
///
/// With `doctor_id` set only that doctor's own rows are returned.
pub async fn list_holidays(
    pool: &Pool<Postgres>,
    doctor_id: Option<i64>,
    limit: i64,
    offset: i64,
) -> Result<Vec<DbHolidayListing>> {
    let holidays = sqlx::query_as::<_, DbHolidayListing>(
        r#"
        SELECT s.id, s.module_type, s.module_id,
               CASE WHEN s.module_type = 'doctor' THEN u.display_name ELSE c.name END AS name,
               s.start_date, s.end_date, s.description, s.status, s.created_at
        FROM clinic_schedules s
        LEFT JOIN users u ON s.module_type = 'doctor' AND u.id = s.module_id
        LEFT JOIN clinics c ON s.module_type = 'clinic' AND c.id = s.module_id
        WHERE $1::BIGINT IS NULL OR (s.module_type = 'doctor' AND s.module_id = $1)
        ORDER BY s.id DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(doctor_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(holidays)
}

pub async fn count_holidays(pool: &Pool<Postgres>, doctor_id: Option<i64>) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM clinic_schedules
        WHERE $1::BIGINT IS NULL OR (module_type = 'doctor' AND module_id = $1)
        "#,
    )
    .bind(doctor_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}
