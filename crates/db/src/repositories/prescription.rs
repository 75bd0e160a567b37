use crate::models::DbPrescription;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn list_by_encounter(
    pool: &Pool<Postgres>,
    encounter_id: i64,
) -> Result<Vec<DbPrescription>> {
    let prescriptions = sqlx::query_as::<_, DbPrescription>(
        r#"
        SELECT id, encounter_id, patient_id, name, frequency, duration, instruction, added_by, created_at
        FROM prescriptions
        WHERE encounter_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(encounter_id)
    .fetch_all(pool)
    .await?;

    Ok(prescriptions)
}

pub async fn get_prescription_by_id(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<DbPrescription>> {
    let prescription = sqlx::query_as::<_, DbPrescription>(
        r#"
        SELECT id, encounter_id, patient_id, name, frequency, duration, instruction, added_by, created_at
        FROM prescriptions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(prescription)
}

/// Field values shared by prescription inserts and updates.
#[derive(Debug, Clone, Copy)]
pub struct PrescriptionFields<'a> {
    pub encounter_id: i64,
    pub patient_id: i64,
    pub name: &'a str,
    pub frequency: &'a str,
    pub duration: &'a str,
    pub instruction: Option<&'a str>,
}

pub async fn create_prescription(
    pool: &Pool<Postgres>,
    fields: PrescriptionFields<'_>,
    added_by: i64,
) -> Result<DbPrescription> {
    let prescription = sqlx::query_as::<_, DbPrescription>(
        r#"
        INSERT INTO prescriptions (encounter_id, patient_id, name, frequency, duration, instruction, added_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, encounter_id, patient_id, name, frequency, duration, instruction, added_by, created_at
        "#,
    )
    .bind(fields.encounter_id)
    .bind(fields.patient_id)
    .bind(fields.name)
    .bind(fields.frequency)
    .bind(fields.duration)
    .bind(fields.instruction)
    .bind(added_by)
    .fetch_one(pool)
    .await?;

    Ok(prescription)
}

pub async fn update_prescription(
    pool: &Pool<Postgres>,
    id: i64,
    fields: PrescriptionFields<'_>,
) -> Result<Option<DbPrescription>> {
    let prescription = sqlx::query_as::<_, DbPrescription>(
        r#"
        UPDATE prescriptions
        SET encounter_id = $2, patient_id = $3, name = $4, frequency = $5,
            duration = $6, instruction = $7
        WHERE id = $1
        RETURNING id, encounter_id, patient_id, name, frequency, duration, instruction, added_by, created_at
        "#,
    )
    .bind(id)
    .bind(fields.encounter_id)
    .bind(fields.patient_id)
    .bind(fields.name)
    .bind(fields.frequency)
    .bind(fields.duration)
    .bind(fields.instruction)
    .fetch_optional(pool)
    .await?;

    Ok(prescription)
}

pub async fn delete_prescription(pool: &Pool<Postgres>, id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM prescriptions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
