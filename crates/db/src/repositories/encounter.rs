use crate::models::{DbEncounterContacts, DbPatientEncounter};
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_encounter_by_id(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<DbPatientEncounter>> {
    let encounter = sqlx::query_as::<_, DbPatientEncounter>(
        r#"
        SELECT id, patient_id, doctor_id, clinic_id, encounter_date
        FROM patient_encounters
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(encounter)
}

pub async fn get_encounter_contacts(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<DbEncounterContacts>> {
    let contacts = sqlx::query_as::<_, DbEncounterContacts>(
        r#"
        SELECT e.id AS encounter_id,
               p.email AS patient_email, p.display_name AS patient_name,
               d.display_name AS doctor_name, c.name AS clinic_name
        FROM patient_encounters e
        LEFT JOIN users p ON p.id = e.patient_id
        LEFT JOIN users d ON d.id = e.doctor_id
        LEFT JOIN clinics c ON c.id = e.clinic_id
        WHERE e.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(contacts)
}
