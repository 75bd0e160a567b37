use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

const TABLES: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            display_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "clinics",
        r#"
        CREATE TABLE IF NOT EXISTS clinics (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "clinic_sessions",
        r#"
        CREATE TABLE IF NOT EXISTS clinic_sessions (
            id BIGSERIAL PRIMARY KEY,
            clinic_id BIGINT NOT NULL REFERENCES clinics(id),
            doctor_id BIGINT NOT NULL REFERENCES users(id),
            day VARCHAR(16) NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            time_slot INTEGER NOT NULL,
            parent_id BIGINT NULL REFERENCES clinic_sessions(id) ON DELETE CASCADE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_time_slot CHECK (time_slot > 0)
        );
        "#,
    ),
    (
        "appointments",
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id BIGSERIAL PRIMARY KEY,
            doctor_id BIGINT NOT NULL REFERENCES users(id),
            clinic_id BIGINT NOT NULL REFERENCES clinics(id),
            patient_id BIGINT NOT NULL REFERENCES users(id),
            appointment_start_date DATE NOT NULL,
            appointment_start_time TIME NOT NULL,
            status INTEGER NOT NULL DEFAULT 1,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "clinic_schedules",
        r#"
        CREATE TABLE IF NOT EXISTS clinic_schedules (
            id BIGSERIAL PRIMARY KEY,
            module_type VARCHAR(16) NOT NULL,
            module_id BIGINT NOT NULL,
            start_date DATE NOT NULL,
            end_date DATE NOT NULL,
            description TEXT NULL,
            status INTEGER NOT NULL DEFAULT 1,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_module_type CHECK (module_type IN ('doctor', 'clinic')),
            CONSTRAINT valid_date_range CHECK (start_date <= end_date)
        );
        "#,
    ),
    (
        "patient_encounters",
        r#"
        CREATE TABLE IF NOT EXISTS patient_encounters (
            id BIGSERIAL PRIMARY KEY,
            patient_id BIGINT NOT NULL REFERENCES users(id),
            doctor_id BIGINT NOT NULL REFERENCES users(id),
            clinic_id BIGINT NOT NULL REFERENCES clinics(id),
            encounter_date DATE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "prescriptions",
        r#"
        CREATE TABLE IF NOT EXISTS prescriptions (
            id BIGSERIAL PRIMARY KEY,
            encounter_id BIGINT NOT NULL REFERENCES patient_encounters(id) ON DELETE CASCADE,
            patient_id BIGINT NOT NULL REFERENCES users(id),
            name VARCHAR(255) NOT NULL,
            frequency VARCHAR(255) NOT NULL,
            duration VARCHAR(255) NOT NULL,
            instruction TEXT NULL,
            added_by BIGINT NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_clinic_sessions_doctor_clinic ON clinic_sessions(doctor_id, clinic_id)",
    "CREATE INDEX IF NOT EXISTS idx_appointments_start_date ON appointments(appointment_start_date)",
    "CREATE INDEX IF NOT EXISTS idx_clinic_schedules_module ON clinic_schedules(module_type, module_id)",
    "CREATE INDEX IF NOT EXISTS idx_clinic_schedules_dates ON clinic_schedules(start_date, end_date)",
    "CREATE INDEX IF NOT EXISTS idx_prescriptions_encounter_id ON prescriptions(encounter_id)",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    for (table, statement) in TABLES {
        tracing::debug!("Creating table {}", table);
        sqlx::query(statement).execute(pool).await?;
    }

    for statement in INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
