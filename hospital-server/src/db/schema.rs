//! Schema creation
//!
//! There is no migration history: tables are created if absent, once,
//! during process initialization.

use sqlx::SqlitePool;

use super::DbError;

const CREATE_DOCTOR: &str = r#"
    CREATE TABLE IF NOT EXISTS doctor (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        specialty TEXT NOT NULL
    )
"#;

// Removing a doctor unassigns their patients rather than deleting them.
const CREATE_PATIENT: &str = r#"
    CREATE TABLE IF NOT EXISTS patient (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        age INTEGER NOT NULL,
        complaint TEXT NOT NULL,
        doctor_id INTEGER NULL REFERENCES doctor(id) ON DELETE SET NULL
    )
"#;

const CREATE_PATIENT_DOCTOR_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_patient_doctor_id ON patient(doctor_id)";

/// Create the `doctor` and `patient` tables if they do not exist.
///
/// Safe to call on every start.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::info!("Ensuring database schema");

    sqlx::query(CREATE_DOCTOR).execute(pool).await?;
    sqlx::query(CREATE_PATIENT).execute(pool).await?;
    sqlx::query(CREATE_PATIENT_DOCTOR_INDEX).execute(pool).await?;

    Ok(())
}
