//! Patient repository

use sqlx::{FromRow, SqlitePool};

use crate::db::DbError;
use crate::models::NewPatient;

/// Patient record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub complaint: String,
    pub doctor_id: Option<i64>,
}

/// Patient repository
pub struct PatientRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PatientRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all patients in insertion order.
    pub async fn list(&self) -> Result<Vec<Patient>, DbError> {
        let patients = sqlx::query_as(
            "SELECT id, name, age, complaint, doctor_id FROM patient ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(patients)
    }

    /// Patients assigned to one doctor, for the doctor's detail page.
    pub async fn list_for_doctor(&self, doctor_id: i64) -> Result<Vec<Patient>, DbError> {
        let patients = sqlx::query_as(
            r#"
            SELECT id, name, age, complaint, doctor_id
            FROM patient
            WHERE doctor_id = ?
            ORDER BY id
            "#,
        )
        .bind(doctor_id)
        .fetch_all(self.pool)
        .await?;

        Ok(patients)
    }

    /// Insert a validated patient and return the stored row.
    pub async fn create(&self, patient: &NewPatient) -> Result<Patient, DbError> {
        let created: Patient = sqlx::query_as(
            r#"
            INSERT INTO patient (name, age, complaint, doctor_id)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, age, complaint, doctor_id
            "#,
        )
        .bind(patient.name())
        .bind(patient.age())
        .bind(patient.complaint())
        .bind(patient.doctor_id())
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// Delete a patient by id.
    ///
    /// Single statement; no check-then-delete.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM patient WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "patient",
                id: id.to_string(),
            });
        }

        Ok(())
    }
}
