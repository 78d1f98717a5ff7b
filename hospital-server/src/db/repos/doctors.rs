//! Doctor repository
//!
//! Doctors are append-only: there is no update or delete here.

use sqlx::{FromRow, SqlitePool};

use crate::db::DbError;
use crate::models::NewDoctor;

/// Doctor record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
}

/// Doctor with assigned patient count for list display
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DoctorWithCount {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub patient_count: i64,
}

/// Doctor repository
pub struct DoctorRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DoctorRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all doctors in insertion order.
    pub async fn list(&self) -> Result<Vec<Doctor>, DbError> {
        let doctors = sqlx::query_as("SELECT id, name, specialty FROM doctor ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(doctors)
    }

    /// List doctors with the number of patients assigned to each.
    ///
    /// LEFT JOIN keeps doctors with no patients.
    pub async fn list_with_counts(&self) -> Result<Vec<DoctorWithCount>, DbError> {
        let doctors = sqlx::query_as(
            r#"
            SELECT d.id, d.name, d.specialty, COUNT(p.id) AS patient_count
            FROM doctor d
            LEFT JOIN patient p ON p.doctor_id = d.id
            GROUP BY d.id, d.name, d.specialty
            ORDER BY d.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(doctors)
    }

    /// Get a single doctor by id.
    pub async fn get(&self, id: i64) -> Result<Doctor, DbError> {
        sqlx::query_as("SELECT id, name, specialty FROM doctor WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "doctor",
                id: id.to_string(),
            })
    }

    pub async fn exists(&self, id: i64) -> Result<bool, DbError> {
        let (exists,): (i64,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM doctor WHERE id = ?)")
            .bind(id)
            .fetch_one(self.pool)
            .await?;

        Ok(exists != 0)
    }

    /// Insert a validated doctor and return the stored row.
    pub async fn create(&self, doctor: &NewDoctor) -> Result<Doctor, DbError> {
        let created: Doctor = sqlx::query_as(
            r#"
            INSERT INTO doctor (name, specialty)
            VALUES (?, ?)
            RETURNING id, name, specialty
            "#,
        )
        .bind(doctor.name())
        .bind(doctor.specialty())
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::PatientRepo;
    use crate::models::NewPatient;
    use crate::test_support::temp_pool;

    fn doctor(name: &str, specialty: &str) -> NewDoctor {
        NewDoctor::new(name, specialty).unwrap()
    }

    #[tokio::test]
    async fn create_then_get() {
        let (_dir, pool) = temp_pool().await;
        let repo = DoctorRepo::new(&pool);

        let created = repo.create(&doctor("Dr. Selin", "Cardiology")).await.unwrap();
        assert_eq!(repo.get(created.id).await.unwrap(), created);
        assert!(repo.exists(created.id).await.unwrap());
        assert!(!repo.exists(created.id + 1).await.unwrap());
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let (_dir, pool) = temp_pool().await;
        let err = DoctorRepo::new(&pool).get(1).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "doctor", .. }));
    }

    #[tokio::test]
    async fn list_in_insertion_order() {
        let (_dir, pool) = temp_pool().await;
        let repo = DoctorRepo::new(&pool);

        repo.create(&doctor("Dr. Selin", "Cardiology")).await.unwrap();
        repo.create(&doctor("Dr. Can", "Neurology")).await.unwrap();

        let names: Vec<_> = repo.list().await.unwrap().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Dr. Selin", "Dr. Can"]);
    }

    #[tokio::test]
    async fn counts_include_doctors_without_patients() {
        let (_dir, pool) = temp_pool().await;
        let repo = DoctorRepo::new(&pool);
        let busy = repo.create(&doctor("Dr. Selin", "Cardiology")).await.unwrap();
        let idle = repo.create(&doctor("Dr. Can", "Neurology")).await.unwrap();

        let patients = PatientRepo::new(&pool);
        let busy_id = busy.id.to_string();
        for name in ["Ali", "Veli"] {
            patients
                .create(&NewPatient::new(name, "40", "palpitations", Some(busy_id.as_str())).unwrap())
                .await
                .unwrap();
        }

        let counts = repo.list_with_counts().await.unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!((counts[0].id, counts[0].patient_count), (busy.id, 2));
        assert_eq!((counts[1].id, counts[1].patient_count), (idle.id, 0));
    }
}
