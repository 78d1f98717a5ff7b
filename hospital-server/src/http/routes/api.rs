//! Read-only JSON endpoints
//!
//! Flat objects with exactly the documented fields, in the same order as
//! the HTML listings.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::{Doctor, DoctorRepo, Patient, PatientRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Patient response
#[derive(Debug, Serialize)]
pub struct PatientResponse {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub complaint: String,
}

impl From<Patient> for PatientResponse {
    fn from(p: Patient) -> Self {
        Self {
            id: p.id,
            name: p.name,
            age: p.age,
            complaint: p.complaint,
        }
    }
}

/// Doctor response
#[derive(Debug, Serialize)]
pub struct DoctorResponse {
    pub id: i64,
    pub name: String,
    pub specialty: String,
}

impl From<Doctor> for DoctorResponse {
    fn from(d: Doctor) -> Self {
        Self {
            id: d.id,
            name: d.name,
            specialty: d.specialty,
        }
    }
}

/// GET /api/patients
async fn list_patients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PatientResponse>>, ApiError> {
    let patients = PatientRepo::new(&state.pool).list().await?;
    Ok(Json(patients.into_iter().map(PatientResponse::from).collect()))
}

/// GET /api/doctors
async fn list_doctors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DoctorResponse>>, ApiError> {
    let doctors = DoctorRepo::new(&state.pool).list().await?;
    Ok(Json(doctors.into_iter().map(DoctorResponse::from).collect()))
}

/// API routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/patients", get(list_patients))
        .route("/api/doctors", get(list_doctors))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::models::{NewDoctor, NewPatient};
    use crate::test_support::{body_json, body_string, get, post_form, test_app};

    #[tokio::test]
    async fn empty_tables_are_empty_arrays() {
        let (_dir, _pool, app) = test_app().await;

        let response = app.clone().oneshot(get("/api/patients")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));

        let response = app.oneshot(get("/api/doctors")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn patients_have_exactly_documented_fields() {
        let (_dir, pool, app) = test_app().await;
        let doctor = DoctorRepo::new(&pool)
            .create(&NewDoctor::new("Dr. Selin", "Cardiology").unwrap())
            .await
            .unwrap();
        let doctor_id = doctor.id.to_string();
        let patient = PatientRepo::new(&pool)
            .create(&NewPatient::new("Ali", "42", "Chest pain", Some(doctor_id.as_str())).unwrap())
            .await
            .unwrap();

        let response = app.oneshot(get("/api/patients")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!([{ "id": patient.id, "name": "Ali", "age": 42, "complaint": "Chest pain" }])
        );
    }

    #[tokio::test]
    async fn doctors_have_exactly_documented_fields() {
        let (_dir, pool, app) = test_app().await;
        let doctor = DoctorRepo::new(&pool)
            .create(&NewDoctor::new("Dr. Selin", "Cardiology").unwrap())
            .await
            .unwrap();

        let response = app.oneshot(get("/api/doctors")).await.unwrap();
        assert_eq!(
            body_json(response).await,
            json!([{ "id": doctor.id, "name": "Dr. Selin", "specialty": "Cardiology" }])
        );
    }

    #[tokio::test]
    async fn order_matches_html_listing() {
        let (_dir, _pool, app) = test_app().await;

        for body in [
            "name=Zeynep&age=30&complaint=Fever",
            "name=Ahmet&age=55&complaint=Back+pain",
            "name=Merve&age=21&complaint=Rash",
        ] {
            let response = app.clone().oneshot(post_form("/patients/add", body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
        }

        let json = body_json(app.clone().oneshot(get("/api/patients")).await.unwrap()).await;
        let json_names: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(json_names, vec!["Zeynep", "Ahmet", "Merve"]);

        let html = body_string(app.oneshot(get("/patients")).await.unwrap()).await;
        let positions: Vec<_> = json_names
            .iter()
            .map(|name| html.find(&format!("<td>{}</td>", name)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn deleted_patient_leaves_json() {
        let (_dir, pool, app) = test_app().await;
        let patient = PatientRepo::new(&pool)
            .create(&NewPatient::new("Ali", "42", "Headache", None).unwrap())
            .await
            .unwrap();

        let uri = format!("/patients/{}/delete", patient.id);
        app.clone().oneshot(post_form(&uri, "")).await.unwrap();

        let response = app.oneshot(get("/api/patients")).await.unwrap();
        assert_eq!(body_json(response).await, json!([]));
    }
}
