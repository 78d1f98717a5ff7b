//! Patient pages

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};

use crate::db::{DoctorRepo, PatientRepo};
use crate::http::error::{ApiError, PageError};
use crate::http::forms::PatientForm;
use crate::http::server::AppState;
use crate::http::views;
use crate::models::{NewPatient, ValidationError};

/// GET /patients - list all patients
async fn list_patients(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let patients = PatientRepo::new(&state.pool).list().await?;
    let doctors = DoctorRepo::new(&state.pool).list().await?;

    Ok(Html(views::patients(&patients, &doctors)))
}

/// GET /patients/add - empty creation form
async fn new_patient(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let doctors = DoctorRepo::new(&state.pool).list().await?;
    Ok(Html(views::patient_form(&doctors, &PatientForm::default(), None)))
}

/// POST /patients/add - validate, insert, redirect to the list
///
/// Invalid input re-renders the form with a 400 and creates nothing.
async fn create_patient(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PatientForm>,
) -> Result<Response, PageError> {
    let doctors = DoctorRepo::new(&state.pool);

    let patient = match validate(&form, &doctors).await {
        Ok(patient) => patient,
        Err(ApiError::Validation(err)) => {
            tracing::debug!(error = %err, "Rejected patient form");
            let list = doctors.list().await?;
            let html = views::patient_form(&list, &form, Some(&err));
            return Ok((StatusCode::BAD_REQUEST, Html(html)).into_response());
        }
        Err(other) => return Err(other.into()),
    };

    let created = PatientRepo::new(&state.pool).create(&patient).await?;
    tracing::info!(id = created.id, "Created patient");

    Ok(Redirect::to("/patients").into_response())
}

/// Field validation plus the doctor existence check, which needs storage.
async fn validate(form: &PatientForm, doctors: &DoctorRepo<'_>) -> Result<NewPatient, ApiError> {
    let patient = form.validate()?;

    if let Some(id) = patient.doctor_id() {
        if !doctors.exists(id).await? {
            return Err(ValidationError::UnknownReference { field: "doctor", id }.into());
        }
    }

    Ok(patient)
}

/// POST /patients/{id}/delete - delete by id or 404
async fn delete_patient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Redirect, PageError> {
    PatientRepo::new(&state.pool).delete(id).await?;
    tracing::info!(id, "Deleted patient");

    Ok(Redirect::to("/patients"))
}

/// Patient routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/patients", get(list_patients))
        .route("/patients/add", get(new_patient).post(create_patient))
        .route("/patients/{id}/delete", post(delete_patient))
}
