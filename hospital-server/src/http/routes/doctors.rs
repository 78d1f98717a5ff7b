//! Doctor pages
//!
//! Doctors can be listed, viewed and added. There is no edit or delete route.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};

use crate::db::{DoctorRepo, PatientRepo};
use crate::http::error::PageError;
use crate::http::forms::DoctorForm;
use crate::http::server::AppState;
use crate::http::views;

/// GET /doctors - list doctors with their patient counts
async fn list_doctors(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let doctors = DoctorRepo::new(&state.pool).list_with_counts().await?;
    Ok(Html(views::doctors(&doctors)))
}

/// GET /doctors/{id} - one doctor with their assigned patients, or 404
async fn show_doctor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let doctor = DoctorRepo::new(&state.pool).get(id).await?;
    let patients = PatientRepo::new(&state.pool).list_for_doctor(id).await?;

    Ok(Html(views::doctor_detail(&doctor, &patients)))
}

/// GET /doctors/add
async fn new_doctor() -> Html<String> {
    Html(views::doctor_form(&DoctorForm::default(), None))
}

/// POST /doctors/add - validate, insert, redirect to the list
async fn create_doctor(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DoctorForm>,
) -> Result<Response, PageError> {
    let doctor = match form.validate() {
        Ok(doctor) => doctor,
        Err(err) => {
            tracing::debug!(error = %err, "Rejected doctor form");
            let html = views::doctor_form(&form, Some(&err));
            return Ok((StatusCode::BAD_REQUEST, Html(html)).into_response());
        }
    };

    let created = DoctorRepo::new(&state.pool).create(&doctor).await?;
    tracing::info!(id = created.id, "Created doctor");

    Ok(Redirect::to("/doctors").into_response())
}

/// Doctor routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/doctors", get(list_doctors))
        .route("/doctors/add", get(new_doctor).post(create_doctor))
        .route("/doctors/{id}", get(show_doctor))
}
