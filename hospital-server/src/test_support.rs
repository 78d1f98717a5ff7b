//! Shared fixtures for unit tests

use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use sqlx::SqlitePool;
use tempfile::TempDir;

use crate::config::ServerConfig;
use crate::db::{create_pool, ensure_schema, Patient};
use crate::http::{build_router, AppState};

/// Fresh database file with the schema applied.
///
/// The `TempDir` must outlive the pool.
pub async fn temp_pool() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("hastane.db").display());
    let pool = create_pool(&url).await.expect("pool creation failed");
    ensure_schema(&pool).await.expect("schema creation failed");
    (dir, pool)
}

/// Full router over a fresh database. The pool is returned for assertions.
pub async fn test_app() -> (TempDir, SqlitePool, Router) {
    let (dir, pool) = temp_pool().await;
    let app = build_router(AppState::new(pool.clone()), &ServerConfig::default());
    (dir, pool, app)
}

pub async fn patient_count(pool: &SqlitePool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM patient")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

pub async fn find_patient(pool: &SqlitePool, id: i64) -> Option<Patient> {
    sqlx::query_as("SELECT id, name, age, complaint, doctor_id FROM patient WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// POST an `application/x-www-form-urlencoded` body.
pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
