//! HTTP server layer
//!
//! Axum server with:
//! - HTML pages for patients and doctors
//! - Read-only JSON endpoints under `/api`
//! - CORS (localhost only by default), request tracing, graceful shutdown

pub mod error;
pub mod forms;
pub mod routes;
pub mod server;
pub mod views;

pub use error::{ApiError, PageError};
pub use server::{build_router, run_server, AppState, ServerError};
