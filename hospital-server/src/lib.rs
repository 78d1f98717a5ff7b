//! hospital-server: patient and doctor records over HTTP
//!
//! Server-rendered HTML pages for listing, adding and deleting records,
//! plus read-only JSON endpoints, backed by a single SQLite file.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, ServerConfig};
pub use http::{build_router, run_server, AppState};
