//! Database layer - connection pool, schema and repositories
//!
//! - Pool is created once at startup and handed to the HTTP layer in `AppState`
//! - Schema creation is an explicit, idempotent step
//! - One repository per table, borrowing the pool

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;

pub use error::DbError;
pub use pool::create_pool;
pub use repos::*;
pub use schema::ensure_schema;
