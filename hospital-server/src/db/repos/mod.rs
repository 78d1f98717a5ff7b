//! Repository implementations for database access
//!
//! Each repository borrows the pool and owns the SQL for one table:
//! - Lists are ordered by id so HTML and JSON views agree
//! - Inserts use RETURNING to hand back the stored row
//! - Deletes report NotFound when no row matched

pub mod doctors;
pub mod patients;

pub use doctors::{Doctor, DoctorRepo, DoctorWithCount};
pub use patients::{Patient, PatientRepo};
