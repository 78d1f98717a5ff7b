//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not a storage failure.

pub mod doctor;
pub mod patient;
pub mod validation;

pub use doctor::NewDoctor;
pub use patient::NewPatient;
pub use validation::ValidationError;
