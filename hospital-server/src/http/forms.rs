//! Raw form submissions
//!
//! Every field is read as a string and defaults to empty when missing, so
//! a missing field surfaces as a validation error instead of an extractor
//! rejection. The raw values are kept for re-rendering the form.

use serde::Deserialize;

use crate::models::{NewDoctor, NewPatient, ValidationError};

/// POST /patients/add body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatientForm {
    pub name: String,
    pub age: String,
    pub complaint: String,
    /// Blank means unassigned
    pub doctor_id: String,
}

impl PatientForm {
    pub fn validate(&self) -> Result<NewPatient, ValidationError> {
        NewPatient::new(&self.name, &self.age, &self.complaint, Some(self.doctor_id.as_str()))
    }
}

/// POST /doctors/add body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DoctorForm {
    pub name: String,
    pub specialty: String,
}

impl DoctorForm {
    pub fn validate(&self) -> Result<NewDoctor, ValidationError> {
        NewDoctor::new(&self.name, &self.specialty)
    }
}
