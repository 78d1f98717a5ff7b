//! Doctor input validation

use super::validation::{required_text, ValidationError};

/// Maximum length for a doctor name
pub const MAX_DOCTOR_NAME_LEN: usize = 100;

/// Maximum length for a specialty
pub const MAX_SPECIALTY_LEN: usize = 100;

/// A validated doctor ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctor {
    name: String,
    specialty: String,
}

impl NewDoctor {
    pub fn new(name: &str, specialty: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("name", name, MAX_DOCTOR_NAME_LEN)?,
            specialty: required_text("specialty", specialty, MAX_SPECIALTY_LEN)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }
}
