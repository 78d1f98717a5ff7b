//! Patient input validation
//!
//! Form fields arrive as raw strings. Everything is checked here before
//! any storage call so a bad submission never reaches the database.

use super::validation::{required_text, ValidationError};

/// Maximum length for a patient name (matches the column width)
pub const MAX_PATIENT_NAME_LEN: usize = 100;

/// Maximum length for a complaint
pub const MAX_COMPLAINT_LEN: usize = 200;

/// Accepted age range in years
pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 150;

/// A validated patient ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    name: String,
    age: i64,
    complaint: String,
    doctor_id: Option<i64>,
}

impl NewPatient {
    /// Validate raw form input.
    ///
    /// `doctor_id` is optional; `None` or a blank string leaves the patient
    /// unassigned. Whether the doctor exists is checked by the caller, which
    /// has access to storage.
    ///
    /// # Example
    /// ```
    /// use hospital_server::models::NewPatient;
    ///
    /// assert!(NewPatient::new("Ali", "42", "headache", None).is_ok());
    /// assert!(NewPatient::new("Ali", "forty", "headache", None).is_err());
    /// ```
    pub fn new(
        name: &str,
        age: &str,
        complaint: &str,
        doctor_id: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let name = required_text("name", name, MAX_PATIENT_NAME_LEN)?;
        let age = parse_age(age)?;
        let complaint = required_text("complaint", complaint, MAX_COMPLAINT_LEN)?;
        let doctor_id = parse_doctor_id(doctor_id)?;

        Ok(Self {
            name,
            age,
            complaint,
            doctor_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn complaint(&self) -> &str {
        &self.complaint
    }

    pub fn doctor_id(&self) -> Option<i64> {
        self.doctor_id
    }
}

fn parse_age(raw: &str) -> Result<i64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Empty { field: "age" });
    }

    let age: i64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "age",
        reason: "must be a whole number",
    })?;

    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age",
            min: MIN_AGE,
            max: MAX_AGE,
        });
    }

    Ok(age)
}

fn parse_doctor_id(raw: Option<&str>) -> Result<Option<i64>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "doctor",
                reason: "must be a doctor id",
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_patient() {
        let patient = NewPatient::new(" Ali Veli ", " 42 ", "headache", Some("")).unwrap();
        assert_eq!(patient.name(), "Ali Veli");
        assert_eq!(patient.age(), 42);
        assert_eq!(patient.complaint(), "headache");
        assert_eq!(patient.doctor_id(), None);
    }

    #[test]
    fn assigned_doctor() {
        let patient = NewPatient::new("Ali", "42", "headache", Some("7")).unwrap();
        assert_eq!(patient.doctor_id(), Some(7));
    }

    #[test]
    fn rejects_non_numeric_age() {
        let err = NewPatient::new("Ali", "forty", "headache", None).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "age", .. }));
    }

    #[test]
    fn rejects_fractional_age() {
        let err = NewPatient::new("Ali", "4.5", "headache", None).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "age", .. }));
    }

    #[test]
    fn rejects_age_out_of_range() {
        let err = NewPatient::new("Ali", "-1", "headache", None).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "age", .. }));

        let err = NewPatient::new("Ali", "151", "headache", None).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "age", .. }));

        assert!(NewPatient::new("Newborn", "0", "jaundice", None).is_ok());
        assert!(NewPatient::new("Elder", "150", "fatigue", None).is_ok());
    }

    #[test]
    fn rejects_missing_fields() {
        let err = NewPatient::new("", "42", "headache", None).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });

        let err = NewPatient::new("Ali", "", "headache", None).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "age" });

        let err = NewPatient::new("Ali", "42", "  ", None).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "complaint" });
    }

    #[test]
    fn rejects_long_complaint() {
        let complaint = "x".repeat(MAX_COMPLAINT_LEN + 1);
        let err = NewPatient::new("Ali", "42", &complaint, None).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { field: "complaint", .. }));
    }

    #[test]
    fn rejects_malformed_doctor_id() {
        let err = NewPatient::new("Ali", "42", "headache", Some("dr-house")).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "doctor", .. }));
    }
}
