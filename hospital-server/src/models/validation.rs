//! Validation error types

use std::fmt;

/// Validation error for submitted form data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing or blank
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Field could not be read as the expected type
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Numeric field outside its accepted range
    OutOfRange { field: &'static str, min: i64, max: i64 },

    /// Field names a record that does not exist
    UnknownReference { field: &'static str, id: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
            Self::UnknownReference { field, id } => {
                write!(f, "{} with id {} does not exist", field, id)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim a required text field and check it against a character limit.
pub(crate) fn required_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(value.to_owned())
}
