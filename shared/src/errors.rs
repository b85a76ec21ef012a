//! Error types for the health metrics calculator

use crate::validation::get_field_display_label;
use thiserror::Error;

/// Input validation failures raised before any calculation runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be greater than 0, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("invalid {field} '{value}', must be one of: {}", .allowed.join(", "))]
    InvalidChoice {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
}

impl ValidationError {
    /// Key of the input field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NotPositive { field, .. }
            | ValidationError::NotFinite { field }
            | ValidationError::InvalidChoice { field, .. } => *field,
        }
    }

    /// Accepted values, for enumerated fields only
    pub fn allowed(&self) -> Option<&'static [&'static str]> {
        match self {
            ValidationError::InvalidChoice { allowed, .. } => Some(*allowed),
            _ => None,
        }
    }

    /// Format as user-friendly error message, naming the field by its label
    pub fn user_message(&self) -> String {
        let label = get_field_display_label(self.field());
        match self {
            ValidationError::NotPositive { value, .. } => {
                format!("{} must be greater than 0, got {}", label, value)
            }
            ValidationError::NotFinite { .. } => format!("{} must be a finite number", label),
            ValidationError::InvalidChoice { .. } => format!("{}: {}", label, self),
        }
    }
}
