use thiserror::Error;

/// Precondition failures raised before any request is sent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("'{name}' must not be empty")]
    Empty { name: &'static str },

    #[error("'{name}' must not be less than one (got {value})")]
    LessThanOne { name: &'static str, value: u64 },

    #[error("'{name}' must not be negative (got {value})")]
    Negative { name: &'static str, value: i64 },
}

impl ArgumentError {
    pub fn empty(name: &'static str) -> Self {
        Self::Empty { name }
    }

    pub fn less_than_one(name: &'static str, value: impl Into<u64>) -> Self {
        Self::LessThanOne {
            name,
            value: value.into(),
        }
    }

    pub fn negative(name: &'static str, value: i64) -> Self {
        Self::Negative { name, value }
    }

    /// Name of the offending argument
    pub fn name(&self) -> &'static str {
        match self {
            ArgumentError::Empty { name }
            | ArgumentError::LessThanOne { name, .. }
            | ArgumentError::Negative { name, .. } => name,
        }
    }
}

/// Reject empty required string arguments
pub fn require_non_empty(name: &'static str, value: &str) -> Result<(), ArgumentError> {
    if value.is_empty() {
        Err(ArgumentError::empty(name))
    } else {
        Ok(())
    }
}
