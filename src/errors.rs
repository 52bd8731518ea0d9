// Validation errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Fatal configuration errors raised while evaluating a rule set.
///
/// These are programmer errors (a typo in a rule token), not data
/// failures, so they abort the evaluation instead of being accumulated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("Invalid rule name: {0}")]
    UnknownRule(String),
}

pub type Result<T> = std::result::Result<T, RuleSetError>;

/// A single recorded validation failure.
///
/// One entry is produced per failing rule invocation, so a field can
/// contribute several entries to the same pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,

    /// Human-readable failure message
    pub error: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            error: error.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors from one evaluation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new validation errors collection
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get errors for a specific field
    pub fn field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Convert to the 400-class JSON error body the HTTP layer returns
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "message": "Invalid data",
            "errors": self.errors,
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}
