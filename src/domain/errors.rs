// src/domain/errors.rs
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// A single failed input rule, e.g. `title` failing `max` with parameter `256`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: &'static str,
    pub param: Option<String>,
}

impl FieldViolation {
    pub fn new(field: &'static str, rule: &'static str) -> Self {
        Self {
            field,
            rule,
            param: None,
        }
    }

    pub fn with_param(mut self, param: impl ToString) -> Self {
        self.param = Some(param.to_string());
        self
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Some(param) => write!(f, "field '{}' failed rule '{}={}'", self.field, self.rule, param),
            None => write!(f, "field '{}' failed rule '{}'", self.field, self.rule),
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(FieldViolation),
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("unprocessable url: {}", .0.join(", "))]
    UnprocessableUrl(Vec<String>),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl From<FieldViolation> for DomainError {
    fn from(value: FieldViolation) -> Self {
        Self::Validation(value)
    }
}
