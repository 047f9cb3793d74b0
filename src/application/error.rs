// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Link returned in place of a share token whenever sharing fails.
pub const BLANK_LINK: &str = "about:blank";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Domain(DomainError::NotFound(_))
        )
    }

    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::Conflict(_) | Self::Domain(DomainError::Conflict(_))
        )
    }
}

/// A failed share. `link` is always [`BLANK_LINK`], never an empty string.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ShareFailure {
    pub link: &'static str,
    #[source]
    pub error: ApplicationError,
}

impl From<ApplicationError> for ShareFailure {
    fn from(error: ApplicationError) -> Self {
        Self {
            link: BLANK_LINK,
            error,
        }
    }
}

impl From<DomainError> for ShareFailure {
    fn from(error: DomainError) -> Self {
        ApplicationError::from(error).into()
    }
}
