//! Errors raised by the profile handlers.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ProfileId, ValidationError};
use crate::ports::RepositoryError;

/// Failure of a profile dispatch or form request.
///
/// No handler ever returns a partial result alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Repository unavailable: {0}")]
    RepositoryUnavailable(#[from] RepositoryError),

    #[error("Profile not found: {0}")]
    ProfileNotFound(ProfileId),

    #[error("Profile type not found: {0}")]
    ProfileTypeNotFound(String),
}

impl DispatchError {
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            Self::RepositoryUnavailable(_) => ErrorCode::RepositoryUnavailable,
            Self::ProfileNotFound(_) => ErrorCode::ProfileNotFound,
            Self::ProfileTypeNotFound(_) => ErrorCode::ProfileTypeNotFound,
        }
    }
}

impl From<ValidationError> for DispatchError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidArgument {
            field: err.field().to_string(),
            reason: err.to_string(),
        }
    }
}
