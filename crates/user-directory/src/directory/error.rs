//! Error types for the user directory.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during directory operations.
///
/// Lookups never fail with a domain error: a missing user is `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// A user with the same username is already stored.
    #[error("User with provided username already exists: {username}")]
    Conflict { username: String },

    /// The candidate was rejected before the directory looked at stored users.
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The directory actor is no longer running.
    #[error("User directory unavailable: {0}")]
    Unavailable(String),

    /// A fault inside the directory that the caller cannot fix by changing the request.
    #[error("Internal directory error: {0}")]
    Internal(String),
}

impl DirectoryError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

impl From<FrameworkError> for DirectoryError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Conflict(username) => Self::Conflict { username },
            FrameworkError::EntityError(inner) => match inner.downcast::<DirectoryError>() {
                Ok(domain) => *domain,
                Err(other) => Self::Internal(other.to_string()),
            },
            exhausted @ FrameworkError::IdsExhausted => Self::Internal(exhausted.to_string()),
            closed @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                Self::Unavailable(closed.to_string())
            }
        }
    }
}
