//! # Framework Errors
//!
//! Common error types shared by every actor and client built on this crate.

/// Errors that can occur within the resource actor itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// A record with the same unique key is already stored.
    #[error("Resource already exists: {0}")]
    Conflict(String),
    /// The id counter cannot advance without wrapping.
    #[error("No identifiers left to assign")]
    IdsExhausted,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
